//! Ticket model, per-session tables and session-keyed storage.

mod memory_store;
mod store;
mod table;
mod types;

pub use memory_store::InMemoryTicketStore;
pub use store::{
    EditOutcome, EditSummary, SubmitTicketRequest, TicketError, TicketFilter, TicketPage,
    TicketStore,
};
pub use table::TicketTable;
pub use types::{SessionId, Ticket, TicketId, TicketPriority, TicketStatus, TICKET_ID_PREFIX};
