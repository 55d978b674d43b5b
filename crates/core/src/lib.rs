pub mod clock;
pub mod config;
pub mod dashboard;
pub mod metrics;
pub mod seed;
pub mod ticket;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, LogFormat,
    LoggingConfig, SeedConfig, ServerConfig, SessionConfig, SubmissionConfig,
};
pub use dashboard::{
    ChartData, DashboardView, DisplayMetric, PriorityCount, Statistics, StatusMonthCount,
};
pub use seed::{SeedGenerator, ISSUE_CATALOG};
pub use ticket::{
    EditOutcome, EditSummary, InMemoryTicketStore, SessionId, SubmitTicketRequest, Ticket,
    TicketError, TicketFilter, TicketId, TicketPage, TicketPriority, TicketStatus, TicketStore,
    TicketTable,
};
