//! In-memory, session-keyed ticket store implementation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use super::{
    EditOutcome, SessionId, SubmitTicketRequest, Ticket, TicketError, TicketFilter, TicketId,
    TicketPage, TicketStore, TicketTable,
};
use crate::clock::{Clock, SystemClock};
use crate::config::{Config, SeedConfig};
use crate::dashboard::DashboardView;
use crate::metrics::{
    ROWS_CHANGED, SESSIONS_DISCARDED, SESSIONS_SEEDED, TABLE_EDITS, TICKETS_SUBMITTED,
};
use crate::seed::SeedGenerator;

struct SessionSlot {
    table: TicketTable,
    last_access: u64,
}

/// How an operation may bring an unknown session into the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    /// Seeds the session only while there is free capacity.
    Read,
    /// Seeds the session, evicting the least recently used one if full.
    Write,
}

#[derive(Default)]
struct Sessions {
    slots: HashMap<SessionId, SessionSlot>,
    /// Monotonic access counter used for LRU eviction.
    tick: u64,
}

/// Ticket store holding one table per session in process memory.
///
/// A session's table is seeded the first time the session is touched and
/// dropped when the session ends or is evicted. All operations take one
/// lock, so operations within a session apply atomically in arrival order.
///
/// When the store is full, a read of an unknown session is answered from a
/// fresh seed without storing it, so unknown ids cannot push out live
/// sessions. Only opening a session or writing to one evicts.
pub struct InMemoryTicketStore {
    seed: SeedConfig,
    max_sessions: usize,
    reject_empty_issue: bool,
    clock: Arc<dyn Clock>,
    sessions: Mutex<Sessions>,
}

impl InMemoryTicketStore {
    /// Create a store from configuration, dating submissions with the system clock.
    pub fn new(config: &Config) -> Self {
        Self {
            seed: config.seed.clone(),
            max_sessions: config.sessions.max_sessions.max(1),
            reject_empty_issue: config.submission.reject_empty_issue,
            clock: Arc::new(SystemClock),
            sessions: Mutex::new(Sessions::default()),
        }
    }

    /// Replace the clock used to date new tickets.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    fn lock(&self) -> MutexGuard<'_, Sessions> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn seeded_table(&self) -> TicketTable {
        TicketTable::new(SeedGenerator::new(&self.seed).generate(), self.seed.first_id)
    }

    /// Run `f` against the session's table, seeding it first if needed.
    fn with_table<T>(
        &self,
        session: &SessionId,
        access: Access,
        f: impl FnOnce(&mut TicketTable) -> T,
    ) -> T {
        let mut sessions = self.lock();
        sessions.tick += 1;
        let tick = sessions.tick;

        if !sessions.slots.contains_key(session) && sessions.slots.len() >= self.max_sessions {
            if access == Access::Read {
                debug!(session = %session, "Store full, serving unknown session unstored");
                return f(&mut self.seeded_table());
            }
            self.evict_if_full(&mut sessions);
        }

        let slot = sessions.slots.entry(session.clone()).or_insert_with(|| {
            let table = self.seeded_table();
            info!(session = %session, tickets = table.len(), "Seeded new session");
            SESSIONS_SEEDED.inc();
            SessionSlot {
                table,
                last_access: tick,
            }
        });
        slot.last_access = tick;
        f(&mut slot.table)
    }

    fn evict_if_full(&self, sessions: &mut Sessions) {
        while sessions.slots.len() >= self.max_sessions {
            let oldest = sessions
                .slots
                .iter()
                .min_by_key(|(_, slot)| slot.last_access)
                .map(|(id, _)| id.clone());
            match oldest {
                Some(id) => {
                    sessions.slots.remove(&id);
                    SESSIONS_DISCARDED.with_label_values(&["evicted"]).inc();
                    info!(session = %id, "Evicted least recently used session");
                }
                None => break,
            }
        }
    }
}

impl TicketStore for InMemoryTicketStore {
    fn open_session(&self, session: &SessionId) -> Result<DashboardView, TicketError> {
        Ok(self.with_table(session, Access::Write, |table| {
            DashboardView::new(session.clone(), table.rows())
        }))
    }

    fn view(&self, session: &SessionId) -> Result<DashboardView, TicketError> {
        Ok(self.with_table(session, Access::Read, |table| {
            DashboardView::new(session.clone(), table.rows())
        }))
    }

    fn list(&self, session: &SessionId, filter: &TicketFilter) -> Result<Vec<Ticket>, TicketError> {
        Ok(self.with_table(session, Access::Read, |table| table.list(filter)))
    }

    fn count(&self, session: &SessionId, filter: &TicketFilter) -> Result<usize, TicketError> {
        Ok(self.with_table(session, Access::Read, |table| table.count(filter)))
    }

    fn page(&self, session: &SessionId, filter: &TicketFilter) -> Result<TicketPage, TicketError> {
        Ok(self.with_table(session, Access::Read, |table| TicketPage {
            tickets: table.list(filter),
            total: table.count(filter),
        }))
    }

    fn get(&self, session: &SessionId, id: TicketId) -> Result<Option<Ticket>, TicketError> {
        Ok(self.with_table(session, Access::Read, |table| table.get(id).cloned()))
    }

    fn submit(
        &self,
        session: &SessionId,
        request: SubmitTicketRequest,
    ) -> Result<Ticket, TicketError> {
        let today = self.clock.today();
        let result = self.with_table(session, Access::Write, |table| {
            table.submit(request, today, self.reject_empty_issue)
        });

        match &result {
            Ok(ticket) => {
                TICKETS_SUBMITTED.with_label_values(&["created"]).inc();
                info!(
                    session = %session,
                    ticket_id = %ticket.id,
                    priority = %ticket.priority,
                    "Ticket submitted"
                );
            }
            Err(e) => {
                TICKETS_SUBMITTED.with_label_values(&[e.kind()]).inc();
                debug!(session = %session, error = %e, "Ticket submission rejected");
            }
        }
        result
    }

    fn apply_edits(
        &self,
        session: &SessionId,
        rows: Vec<Ticket>,
    ) -> Result<EditOutcome, TicketError> {
        let result = self.with_table(session, Access::Write, |table| -> Result<_, TicketError> {
            let summary = table.reconcile(rows)?;
            Ok(EditOutcome {
                summary,
                view: DashboardView::new(session.clone(), table.rows()),
            })
        });

        match &result {
            Ok(EditOutcome { summary, .. }) => {
                TABLE_EDITS.with_label_values(&["applied"]).inc();
                ROWS_CHANGED.inc_by(summary.changed as u64);
                info!(
                    session = %session,
                    rows = summary.rows,
                    changed = summary.changed,
                    "Applied table edits"
                );
            }
            Err(e) => {
                TABLE_EDITS.with_label_values(&[e.kind()]).inc();
                debug!(session = %session, error = %e, "Table edit rejected");
            }
        }
        result
    }

    fn end_session(&self, session: &SessionId) -> Result<(), TicketError> {
        let removed = self.lock().slots.remove(session);
        match removed {
            Some(_) => {
                SESSIONS_DISCARDED.with_label_values(&["ended"]).inc();
                info!(session = %session, "Session ended");
                Ok(())
            }
            None => Err(TicketError::SessionNotFound(session.to_string())),
        }
    }

    fn session_count(&self) -> usize {
        self.lock().slots.len()
    }
}
