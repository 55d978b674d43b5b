use std::sync::Arc;

use helpdesk_core::{Config, TicketStore};

/// Shared application state
pub struct AppState {
    config: Config,
    ticket_store: Arc<dyn TicketStore>,
}

impl AppState {
    pub fn new(config: Config, ticket_store: Arc<dyn TicketStore>) -> Self {
        Self {
            config,
            ticket_store,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ticket_store(&self) -> &dyn TicketStore {
        self.ticket_store.as_ref()
    }
}
