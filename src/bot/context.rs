use std::sync::Arc;

use crate::bot::auth::AdminPolicy;
use crate::bot::transport::ChatTransport;
use crate::database::connection::DatabaseManager;
use crate::services::live_message::LiveMessageSynchronizer;
use crate::services::raffle::RaffleService;

/// Everything a handler needs, built once at startup and shared by `Arc`.
pub struct RaffleContext {
    pub raffles: RaffleService,
    pub live: LiveMessageSynchronizer,
    pub admins: AdminPolicy,
    pub transport: Arc<dyn ChatTransport>,
}

impl RaffleContext {
    pub fn new(db: DatabaseManager, transport: Arc<dyn ChatTransport>, admin_ids: Vec<u64>) -> Self {
        Self {
            raffles: RaffleService::new(db),
            live: LiveMessageSynchronizer::new(transport.clone()),
            admins: AdminPolicy::new(admin_ids),
            transport,
        }
    }
}
