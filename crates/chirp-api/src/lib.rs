pub mod accounts;
pub mod error;
pub mod messages;

use std::sync::Arc;

use chirp_service::{AccountService, MessageService};

/// Shared handler state, wired once at process start.
pub struct AppStateInner {
    pub accounts: AccountService,
    pub messages: MessageService,
}

pub type AppState = Arc<AppStateInner>;
