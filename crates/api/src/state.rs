use std::sync::Arc;

use sitetrack_db::Store;
use sitetrack_events::{EventBus, NoticeLog};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything lives behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory entity store.
    pub store: Arc<Store>,
    pub config: Arc<ServerConfig>,
    /// Event bus for mutation outcomes.
    pub event_bus: Arc<EventBus>,
    /// Recent notices, filled by the background [`NoticeLog::run`] task.
    pub notices: Arc<NoticeLog>,
}

impl AppState {
    pub fn new(store: Store, config: ServerConfig) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
            event_bus: Arc::new(EventBus::default()),
            notices: Arc::new(NoticeLog::default()),
        }
    }
}
