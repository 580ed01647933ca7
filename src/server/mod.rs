//! Accept loop and process-wide state.

pub mod listener;

use std::path::PathBuf;
use std::sync::Arc;

use crate::auth::{AuthService, Authenticator};
use crate::config::Config;
use crate::controller::Dispatcher;
use crate::session::SessionManager;

/// State shared by every connection.
pub struct AppState {
    pub dispatcher: Dispatcher,
    pub static_root: PathBuf,
}

impl AppState {
    pub fn new(dispatcher: Dispatcher, static_root: impl Into<PathBuf>) -> Self {
        Self {
            dispatcher,
            static_root: static_root.into(),
        }
    }

    /// Wires the session registry, auth service and routes for `cfg`.
    pub fn from_config(cfg: &Config) -> Self {
        let sessions = Arc::new(SessionManager::new());
        let auth: Arc<dyn Authenticator> = Arc::new(AuthService::new(sessions));
        Self::new(Dispatcher::new(auth), cfg.static_files.root.clone())
    }
}
