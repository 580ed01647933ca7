use std::sync::Arc;

use tracing::{debug, info, warn};

use super::error::AuthError;
use super::repository::{AccountStore, InMemoryAccountStore};
use super::user::User;
use crate::session::{Session, SessionManager, USER_ATTRIBUTE};

/// Authentication operations the controllers depend on.
pub trait Authenticator: Send + Sync {
    /// Checks credentials and returns the id of a new session.
    ///
    /// Every successful call issues a distinct session.
    fn login(&self, account: &str, password: &str) -> Result<String, AuthError>;

    /// Creates an account and returns the id of a new session for it.
    fn register(&self, account: &str, password: &str, email: &str) -> Result<String, AuthError>;

    /// True iff `session_id` names an active session. Never fails.
    fn is_logged_in(&self, session_id: Option<&str>) -> bool;

    /// Ends a session. Returns whether one was removed.
    fn logout(&self, session_id: &str) -> bool;
}

pub struct AuthService {
    accounts: Arc<dyn AccountStore>,
    sessions: Arc<SessionManager>,
}

impl AuthService {
    /// Service backed by the seeded in-memory account store.
    pub fn new(sessions: Arc<SessionManager>) -> Self {
        Self::with_store(Arc::new(InMemoryAccountStore::seeded()), sessions)
    }

    pub fn with_store(accounts: Arc<dyn AccountStore>, sessions: Arc<SessionManager>) -> Self {
        Self { accounts, sessions }
    }

    pub fn sessions(&self) -> &Arc<SessionManager> {
        &self.sessions
    }

    fn issue_session(&self, account: &str) -> String {
        let mut session = Session::generate();
        session.set_attribute(USER_ATTRIBUTE, account);

        let id = session.id().to_string();
        self.sessions.add(session);
        id
    }
}

impl Authenticator for AuthService {
    fn login(&self, account: &str, password: &str) -> Result<String, AuthError> {
        let user = self
            .accounts
            .find_by_account(account)
            .filter(|user| user.check_password(password));

        let Some(user) = user else {
            warn!(account = %account, "Login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        let session_id = self.issue_session(user.account());
        info!(account = %user.account(), "Login succeeded");
        Ok(session_id)
    }

    fn register(&self, account: &str, password: &str, email: &str) -> Result<String, AuthError> {
        if let Err(e) = self.accounts.insert(User::new(account, password, email)) {
            warn!(account = %account, "Registration rejected: {}", e);
            return Err(e);
        }

        let session_id = self.issue_session(account);
        info!(account = %account, "Account registered");
        Ok(session_id)
    }

    fn is_logged_in(&self, session_id: Option<&str>) -> bool {
        match session_id {
            Some(id) if !id.is_empty() => self.sessions.contains(id),
            _ => false,
        }
    }

    fn logout(&self, session_id: &str) -> bool {
        match self.sessions.remove(session_id) {
            Some(session) => {
                info!(account = session.user().unwrap_or("-"), "Logged out");
                true
            }
            None => {
                debug!("Logout for unknown session");
                false
            }
        }
    }
}
