//! Server-side sessions.
//!
//! A [`Session`] is created when an account logs in or registers and lives in
//! the process-wide [`SessionManager`] until it is removed on logout. Sessions
//! do not expire on their own.

pub mod manager;

pub use manager::SessionManager;

use std::collections::HashMap;

/// Attribute key holding the account name a session was issued for.
pub const USER_ATTRIBUTE: &str = "user";

/// One authenticated browser, identified by an opaque id carried in a cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: String,
    attributes: HashMap<String, String>,
}

impl Session {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: HashMap::new(),
        }
    }

    /// A session with a freshly generated, unguessable id.
    pub fn generate() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|v| v.as_str())
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    /// Account name this session was issued for, if any.
    pub fn user(&self) -> Option<&str> {
        self.attribute(USER_ATTRIBUTE)
    }
}
