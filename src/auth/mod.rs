//! Accounts and authentication.
//!
//! [`AuthService`] checks credentials against an [`AccountStore`] and issues
//! sessions through the shared [`SessionManager`](crate::session::SessionManager).

pub mod error;
pub mod repository;
pub mod service;
pub mod user;

pub use error::AuthError;
pub use repository::{AccountStore, InMemoryAccountStore};
pub use service::{AuthService, Authenticator};
pub use user::User;
