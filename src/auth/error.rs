use thiserror::Error;

/// Expected failures of login and registration.
///
/// These are mapped to response statuses by the controllers and never reach
/// the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Unknown account or wrong password. The two cases are deliberately
    /// indistinguishable.
    #[error("no such account or wrong password")]
    InvalidCredentials,

    /// Registration for an account name that is already taken.
    #[error("duplicate account")]
    DuplicateAccount,
}
