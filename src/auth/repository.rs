use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::error::AuthError;
use super::user::User;

/// Persistence for accounts, looked up by account name.
pub trait AccountStore: Send + Sync {
    fn find_by_account(&self, account: &str) -> Option<User>;

    /// Inserts a new account, failing with [`AuthError::DuplicateAccount`]
    /// if the name is taken. The check and the insert are one atomic step.
    fn insert(&self, user: User) -> Result<(), AuthError>;
}

/// Process-local account store.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryAccountStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the built-in `gugu` account.
    pub fn seeded() -> Self {
        let seed = User::new("gugu", "password", "hkkang@woowahan.com");
        let users = HashMap::from([(seed.account().to_string(), seed)]);
        Self {
            users: RwLock::new(users),
        }
    }

    pub fn len(&self) -> usize {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AccountStore for InMemoryAccountStore {
    fn find_by_account(&self, account: &str) -> Option<User> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(account)
            .cloned()
    }

    fn insert(&self, user: User) -> Result<(), AuthError> {
        let mut users = self
            .users
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if users.contains_key(user.account()) {
            return Err(AuthError::DuplicateAccount);
        }

        users.insert(user.account().to_string(), user);
        Ok(())
    }
}
