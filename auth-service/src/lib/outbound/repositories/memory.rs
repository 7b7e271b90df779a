use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::account::errors::StoreError;
use crate::account::models::User;
use crate::account::ports::CredentialStore;

/// Process-local credential store.
///
/// Records live for the process lifetime and are not durable. Uniqueness is
/// enforced by check-and-insert under a single write lock, so concurrent
/// registrations of the same email have exactly one winner.
pub struct InMemoryCredentialStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self
            .users
            .read()
            .map_err(|_| StoreError::Unavailable("credential store lock poisoned".to_string()))?;

        Ok(users.get(email).cloned())
    }

    async fn insert(&self, user: User) -> Result<(), StoreError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| StoreError::Unavailable("credential store lock poisoned".to_string()))?;

        match users.entry(user.email.clone()) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(user);
                Ok(())
            }
        }
    }
}
