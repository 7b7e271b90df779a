use async_trait::async_trait;

use crate::account::errors::AuthError;
use crate::account::errors::StoreError;
use crate::account::models::Credentials;
use crate::account::models::User;

/// Port for authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user from validated credentials.
    ///
    /// Registration does not authenticate: no token is returned.
    ///
    /// # Errors
    /// * `DuplicateUser` - A user with this email already exists
    /// * `Infrastructure` - Credential store unavailable
    async fn register(&self, credentials: Credentials) -> Result<(), AuthError>;

    /// Verify credentials and issue a bearer token.
    ///
    /// # Returns
    /// Signed token with the email as subject, valid for one hour
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or password mismatch
    ///   (indistinguishable by design)
    /// * `Infrastructure` - Credential store unavailable
    async fn login(&self, credentials: Credentials) -> Result<String, AuthError>;
}

/// Persistence operations for credential records.
///
/// The store exclusively owns `User` records; the service never caches them.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve a user by email.
    ///
    /// # Returns
    /// Optional user record (None if not found)
    ///
    /// # Errors
    /// * `Unavailable` - Store unreachable
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Persist a new user record.
    ///
    /// Must be atomic with respect to concurrent inserts of the same email:
    /// at most one wins.
    ///
    /// # Errors
    /// * `AlreadyExists` - A record with this email is already present
    /// * `Unavailable` - Store unreachable
    async fn insert(&self, user: User) -> Result<(), StoreError>;
}
