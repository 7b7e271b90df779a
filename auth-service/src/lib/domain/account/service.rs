use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenIssuer;
use chrono::Duration;
use chrono::Utc;

use crate::account::errors::AuthError;
use crate::account::models::Credentials;
use crate::account::models::User;
use crate::account::ports::AuthServicePort;
use crate::account::ports::CredentialStore;

/// Fixed token lifetime. No refresh mechanism in scope.
const TOKEN_TTL_HOURS: i64 = 1;

/// Domain service implementation for registration and login.
///
/// Orchestrates the credential store, password hasher, and token issuer.
/// Stateless apart from the injected collaborators, so calls may run
/// concurrently; the store serializes conflicting inserts itself.
pub struct AuthService<CS>
where
    CS: CredentialStore,
{
    store: Arc<CS>,
    password_hasher: PasswordHasher,
    token_issuer: Arc<TokenIssuer>,
    // Verified against when the email is unknown, so both login failure
    // paths pay the same hashing cost
    dummy_hash: String,
}

impl<CS> AuthService<CS>
where
    CS: CredentialStore,
{
    /// Create a new auth service with injected collaborators.
    ///
    /// # Errors
    /// * `Unknown` - Hashing the timing-equalization dummy failed
    pub fn new(
        store: Arc<CS>,
        password_hasher: PasswordHasher,
        token_issuer: Arc<TokenIssuer>,
    ) -> Result<Self, AuthError> {
        let dummy_hash = password_hasher
            .hash("unmatchable-dummy-password")
            .map_err(|e| AuthError::Unknown(format!("Password hashing failed: {}", e)))?;

        Ok(Self {
            store,
            password_hasher,
            token_issuer,
            dummy_hash,
        })
    }
}

#[async_trait]
impl<CS> AuthServicePort for AuthService<CS>
where
    CS: CredentialStore,
{
    async fn register(&self, credentials: Credentials) -> Result<(), AuthError> {
        // Fast-path lookup; the insert below is the true atomicity boundary
        if self
            .store
            .find_by_email(credentials.email())
            .await?
            .is_some()
        {
            return Err(AuthError::DuplicateUser);
        }

        let password_hash = self
            .password_hasher
            .hash(credentials.password())
            .map_err(|e| AuthError::Unknown(format!("Password hashing failed: {}", e)))?;

        let user = User {
            email: credentials.email().to_string(),
            password_hash,
            created_at: Utc::now(),
        };

        self.store.insert(user).await?;

        tracing::info!(email = credentials.email(), "User registered");

        Ok(())
    }

    async fn login(&self, credentials: Credentials) -> Result<String, AuthError> {
        let user = match self.store.find_by_email(credentials.email()).await? {
            Some(user) => user,
            None => {
                // Burn a verification against the dummy hash so an unknown
                // email takes as long as a wrong password
                let _ = self
                    .password_hasher
                    .verify(credentials.password(), &self.dummy_hash);
                return Err(AuthError::InvalidCredentials);
            }
        };

        let is_match = self
            .password_hasher
            .verify(credentials.password(), &user.password_hash)
            .map_err(|e| AuthError::Unknown(format!("Password verification failed: {}", e)))?;

        if !is_match {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .token_issuer
            .issue(&user.email, Duration::hours(TOKEN_TTL_HOURS))
            .map_err(|e| AuthError::Unknown(format!("Token issuance failed: {}", e)))?;

        tracing::info!(email = %user.email, "User logged in");

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::account::errors::StoreError;

    mock! {
        pub TestCredentialStore {}

        #[async_trait]
        impl CredentialStore for TestCredentialStore {
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
            async fn insert(&self, user: User) -> Result<(), StoreError>;
        }
    }

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    // Low-cost hasher keeps the suite fast; parameters ride in the hash
    fn test_hasher() -> PasswordHasher {
        PasswordHasher::with_params(8, 1, 1).unwrap()
    }

    fn test_service(store: MockTestCredentialStore) -> AuthService<MockTestCredentialStore> {
        let issuer = Arc::new(TokenIssuer::new(SECRET).unwrap());
        AuthService::new(Arc::new(store), test_hasher(), issuer).unwrap()
    }

    fn stored_user(email: &str, password: &str) -> User {
        User {
            email: email.to_string(),
            password_hash: test_hasher().hash(password).unwrap(),
            created_at: Utc::now(),
        }
    }

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials::new(email.to_string(), password.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut store = MockTestCredentialStore::new();

        store
            .expect_find_by_email()
            .with(eq("a@x.com"))
            .times(1)
            .returning(|_| Ok(None));

        store
            .expect_insert()
            .withf(|user| {
                user.email == "a@x.com"
                    && user.password_hash.starts_with("$argon2")
                    && user.password_hash != "pw1"
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = test_service(store);

        let result = service.register(credentials("a@x.com", "pw1")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_register_duplicate_fast_path() {
        let mut store = MockTestCredentialStore::new();

        store
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(stored_user("a@x.com", "pw1"))));

        // No insert attempt when the lookup already finds a user
        store.expect_insert().times(0);

        let service = test_service(store);

        let result = service.register(credentials("a@x.com", "pw2")).await;
        assert!(matches!(result, Err(AuthError::DuplicateUser)));
    }

    #[tokio::test]
    async fn test_register_duplicate_insert_race() {
        let mut store = MockTestCredentialStore::new();

        // Lookup misses, but a concurrent register wins the insert
        store
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        store
            .expect_insert()
            .times(1)
            .returning(|_| Err(StoreError::AlreadyExists));

        let service = test_service(store);

        let result = service.register(credentials("a@x.com", "pw1")).await;
        assert!(matches!(result, Err(AuthError::DuplicateUser)));
    }

    #[tokio::test]
    async fn test_register_store_unavailable() {
        let mut store = MockTestCredentialStore::new();

        store
            .expect_find_by_email()
            .times(1)
            .returning(|_| Err(StoreError::Unavailable("connection refused".to_string())));

        let service = test_service(store);

        let result = service.register(credentials("a@x.com", "pw1")).await;
        assert!(matches!(result, Err(AuthError::Infrastructure(_))));
    }

    #[tokio::test]
    async fn test_login_success_issues_verifiable_token() {
        let mut store = MockTestCredentialStore::new();

        store
            .expect_find_by_email()
            .with(eq("a@x.com"))
            .times(1)
            .returning(|_| Ok(Some(stored_user("a@x.com", "pw1"))));

        let issuer = Arc::new(TokenIssuer::new(SECRET).unwrap());
        let service =
            AuthService::new(Arc::new(store), test_hasher(), Arc::clone(&issuer)).unwrap();

        let token = service
            .login(credentials("a@x.com", "pw1"))
            .await
            .expect("Login failed");

        let claims = issuer.verify(&token).expect("Token failed verification");
        assert_eq!(claims.sub, "a@x.com");
        assert_eq!(claims.exp - claims.iat, 60 * 60);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut store = MockTestCredentialStore::new();

        store
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(stored_user("a@x.com", "pw1"))));

        let service = test_service(store);

        let result = service.login(credentials("a@x.com", "wrong")).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let mut store = MockTestCredentialStore::new();

        store
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = test_service(store);

        let result = service.login(credentials("nobody@x.com", "pw1")).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_failure_outcomes_indistinguishable() {
        let mut store = MockTestCredentialStore::new();

        store
            .expect_find_by_email()
            .with(eq("a@x.com"))
            .returning(|_| Ok(Some(stored_user("a@x.com", "pw1"))));
        store
            .expect_find_by_email()
            .with(eq("nobody@x.com"))
            .returning(|_| Ok(None));

        let service = test_service(store);

        let wrong_password = service
            .login(credentials("a@x.com", "wrong"))
            .await
            .unwrap_err();
        let unknown_email = service
            .login(credentials("nobody@x.com", "pw1"))
            .await
            .unwrap_err();

        // Same variant, same message: no user enumeration
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_email, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_store_unavailable() {
        let mut store = MockTestCredentialStore::new();

        store
            .expect_find_by_email()
            .times(1)
            .returning(|_| Err(StoreError::Unavailable("connection refused".to_string())));

        let service = test_service(store);

        let result = service.login(credentials("a@x.com", "pw1")).await;
        assert!(matches!(result, Err(AuthError::Infrastructure(_))));
    }
}
