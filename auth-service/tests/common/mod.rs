use std::sync::Arc;

use auth::PasswordHasher;
use auth::TokenIssuer;
use auth_service::domain::account::service::AuthService;
use auth_service::inbound::http::router::create_router;
use auth_service::outbound::repositories::InMemoryCredentialStore;

/// Signing secret shared by the spawned server and token-forging tests.
pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let token_issuer =
            Arc::new(TokenIssuer::new(JWT_SECRET).expect("Failed to create token issuer"));

        // Low-cost hashing keeps the suite fast; verification still exercises
        // the real Argon2 path
        let password_hasher =
            PasswordHasher::with_params(8, 1, 1).expect("Failed to create password hasher");

        let credential_store = Arc::new(InMemoryCredentialStore::new());

        let auth_service = Arc::new(
            AuthService::new(credential_store, password_hasher, Arc::clone(&token_issuer))
                .expect("Failed to create auth service"),
        );

        let router = create_router(auth_service, token_issuer);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }
}
