use std::sync::Arc;

use anyhow::Context;
use auth::PasswordHasher;
use auth::TokenIssuer;
use auth_service::config::Config;
use auth_service::domain::account::service::AuthService;
use auth_service::inbound::http::router::create_router;
use auth_service::outbound::repositories::InMemoryCredentialStore;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auth_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "auth-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load().context("Failed to load configuration")?;

    // The secret itself never reaches the log
    tracing::info!(
        http_port = config.server.http_port,
        hasher_memory_kib = config.hasher.memory_kib,
        hasher_iterations = config.hasher.iterations,
        hasher_parallelism = config.hasher.parallelism,
        "Configuration loaded"
    );

    // Refuses an empty secret; startup is the only place the secret is read
    let token_issuer = Arc::new(
        TokenIssuer::new(config.jwt.secret.as_bytes())
            .context("Failed to construct token issuer")?,
    );

    let password_hasher = PasswordHasher::with_params(
        config.hasher.memory_kib,
        config.hasher.iterations,
        config.hasher.parallelism,
    )
    .context("Invalid password hasher parameters")?;

    let credential_store = Arc::new(InMemoryCredentialStore::new());
    tracing::warn!(
        store = "in-memory",
        "Credential store is process-local; records do not survive restarts"
    );

    let auth_service = Arc::new(
        AuthService::new(credential_store, password_hasher, Arc::clone(&token_issuer))
            .context("Failed to construct auth service")?,
    );

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, token_issuer);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
