use thiserror::Error;

/// Error for credentials validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("Email and password are required")]
    MissingFields,
}

/// Error for credential store operations
///
/// `AlreadyExists` is a registration conflict; `Unavailable` is a transient
/// infrastructure failure. Callers must not conflate the two.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("User already exists")]
    AlreadyExists,

    #[error("Credential store unavailable: {0}")]
    Unavailable(String),
}

/// Top-level error for authentication operations
///
/// `InvalidCredentials` deliberately covers both unknown email and password
/// mismatch so callers cannot distinguish them.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("{0}")]
    Validation(#[from] CredentialsError),

    #[error("User already exists")]
    DuplicateUser,

    #[error("Invalid email or password")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyExists => AuthError::DuplicateUser,
            StoreError::Unavailable(detail) => AuthError::Infrastructure(detail),
        }
    }
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        AuthError::Unknown(err.to_string())
    }
}
