use thiserror::Error;

/// Error type for token operations.
///
/// `Invalid` and `Expired` are distinct so callers can log and test the
/// difference; any boundary that checks tokens collapses both into a single
/// generic unauthenticated signal before it reaches an end user.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Signing secret must not be empty")]
    EmptySecret,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is invalid: {0}")]
    Invalid(String),

    #[error("Token is expired")]
    Expired,
}
