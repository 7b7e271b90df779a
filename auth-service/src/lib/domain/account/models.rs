use chrono::DateTime;
use chrono::Utc;

use crate::account::errors::CredentialsError;

/// Stored credential record.
///
/// Keyed by email, case-sensitive as given at registration. The record is
/// created on successful registration and never mutated in scope (no
/// password-reset or profile-update flows).
#[derive(Debug, Clone)]
pub struct User {
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Validated email/password pair submitted to register or login.
///
/// Construction is the validation step: both fields must be non-empty.
/// The plaintext password never leaves this type except into the hasher.
#[derive(Debug)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Create a validated credentials pair.
    ///
    /// # Errors
    /// * `MissingFields` - Either field is empty
    pub fn new(email: String, password: String) -> Result<Self, CredentialsError> {
        if email.is_empty() || password.is_empty() {
            return Err(CredentialsError::MissingFields);
        }
        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}
