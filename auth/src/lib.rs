//! Authentication primitives library
//!
//! Provides reusable authentication infrastructure:
//! - Password hashing (Argon2id)
//! - Signed bearer token issuance and validation
//!
//! The service crate defines its own ports and wires these implementations in.
//! This keeps domain logic out of the crypto layer while avoiding duplication.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::TokenIssuer;
//! use chrono::Duration;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//! let token = issuer.issue("user@example.com", Duration::hours(1)).unwrap();
//! let claims = issuer.verify(&token).unwrap();
//! assert_eq!(claims.sub, "user@example.com");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::Clock;
pub use token::SystemClock;
pub use token::TokenError;
pub use token::TokenIssuer;
