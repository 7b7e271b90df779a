use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::clock::Clock;
use super::clock::SystemClock;
use super::errors::TokenError;

/// Issues and validates signed, time-limited bearer tokens.
///
/// Tokens are JWTs signed with HS256 and a symmetric secret. The secret is
/// process-wide configuration, immutable for the process lifetime; rotation
/// is out of scope. Construction fails on an empty secret so the service can
/// never silently sign with a default.
///
/// Expiry is checked against the issuer's [`Clock`] rather than inside the
/// JWT library, which keeps the invalid/expired distinction explicit and lets
/// tests move time.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    clock: Box<dyn Clock>,
}

impl TokenIssuer {
    /// Create a token issuer signing with the given secret.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    ///
    /// # Errors
    /// * `EmptySecret` - Secret is empty; refuse to operate rather than sign
    ///   with a weak default
    pub fn new(secret: &[u8]) -> Result<Self, TokenError> {
        Self::with_clock(secret, SystemClock)
    }

    /// Create a token issuer with an explicit time source.
    pub fn with_clock(secret: &[u8], clock: impl Clock + 'static) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::EmptySecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            clock: Box::new(clock),
        })
    }

    /// Issue a signed token for a subject, valid for `ttl` from now.
    ///
    /// # Returns
    /// Opaque token string embedding `{sub, iat, exp}`
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<String, TokenError> {
        let now = self.clock.now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Validate a token: signature integrity first, then expiry.
    ///
    /// # Returns
    /// The embedded claims when the signature verifies and the token is live
    ///
    /// # Errors
    /// * `Invalid` - Signature does not verify or the token is malformed
    /// * `Expired` - Well-formed and correctly signed, but past its expiry
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below against the injected clock
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| TokenError::Invalid(e.to_string()))?;

        let claims = token_data.claims;
        if claims.is_expired(self.clock.now().timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}
