use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an issued bearer token.
///
/// The token is stateless: signature plus expiry check is the whole
/// validity story, nothing is looked up server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (the authenticated identity)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Check whether the token has expired at the given instant.
    ///
    /// A token is live strictly before `exp`; at `exp` it is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}
