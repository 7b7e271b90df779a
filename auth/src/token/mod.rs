pub mod claims;
pub mod clock;
pub mod errors;
pub mod issuer;

pub use claims::Claims;
pub use clock::Clock;
pub use clock::SystemClock;
pub use errors::TokenError;
pub use issuer::TokenIssuer;
