use chrono::DateTime;
use chrono::Utc;

/// Time source for token issuance and expiry checks.
///
/// Production code uses [`SystemClock`]; tests inject a fixed or movable
/// clock to exercise expiry without sleeping.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
