use chrono::{DateTime, Utc};

/// Time source. Injected so creation stamps and expiry arithmetic stay
/// testable.
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
