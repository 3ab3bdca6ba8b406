use chrono::{DateTime, Utc};

use port_core::ports::ClockPort;

/// Wall-clock time source.
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
