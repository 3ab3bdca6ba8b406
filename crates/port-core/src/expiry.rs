//! Fixed set of port expiry durations.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Named expiry durations a port can be created with.
///
/// The ordering of [`EXPIRY_OPTIONS`] is part of the contract: pickers and
/// the default index refer to positions in that list, so variants must not
/// be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpiryOption {
    OneHour,
    SixHours,
    TwelveHours,
    OneDay,
    OneWeek,
    OneMonth,
    Never,
}

/// All expiry options, in contract order.
pub const EXPIRY_OPTIONS: [ExpiryOption; 7] = [
    ExpiryOption::OneHour,
    ExpiryOption::SixHours,
    ExpiryOption::TwelveHours,
    ExpiryOption::OneDay,
    ExpiryOption::OneWeek,
    ExpiryOption::OneMonth,
    ExpiryOption::Never,
];

/// Index into [`EXPIRY_OPTIONS`] used when no expiry is specified.
pub const DEFAULT_EXPIRY_INDEX: usize = 4;

impl ExpiryOption {
    /// Duration until the port expires. `None` for ports that never expire.
    pub fn duration(self) -> Option<Duration> {
        match self {
            Self::OneHour => Some(Duration::hours(1)),
            Self::SixHours => Some(Duration::hours(6)),
            Self::TwelveHours => Some(Duration::hours(12)),
            Self::OneDay => Some(Duration::days(1)),
            Self::OneWeek => Some(Duration::days(7)),
            Self::OneMonth => Some(Duration::days(30)),
            Self::Never => None,
        }
    }
}

impl Default for ExpiryOption {
    fn default() -> Self {
        EXPIRY_OPTIONS[DEFAULT_EXPIRY_INDEX]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fifth_option() {
        assert_eq!(ExpiryOption::default(), ExpiryOption::OneWeek);
        assert_eq!(EXPIRY_OPTIONS[DEFAULT_EXPIRY_INDEX], ExpiryOption::OneWeek);
    }

    #[test]
    fn test_options_keep_contract_order() {
        assert_eq!(EXPIRY_OPTIONS[0], ExpiryOption::OneHour);
        assert_eq!(EXPIRY_OPTIONS[6], ExpiryOption::Never);
        assert_eq!(EXPIRY_OPTIONS.len(), 7);
    }

    #[test]
    fn test_durations() {
        assert_eq!(ExpiryOption::OneDay.duration(), Some(Duration::days(1)));
        assert_eq!(ExpiryOption::Never.duration(), None);
    }
}
