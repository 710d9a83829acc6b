//! Time period domain types

use chrono::TimeDelta;
use std::fmt;
use std::str::FromStr;

/// Recent window a report covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimePeriod {
    Last5Minutes,
    Last15Minutes,
    Last30Minutes,
    Last1Hour,
    Last6Hours,
    Last12Hours,
    Last1Day,
    Last2Days,
    Last7Days,
    Last14Days,
    Last1Month,
}

impl TimePeriod {
    /// Every period, shortest first
    pub const ALL: [TimePeriod; 11] = [
        TimePeriod::Last5Minutes,
        TimePeriod::Last15Minutes,
        TimePeriod::Last30Minutes,
        TimePeriod::Last1Hour,
        TimePeriod::Last6Hours,
        TimePeriod::Last12Hours,
        TimePeriod::Last1Day,
        TimePeriod::Last2Days,
        TimePeriod::Last7Days,
        TimePeriod::Last14Days,
        TimePeriod::Last1Month,
    ];

    /// Short label, e.g. "1h"
    pub fn label(&self) -> &'static str {
        match self {
            TimePeriod::Last5Minutes => "5m",
            TimePeriod::Last15Minutes => "15m",
            TimePeriod::Last30Minutes => "30m",
            TimePeriod::Last1Hour => "1h",
            TimePeriod::Last6Hours => "6h",
            TimePeriod::Last12Hours => "12h",
            TimePeriod::Last1Day => "1d",
            TimePeriod::Last2Days => "2d",
            TimePeriod::Last7Days => "7d",
            TimePeriod::Last14Days => "14d",
            TimePeriod::Last1Month => "1mo",
        }
    }

    /// Length of the window. A month is 30 days.
    pub fn duration(&self) -> TimeDelta {
        match self {
            TimePeriod::Last5Minutes => TimeDelta::minutes(5),
            TimePeriod::Last15Minutes => TimeDelta::minutes(15),
            TimePeriod::Last30Minutes => TimeDelta::minutes(30),
            TimePeriod::Last1Hour => TimeDelta::hours(1),
            TimePeriod::Last6Hours => TimeDelta::hours(6),
            TimePeriod::Last12Hours => TimeDelta::hours(12),
            TimePeriod::Last1Day => TimeDelta::days(1),
            TimePeriod::Last2Days => TimeDelta::days(2),
            TimePeriod::Last7Days => TimeDelta::days(7),
            TimePeriod::Last14Days => TimeDelta::days(14),
            TimePeriod::Last1Month => TimeDelta::days(30),
        }
    }

    /// All labels, for error messages and help output
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(TimePeriod::label).collect()
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a label is not a known time period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTimePeriod(pub String);

impl fmt::Display for UnknownTimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown time period '{}'", self.0)
    }
}

impl std::error::Error for UnknownTimePeriod {}

impl FromStr for TimePeriod {
    type Err = UnknownTimePeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimePeriod::ALL
            .iter()
            .copied()
            .find(|period| period.label() == s)
            .ok_or_else(|| UnknownTimePeriod(s.to_string()))
    }
}
