//! Fixture timestamps
//!
//! Timestamps are naive date-times rendered in ISO-8601 with a literal `Z`
//! appended. No timezone conversion happens: a local wall-clock reading is
//! tagged `Z` as-is, and fixture consumers depend on that exact text.

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

const SUFFIX: &str = "Z";
const WHOLE_SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const MICROSECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// ISO-8601 text of a naive date-time with a literal `Z` suffix
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixtureTimestamp(String);

impl FixtureTimestamp {
    /// Renders `datetime` with microseconds only when they are non-zero
    pub fn from_naive(datetime: NaiveDateTime) -> Self {
        let format = if datetime.nanosecond() / 1_000 == 0 {
            WHOLE_SECONDS_FORMAT
        } else {
            MICROSECONDS_FORMAT
        };
        Self(format!("{}{SUFFIX}", datetime.format(format)))
    }

    /// Midnight at the start of `date`
    pub fn start_of_day(date: NaiveDate) -> Self {
        Self::from_naive(date.and_time(chrono::NaiveTime::MIN))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the text back, ignoring the `Z` tag
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        let text = self.0.strip_suffix(SUFFIX)?;
        NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f").ok()
    }
}

impl fmt::Display for FixtureTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of the processing time stamped on each event
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
