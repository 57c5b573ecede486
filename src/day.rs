/// Calendar day buckets
/// Instants are truncated to their calendar date in one reference timezone

use chrono::{Datelike, Local, NaiveDate};
use chrono_tz::Tz;
use std::fmt;
use std::str::FromStr;

use crate::interval::Instant;

/// Calendar date used as an aggregation bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    /// Build a key from a (year, month, day) triple, None if the date does not exist
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(DayKey)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Timezone used to decide which calendar day an instant belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceZone {
    /// System local timezone
    #[default]
    Local,
    /// Named IANA timezone
    Named(Tz),
}

impl ReferenceZone {
    /// Calendar date of `instant` in this zone
    pub fn day_key(&self, instant: Instant) -> DayKey {
        let date = match self {
            ReferenceZone::Local => instant.with_timezone(&Local).date_naive(),
            ReferenceZone::Named(tz) => instant.with_timezone(tz).date_naive(),
        };
        DayKey(date)
    }
}

impl FromStr for ReferenceZone {
    type Err = String;

    /// Accepts "local" (any case) or an IANA name such as "Europe/Paris"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("local") {
            return Ok(ReferenceZone::Local);
        }
        s.parse::<Tz>()
            .map(ReferenceZone::Named)
            .map_err(|_| format!("unknown timezone '{}'", s))
    }
}

impl fmt::Display for ReferenceZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceZone::Local => write!(f, "local"),
            ReferenceZone::Named(tz) => write!(f, "{}", tz.name()),
        }
    }
}
