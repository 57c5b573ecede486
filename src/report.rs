/// Report formatting
/// Turns daily totals into "Sleep time on <date> is: HH:MM:SS" lines

use chrono::NaiveDate;
use std::fmt::Write;
use thiserror::Error;

use crate::aggregate::DailyTotals;
use crate::day::DayKey;

/// Default date pattern, renders as `dd MMM yyyy` (e.g. "06 Nov 2023")
pub const DEFAULT_DATE_FORMAT: &str = "%d %b %Y";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("date format cannot be empty")]
    Empty,
    #[error("invalid date format '{0}'")]
    Invalid(String),
}

/// A strftime pattern checked up front, so formatting a day never fails.
/// Time-of-day and offset specifiers are rejected since days carry neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat(String);

impl DateFormat {
    pub fn new(pattern: &str) -> Result<Self, FormatError> {
        if pattern.trim().is_empty() {
            return Err(FormatError::Empty);
        }
        let mut probe = String::new();
        if write!(probe, "{}", NaiveDate::default().format(pattern)).is_err() {
            return Err(FormatError::Invalid(pattern.to_string()));
        }
        Ok(Self(pattern.to_string()))
    }

    pub fn pattern(&self) -> &str {
        &self.0
    }

    pub fn format_day(&self, day: &DayKey) -> String {
        day.date().format(&self.0).to_string()
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self(DEFAULT_DATE_FORMAT.to_string())
    }
}

/// Format seconds as HH:MM:SS. Hours are not wrapped at 24.
pub fn format_hms(secs: u64) -> String {
    let hours = secs / 3600;
    let mins = (secs / 60) % 60;
    let secs = secs % 60;
    format!("{:02}:{:02}:{:02}", hours, mins, secs)
}

pub fn report_line(day: &DayKey, secs: u64, date_format: &DateFormat) -> String {
    format!(
        "Sleep time on {} is: {}",
        date_format.format_day(day),
        format_hms(secs)
    )
}

/// One line per day, ascending by date
pub fn render_report(totals: &DailyTotals, date_format: &DateFormat) -> Vec<String> {
    totals
        .iter()
        .map(|(day, secs)| report_line(day, *secs, date_format))
        .collect()
}
