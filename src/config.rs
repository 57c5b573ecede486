use anyhow::{anyhow, bail, Context, Result};
#[cfg(test)]
use std::collections::HashMap;
use std::env;

use crate::day::ReferenceZone;
use crate::report::{DateFormat, DEFAULT_DATE_FORMAT};
use crate::source::DEFAULT_MAX_RECORDS;

/// Upper bound accepted by validate() for SLEEP_MAX_RECORDS
pub const MAX_RECORDS_LIMIT: usize = 10_000;

#[derive(Debug, Clone)]
pub struct Config {
    // Timezone used to decide which calendar day an interval ends on
    pub timezone: ReferenceZone,

    // strftime pattern for dates in the report
    pub date_format: DateFormat,

    // Cap on records taken from the source, most recent first
    pub max_records: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env if present, ignore if missing
        Self::from_getter(|key| env::var(key).ok())
    }

    /// Parse config from a custom getter function (for testing)
    pub fn from_getter<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            timezone: parse_timezone(&get("SLEEP_TIMEZONE").unwrap_or_else(|| "local".to_string()))?,

            date_format: DateFormat::new(
                &get("SLEEP_DATE_FORMAT").unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string()),
            )
            .context("SLEEP_DATE_FORMAT must be a valid strftime pattern")?,

            max_records: get("SLEEP_MAX_RECORDS")
                .unwrap_or_else(|| DEFAULT_MAX_RECORDS.to_string())
                .trim()
                .parse()
                .context("SLEEP_MAX_RECORDS must be a non-negative integer")?,
        })
    }

    /// Create config from a HashMap (convenience for testing)
    #[cfg(test)]
    pub fn from_map(map: &HashMap<&str, &str>) -> Result<Self> {
        Self::from_getter(|key| map.get(key).map(|v| v.to_string()))
    }

    /// Apply command-line overrides on top of environment values
    pub fn with_overrides(mut self, timezone: Option<&str>, date_format: Option<&str>) -> Result<Self> {
        if let Some(tz) = timezone {
            self.timezone = parse_timezone(tz).context("--timezone")?;
        }
        if let Some(pattern) = date_format {
            self.date_format = DateFormat::new(pattern).context("--date-format")?;
        }
        Ok(self)
    }

    /// Validate configuration values at startup.
    /// Returns Ok(()) if all validations pass, or Err with details of what failed.
    pub fn validate(&self) -> Result<()> {
        let mut errors: Vec<String> = Vec::new();

        if self.max_records == 0 {
            errors.push("SLEEP_MAX_RECORDS must be greater than 0.".to_string());
        } else if self.max_records > MAX_RECORDS_LIMIT {
            errors.push(format!(
                "SLEEP_MAX_RECORDS={} seems too large (max: {}).",
                self.max_records, MAX_RECORDS_LIMIT
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            bail!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )
        }
    }
}

fn parse_timezone(name: &str) -> Result<ReferenceZone> {
    name.parse()
        .map_err(|e| anyhow!("SLEEP_TIMEZONE must be 'local' or an IANA timezone: {}", e))
}
