/// Interval source
/// Loads sleep interval records from JSON, newest first, bounded to a maximum count

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use crate::interval::SleepInterval;

/// Default cap on the number of records taken from a source
pub const DEFAULT_MAX_RECORDS: usize = 30;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read sleep data: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse sleep data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a JSON array of interval records.
/// Records are sorted by end time descending and truncated to `max_records`.
pub fn load_intervals<R: Read>(reader: R, max_records: usize) -> Result<Vec<SleepInterval>, SourceError> {
    let mut intervals: Vec<SleepInterval> = serde_json::from_reader(reader)?;
    let total = intervals.len();

    intervals.sort_by(|a, b| b.end().cmp(&a.end()));
    intervals.truncate(max_records);

    if intervals.len() < total {
        info!(
            "Kept {} most recent of {} sleep records (limit {})",
            intervals.len(),
            total,
            max_records
        );
    } else {
        debug!("Loaded {} sleep records", total);
    }

    Ok(intervals)
}

/// Load from a file path, or stdin when the path is "-"
pub fn load_intervals_from(path: &str, max_records: usize) -> Result<Vec<SleepInterval>, SourceError> {
    if path == "-" {
        return load_intervals(io::stdin().lock(), max_records);
    }
    let file = File::open(Path::new(path))?;
    load_intervals(BufReader::new(file), max_records)
}
