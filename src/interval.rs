/// Sleep interval records
/// A validated start/end pair tagged with the sleep state reported for it

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Absolute point in time used for interval boundaries
pub type Instant = DateTime<Utc>;

/// Classification of an interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SleepState {
    /// In bed but not necessarily asleep
    InBed,
    /// Asleep - the only state counted toward totals
    Asleep,
    /// Awake during the sleep session
    Awake,
}

impl SleepState {
    pub fn is_asleep(self) -> bool {
        self == SleepState::Asleep
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("interval end {end} is not after start {start}")]
    NonPositiveDuration { start: Instant, end: Instant },
}

/// Wire shape of an interval before validation
#[derive(Debug, Deserialize)]
struct RawInterval {
    start: Instant,
    end: Instant,
    state: SleepState,
}

/// One sleep interval. Fields are private so `end > start` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct SleepInterval {
    start: Instant,
    end: Instant,
    state: SleepState,
}

impl SleepInterval {
    pub fn new(start: Instant, end: Instant, state: SleepState) -> Result<Self, IntervalError> {
        if end <= start {
            return Err(IntervalError::NonPositiveDuration { start, end });
        }
        Ok(Self { start, end, state })
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn end(&self) -> Instant {
        self.end
    }

    pub fn state(&self) -> SleepState {
        self.state
    }

    /// Whole seconds between start and end, fractional part truncated
    pub fn duration_secs(&self) -> u64 {
        u64::try_from((self.end - self.start).num_seconds()).unwrap_or(0)
    }
}

impl TryFrom<RawInterval> for SleepInterval {
    type Error = IntervalError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        SleepInterval::new(raw.start, raw.end, raw.state)
    }
}
