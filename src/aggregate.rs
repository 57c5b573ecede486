/// Per-day sleep aggregation
///
/// Every interval is attributed wholly to the calendar day on which it ends.
/// An interval from 22:30 on one day to 06:15 on the next counts only toward
/// the second day. Days are derived from all intervals, but only asleep time
/// is summed, so a day with nothing but in-bed intervals reports zero.

use std::collections::btree_map;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

use crate::day::{DayKey, ReferenceZone};
use crate::interval::SleepInterval;

/// Asleep-only intervals in their original order
pub fn asleep_intervals(intervals: &[SleepInterval]) -> impl Iterator<Item = &SleepInterval> {
    intervals.iter().filter(|i| i.state().is_asleep())
}

/// Distinct end dates across all intervals, regardless of state
pub fn end_days(intervals: &[SleepInterval], zone: &ReferenceZone) -> HashSet<DayKey> {
    intervals.iter().map(|i| zone.day_key(i.end())).collect()
}

/// Seconds of sleep per day, iterated in ascending date order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyTotals {
    totals: BTreeMap<DayKey, u64>,
}

impl DailyTotals {
    pub fn get(&self, day: &DayKey) -> Option<u64> {
        self.totals.get(day).copied()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn days(&self) -> impl Iterator<Item = &DayKey> {
        self.totals.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DayKey, &u64)> {
        self.totals.iter()
    }
}

impl<'a> IntoIterator for &'a DailyTotals {
    type Item = (&'a DayKey, &'a u64);
    type IntoIter = btree_map::Iter<'a, DayKey, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.totals.iter()
    }
}

/// Sum asleep durations by the day each interval ends on.
/// Single pass over the asleep intervals after seeding every end day with zero.
pub fn daily_totals(intervals: &[SleepInterval], zone: &ReferenceZone) -> DailyTotals {
    let days = end_days(intervals, zone);
    debug!("Bucketed {} intervals into {} days", intervals.len(), days.len());

    let mut totals: BTreeMap<DayKey, u64> = days.into_iter().map(|day| (day, 0)).collect();

    for interval in asleep_intervals(intervals) {
        let total = totals.entry(zone.day_key(interval.end())).or_insert(0);
        *total = total.saturating_add(interval.duration_secs());
    }

    DailyTotals { totals }
}
