//! Summary statistics over the exercise and ROM/pain logs.
//!
//! Every function here is a pure query: inputs are borrowed, never modified,
//! and empty logs produce empty or `None` results rather than errors.

use crate::catalog::ExerciseCategory;
use crate::records::{ExerciseLogEntry, RomPainEntry};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A record with a calendar date.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

impl Dated for ExerciseLogEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for RomPainEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Record with the latest date. On ties the most recently appended wins.
pub fn latest<T: Dated>(log: &[T]) -> Option<&T> {
    log.iter().fold(None, |best: Option<&T>, entry| match best {
        Some(b) if b.date() > entry.date() => Some(b),
        _ => Some(entry),
    })
}

/// Number of records.
pub fn count_all<T>(log: &[T]) -> usize {
    log.len()
}

/// Sum of a numeric field.
pub fn sum_field<T, F>(log: &[T], field: F) -> f64
where
    F: Fn(&T) -> f64,
{
    log.iter().map(field).sum()
}

/// Total sets across all entries.
pub fn total_sets(log: &[ExerciseLogEntry]) -> u64 {
    log.iter().map(|e| u64::from(e.sets)).sum()
}

/// Total training volume: sum of sets x reps x weight.
pub fn total_volume(log: &[ExerciseLogEntry]) -> f64 {
    sum_field(log, ExerciseLogEntry::volume)
}

/// Bodyweight-inclusive volume: sum of sets x reps x (1 + weight / 10).
pub fn weighted_volume(log: &[ExerciseLogEntry]) -> f64 {
    sum_field(log, |e| {
        f64::from(e.sets) * f64::from(e.reps) * (1.0 + e.weight_kg / 10.0)
    })
}

/// Number of entries per category.
pub fn group_by_category(log: &[ExerciseLogEntry]) -> BTreeMap<ExerciseCategory, usize> {
    let mut counts = BTreeMap::new();
    for entry in log {
        *counts.entry(entry.category).or_insert(0) += 1;
    }
    counts
}

/// Entries per calendar day from the first to the last logged date,
/// inclusive, with zero counts for days without entries.
pub fn daily_frequency<T: Dated>(log: &[T]) -> Vec<(NaiveDate, usize)> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for entry in log {
        *counts.entry(entry.date()).or_insert(0) += 1;
    }

    let (Some(&first), Some(&last)) = (counts.keys().next(), counts.keys().next_back()) else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|day| *day <= last)
        .map(|day| (day, counts.get(&day).copied().unwrap_or(0)))
        .collect()
}

/// Up to `n` entries, newest first. Entries on the same day keep their
/// reverse log order.
pub fn recent<T: Dated>(log: &[T], n: usize) -> Vec<&T> {
    let mut sorted: Vec<&T> = log.iter().rev().collect();
    sorted.sort_by_key(|e| std::cmp::Reverse(e.date()));
    sorted.truncate(n);
    sorted
}

/// Entries dated within `[start, end]`.
pub fn filter_by_date_range<T: Dated>(log: &[T], start: NaiveDate, end: NaiveDate) -> Vec<&T> {
    log.iter()
        .filter(|e| e.date() >= start && e.date() <= end)
        .collect()
}

/// Entries sorted by date, stable for same-day entries.
pub fn sorted_by_date<T: Dated>(log: &[T]) -> Vec<&T> {
    let mut sorted: Vec<&T> = log.iter().collect();
    sorted.sort_by_key(|e| e.date());
    sorted
}

/// Flexion degrees needed for full credit on the ROM gauge.
pub const FLEXION_TARGET_DEG: f64 = 135.0;

/// Combined ROM achievement, 0-100, for the dashboard gauge.
///
/// Extension scores 100% at 0 degrees and loses 20 points per degree of
/// deficit; flexion scores linearly up to 135 degrees.
pub fn rom_achievement_percent(extension_deg: f64, flexion_deg: f64) -> f64 {
    let extension_pct = (100.0 - (extension_deg - 0.0) / 5.0 * 100.0).clamp(0.0, 100.0);
    let flexion_pct = (flexion_deg / FLEXION_TARGET_DEG * 100.0).clamp(0.0, 100.0);
    (extension_pct + flexion_pct) / 2.0
}

/// Flexion over extension, rounded to one decimal. `None` when
/// `extension + 1` is zero.
pub fn rom_ratio(extension_deg: f64, flexion_deg: f64) -> Option<f64> {
    let divisor = extension_deg + 1.0;
    if divisor == 0.0 {
        return None;
    }
    Some((flexion_deg / divisor * 10.0).round() / 10.0)
}

/// `last - first` over a date-sorted series.
fn series_delta<T: Dated>(log: &[T], value: impl Fn(&T) -> f64) -> Option<f64> {
    let sorted = sorted_by_date(log);
    let first = sorted.first()?;
    let last = sorted.last()?;
    Some(value(last) - value(first))
}

/// Change in ROM and pain between the earliest and latest measurement.
///
/// Signs are raw `last - first`: a negative extension delta and a positive
/// flexion delta are improvements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RomTrend {
    pub extension_delta: f64,
    pub flexion_delta: f64,
    pub pain_delta: f64,
}

impl RomTrend {
    pub fn from_log(log: &[RomPainEntry]) -> Option<Self> {
        Some(Self {
            extension_delta: extension_delta(log)?,
            flexion_delta: flexion_delta(log)?,
            pain_delta: series_delta(log, |e| f64::from(e.pain_level))?,
        })
    }

    pub fn extension_improved(&self) -> bool {
        self.extension_delta < 0.0
    }

    pub fn flexion_improved(&self) -> bool {
        self.flexion_delta > 0.0
    }
}

/// Extension change; a decrease is an improvement.
pub fn extension_delta(log: &[RomPainEntry]) -> Option<f64> {
    series_delta(log, |e| e.extension_deg)
}

/// Flexion change; an increase is an improvement.
pub fn flexion_delta(log: &[RomPainEntry]) -> Option<f64> {
    series_delta(log, |e| e.flexion_deg)
}

/// One point of a chart series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Date-sorted series of one field, ready for plotting.
pub fn series<T: Dated>(log: &[T], value: impl Fn(&T) -> f64) -> Vec<SeriesPoint> {
    sorted_by_date(log)
        .into_iter()
        .map(|e| SeriesPoint {
            date: e.date(),
            value: value(e),
        })
        .collect()
}
