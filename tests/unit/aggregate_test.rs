//! Unit tests for log aggregates.

use chrono::NaiveDate;
use rehabtrack::metrics::aggregate::{
    daily_frequency, filter_by_date_range, group_by_category, latest, recent,
    rom_achievement_percent, rom_ratio, total_sets, total_volume, RomTrend,
};
use rehabtrack::{ExerciseCategory, ExerciseLogEntry, RomPainEntry, Swelling};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

fn exercise(d: u32, category: ExerciseCategory, name: &str, sets: u32, weight: f64) -> ExerciseLogEntry {
    ExerciseLogEntry::new(day(d), category, name, sets, 10, weight).unwrap()
}

fn rom(d: u32, extension: f64, flexion: f64, pain: u8) -> RomPainEntry {
    RomPainEntry::new(day(d), extension, flexion, pain, Swelling::Minimal).unwrap()
}

fn sample_log() -> Vec<ExerciseLogEntry> {
    vec![
        exercise(1, ExerciseCategory::Rom, "Heel Slides", 3, 0.0),
        exercise(1, ExerciseCategory::Strength, "Leg Press", 3, 40.0),
        exercise(3, ExerciseCategory::Strength, "Quad Sets", 2, 0.0),
    ]
}

#[test]
fn test_totals() {
    let log = sample_log();
    assert_eq!(total_sets(&log), 8);
    assert_eq!(total_volume(&log), 1200.0);
}

#[test]
fn test_totals_on_empty_log() {
    let log: Vec<ExerciseLogEntry> = Vec::new();
    assert_eq!(total_sets(&log), 0);
    assert_eq!(total_volume(&log), 0.0);
    assert!(group_by_category(&log).is_empty());
    assert!(latest(&log).is_none());
}

#[test]
fn test_group_by_category() {
    let groups = group_by_category(&sample_log());
    assert_eq!(groups.get(&ExerciseCategory::Strength), Some(&2));
    assert_eq!(groups.get(&ExerciseCategory::Rom), Some(&1));
    assert_eq!(groups.get(&ExerciseCategory::Recovery), None);
}

#[test]
fn test_daily_frequency_fills_gaps() {
    let mut log = sample_log();
    log.insert(0, exercise(5, ExerciseCategory::Recovery, "Ice", 1, 0.0));
    assert_eq!(
        daily_frequency(&log),
        vec![(day(1), 2), (day(2), 0), (day(3), 1), (day(4), 0), (day(5), 1)]
    );
}

#[test]
fn test_recent_newest_first() {
    let log = sample_log();
    let names: Vec<&str> = recent(&log, 2).iter().map(|e| e.exercise.as_str()).collect();
    assert_eq!(names, vec!["Quad Sets", "Leg Press"]);
}

#[test]
fn test_filter_by_date_range_inclusive() {
    let log = sample_log();
    assert_eq!(filter_by_date_range(&log, day(1), day(1)).len(), 2);
    assert_eq!(filter_by_date_range(&log, day(2), day(3)).len(), 1);
    assert!(filter_by_date_range(&log, day(4), day(9)).is_empty());
}

#[test]
fn test_latest_prefers_later_append_on_tie() {
    let log = vec![rom(2, 5.0, 90.0, 4), rom(2, 4.0, 95.0, 3), rom(1, 8.0, 70.0, 6)];
    let last = latest(&log).unwrap();
    assert_eq!(last.flexion_deg, 95.0);
}

#[test]
fn test_rom_achievement() {
    assert_eq!(rom_achievement_percent(0.0, 135.0), 100.0);
    assert_eq!(rom_achievement_percent(2.5, 67.5), 50.0);
    assert_eq!(rom_achievement_percent(15.0, 0.0), 0.0);
    // hyperextension and extra flexion stay capped
    assert_eq!(rom_achievement_percent(-5.0, 150.0), 100.0);
}

#[test]
fn test_rom_ratio() {
    assert_eq!(rom_ratio(4.0, 100.0), Some(20.0));
    assert_eq!(rom_ratio(-1.0, 100.0), None);
}

#[test]
fn test_trend_uses_date_order() {
    let log = vec![rom(10, 2.0, 120.0, 2), rom(1, 10.0, 80.0, 6)];
    let trend = RomTrend::from_log(&log).unwrap();
    assert_eq!(trend.extension_delta, -8.0);
    assert_eq!(trend.flexion_delta, 40.0);
    assert_eq!(trend.pain_delta, -4.0);
    assert!(trend.extension_improved());
    assert!(trend.flexion_improved());
}

#[test]
fn test_trend_needs_a_reading() {
    assert!(RomTrend::from_log(&[]).is_none());
}
