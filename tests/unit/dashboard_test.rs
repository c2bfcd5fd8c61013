//! Unit tests for the dashboard view model.

use chrono::NaiveDate;
use rehabtrack::metrics::power::PowerTier;
use rehabtrack::metrics::{PainStatus, RomStatus, TimelineStage};
use rehabtrack::{
    DashboardSummary, ExerciseCategory, ExerciseLogEntry, PowerLevel, Profile, RehabPhase,
    RomPainEntry, Swelling,
};

fn date(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, m, d).unwrap()
}

fn profile_with_surgery() -> Profile {
    Profile {
        name: "Sam".to_string(),
        surgery_date: Some(date(1, 1)),
        ..Default::default()
    }
}

#[test]
fn test_empty_dashboard() {
    let summary =
        DashboardSummary::build(&Profile::default(), &[], &[], PowerLevel::default(), date(2, 12));
    assert!(summary.is_empty());
    assert!(summary.timeline.is_none());
    assert!(summary.rom.is_none());
    assert_eq!(summary.power_level, 9000);
    assert_eq!(summary.power_tier, PowerTier::Base);
    assert!(summary.extension_series.is_empty());
}

#[test]
fn test_timeline_six_weeks_out() {
    let summary = DashboardSummary::build(
        &profile_with_surgery(),
        &[],
        &[],
        PowerLevel::default(),
        date(2, 12),
    );
    let timeline = summary.timeline.unwrap();
    assert_eq!(timeline.days_since_surgery, 42);
    assert_eq!(timeline.phase, RehabPhase::StrengthBuilding);
    assert_eq!(timeline.stage, TimelineStage::Weeks3To6);
    assert_eq!(timeline.recovery_percent, 23);
    assert_eq!(timeline.phase_progress, Some(0.0));
}

#[test]
fn test_timeline_before_surgery() {
    let profile = Profile {
        surgery_date: Some(date(6, 1)),
        ..Default::default()
    };
    let summary =
        DashboardSummary::build(&profile, &[], &[], PowerLevel::default(), date(1, 1));
    let timeline = summary.timeline.unwrap();
    assert_eq!(timeline.countdown.days(), 152);
    assert_eq!(timeline.phase, RehabPhase::PreOp);
    assert_eq!(timeline.recovery_percent, 0);
}

#[test]
fn test_latest_rom_reading_drives_status() {
    let rom_log = vec![
        RomPainEntry::new(date(1, 10), 8.0, 70.0, 6, Swelling::Moderate).unwrap(),
        RomPainEntry::new(date(2, 10), 0.0, 125.0, 1, Swelling::None).unwrap(),
    ];
    let summary = DashboardSummary::build(
        &profile_with_surgery(),
        &[],
        &rom_log,
        PowerLevel::default(),
        date(2, 12),
    );

    assert!(!summary.is_empty());
    let rom = summary.rom.unwrap();
    assert_eq!(rom.date, date(2, 10));
    assert_eq!(rom.rom_status, RomStatus::Excellent);
    assert_eq!(rom.pain_status, PainStatus::Minimal);
    let trend = rom.trend.unwrap();
    assert_eq!(trend.flexion_delta, 55.0);
    assert_eq!(summary.flexion_series.len(), 2);
    assert_eq!(summary.flexion_series[0].value, 70.0);
}

#[test]
fn test_exercise_totals() {
    let log = vec![
        ExerciseLogEntry::new(date(2, 1), ExerciseCategory::Strength, "Leg Press", 3, 10, 40.0)
            .unwrap(),
        ExerciseLogEntry::new(date(2, 2), ExerciseCategory::Rom, "Heel Slides", 2, 15, 0.0)
            .unwrap(),
    ];
    let summary = DashboardSummary::build(
        &profile_with_surgery(),
        &log,
        &[],
        PowerLevel::new(25_000),
        date(2, 12),
    );

    assert_eq!(summary.exercises.total_entries, 2);
    assert_eq!(summary.exercises.total_sets, 5);
    assert_eq!(summary.exercises.total_volume, 1200.0);
    assert_eq!(summary.exercises.recent[0].exercise, "Heel Slides");
    assert_eq!(summary.power_tier, PowerTier::SuperSaiyan);
    assert_eq!(summary.power_bar_percent, 100.0);
}

#[test]
fn test_dashboard_serializes_to_json() {
    let summary = DashboardSummary::build(
        &profile_with_surgery(),
        &[],
        &[],
        PowerLevel::default(),
        date(2, 12),
    );
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["power_level"], 9000);
    assert_eq!(json["timeline"]["days_since_surgery"], 42);
}
