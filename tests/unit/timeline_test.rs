//! Unit tests for the surgery timeline: day counts, phases and stages.

use chrono::NaiveDate;
use rehabtrack::metrics::{
    days_since, days_since_str, recovery_percent, RehabPhase, SurgeryCountdown, TimelineStage,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_days_since_after_surgery() {
    assert_eq!(days_since(date(2024, 1, 1), date(2024, 2, 12)), 42);
    assert_eq!(days_since(date(2024, 1, 1), date(2024, 1, 1)), 0);
}

#[test]
fn test_days_since_before_surgery_is_negative() {
    assert_eq!(days_since(date(2024, 6, 1), date(2024, 1, 1)), -152);
}

#[test]
fn test_days_since_str_handles_bad_input() {
    let today = date(2024, 2, 12);
    assert_eq!(days_since_str(Some("2024-01-01"), today), Some(42));
    assert_eq!(days_since_str(Some("01/01/2024"), today), None);
    assert_eq!(days_since_str(Some(""), today), None);
    assert_eq!(days_since_str(None, today), None);
}

#[test]
fn test_countdown_direction() {
    let before = SurgeryCountdown::from_days(-10);
    assert_eq!(before.days(), 10);
    assert_eq!(before.label(), "Until Surgery");

    let after = SurgeryCountdown::from_days(10);
    assert_eq!(after.days(), 10);
    assert_eq!(after.label(), "Since Surgery");
}

#[test]
fn test_recovery_percent_clamped() {
    assert_eq!(recovery_percent(-30), 0);
    assert_eq!(recovery_percent(0), 0);
    assert_eq!(recovery_percent(90), 50);
    assert_eq!(recovery_percent(179), 99);
    assert_eq!(recovery_percent(180), 100);
    assert_eq!(recovery_percent(1000), 100);
}

#[test]
fn test_phase_for_typical_days() {
    assert_eq!(RehabPhase::from_days(-152), RehabPhase::PreOp);
    assert_eq!(RehabPhase::from_days(3), RehabPhase::EarlyMotion);
    assert_eq!(RehabPhase::from_days(14), RehabPhase::InitialRecovery);
    assert_eq!(RehabPhase::from_days(30), RehabPhase::ProgressiveLoading);
    assert_eq!(RehabPhase::from_days(42), RehabPhase::StrengthBuilding);
    assert_eq!(RehabPhase::from_days(120), RehabPhase::PowerDevelopment);
    assert_eq!(RehabPhase::from_days(365), RehabPhase::ReturnToSport);
}

#[test]
fn test_phase_labels_are_distinct() {
    let labels: Vec<&str> = (-1..400)
        .map(|d| RehabPhase::from_days(d).label())
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect();
    assert_eq!(labels.len(), 7);
}

#[test]
fn test_stage_boundaries() {
    assert_eq!(TimelineStage::from_days(-1), TimelineStage::PreOp);
    assert_eq!(TimelineStage::from_days(14), TimelineStage::Weeks0To2);
    assert_eq!(TimelineStage::from_days(15), TimelineStage::Weeks3To6);
    assert_eq!(TimelineStage::from_days(42), TimelineStage::Weeks3To6);
    assert_eq!(TimelineStage::from_days(43), TimelineStage::Weeks7To12);
    assert_eq!(TimelineStage::from_days(140), TimelineStage::Weeks13To20);
    assert_eq!(TimelineStage::from_days(141), TimelineStage::Weeks21Plus);
}

#[test]
fn test_every_stage_has_guidance() {
    for stage in TimelineStage::ALL {
        assert!(!stage.guidance().is_empty(), "{:?} has no guidance", stage);
    }
}
