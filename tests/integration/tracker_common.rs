//! Shared tracker scenarios, run against every record store.

use chrono::NaiveDate;
use rehabtrack::session::SessionError;
use rehabtrack::{
    Difficulty, ExerciseCategory, ExerciseLogEntry, Profile, RecordStore, RehabTracker,
    RomPainEntry, Swelling,
};

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, d).unwrap()
}

pub fn leg_press(d: u32) -> ExerciseLogEntry {
    ExerciseLogEntry::new(day(d), ExerciseCategory::Strength, "Leg Press", 3, 10, 40.0).unwrap()
}

pub fn reading(d: u32) -> RomPainEntry {
    RomPainEntry::new(day(d), 0.0, 120.0, 2, Swelling::Minimal).unwrap()
}

/// Log an exercise, reopen, delete it, reopen again.
pub fn exercise_lifecycle<S: RecordStore>(open: impl Fn() -> S) {
    let mut tracker = RehabTracker::open(open(), "sam").unwrap();
    assert_eq!(tracker.power_level().value(), 9000);

    let score = tracker
        .log_exercise(leg_press(1), Difficulty::new(5).unwrap())
        .unwrap();
    assert_eq!(score, 1125);
    assert_eq!(tracker.exercise_log().len(), 1);
    assert_eq!(tracker.power_level().value(), 10_125);
    drop(tracker);

    let mut tracker = RehabTracker::open(open(), "sam").unwrap();
    assert_eq!(tracker.exercise_log(), &[leg_press(1)]);
    assert_eq!(tracker.power_level().value(), 10_125);

    tracker.delete_exercise(day(1), "Leg Press").unwrap();
    assert!(tracker.exercise_log().is_empty());
    assert_eq!(tracker.power_level().value(), 10_125);
    drop(tracker);

    let tracker = RehabTracker::open(open(), "sam").unwrap();
    assert!(tracker.exercise_log().is_empty());
    assert_eq!(tracker.power_level().value(), 10_125);
}

/// Log and delete ROM/pain readings; deletes remove only the first match.
pub fn rom_pain_lifecycle<S: RecordStore>(open: impl Fn() -> S) {
    let mut tracker = RehabTracker::open(open(), "sam").unwrap();

    let first = tracker.log_rom_pain(reading(3)).unwrap();
    let second = tracker
        .log_rom_pain(reading(3).with_notes("evening"))
        .unwrap();
    assert_eq!(first, 5940);
    assert_eq!(second, 5940);
    assert_eq!(tracker.power_level().value(), 9000 + 2 * 5940);

    tracker.delete_rom_pain(day(3)).unwrap();
    drop(tracker);

    let tracker = RehabTracker::open(open(), "sam").unwrap();
    assert_eq!(tracker.rom_pain_log().len(), 1);
    assert_eq!(tracker.rom_pain_log()[0].notes, "evening");
    assert_eq!(tracker.power_level().value(), 9000 + 2 * 5940);
}

/// Deleting an entry that does not exist leaves everything as it was.
pub fn delete_missing_is_not_found<S: RecordStore>(open: impl Fn() -> S) {
    let mut tracker = RehabTracker::open(open(), "sam").unwrap();
    tracker
        .log_exercise(leg_press(1), Difficulty::default())
        .unwrap();

    let err = tracker.delete_exercise(day(2), "Leg Press").unwrap_err();
    assert!(err.is_not_found());
    let err = tracker.delete_exercise(day(1), "Heel Slides").unwrap_err();
    assert!(err.is_not_found());
    let err = tracker.delete_rom_pain(day(1)).unwrap_err();
    assert!(err.is_not_found());

    assert_eq!(tracker.exercise_log().len(), 1);
    drop(tracker);
    let tracker = RehabTracker::open(open(), "sam").unwrap();
    assert_eq!(tracker.exercise_log().len(), 1);
}

/// Rejected entries never reach the store.
pub fn invalid_entries_rejected<S: RecordStore>(open: impl Fn() -> S) {
    let mut tracker = RehabTracker::open(open(), "sam").unwrap();

    let unknown =
        ExerciseLogEntry::new(day(1), ExerciseCategory::Rom, "Leg Press", 3, 10, 0.0).unwrap();
    let err = tracker
        .log_exercise(unknown, Difficulty::default())
        .unwrap_err();
    assert!(matches!(err, SessionError::Validation(_)));

    let mut bad = leg_press(1);
    bad.sets = 0;
    assert!(tracker.log_exercise(bad, Difficulty::default()).is_err());

    let mut bad_rom = reading(1);
    bad_rom.flexion_deg = 200.0;
    assert!(tracker.log_rom_pain(bad_rom).is_err());

    assert!(tracker.exercise_log().is_empty());
    assert!(tracker.rom_pain_log().is_empty());
    assert_eq!(tracker.power_level().value(), 9000);
    drop(tracker);

    let tracker = RehabTracker::open(open(), "sam").unwrap();
    assert!(tracker.exercise_log().is_empty());
    assert_eq!(tracker.power_level().value(), 9000);
}

/// Profiles persist and each user's records stay separate.
pub fn profiles_are_per_user<S: RecordStore>(open: impl Fn() -> S) {
    let mut sam = RehabTracker::open(open(), "sam").unwrap();
    let profile = Profile {
        name: "Sam".to_string(),
        age: 29,
        surgery_date: Some(day(1)),
        ..Default::default()
    };
    sam.save_profile(profile.clone()).unwrap();
    sam.log_exercise(leg_press(2), Difficulty::default())
        .unwrap();
    drop(sam);

    let alex = RehabTracker::open(open(), "alex").unwrap();
    assert_eq!(alex.profile(), &Profile::default());
    assert!(alex.exercise_log().is_empty());
    assert_eq!(alex.power_level().value(), 9000);

    let sam = RehabTracker::open(open(), "sam").unwrap();
    assert_eq!(sam.profile(), &profile);
    assert_eq!(sam.days_since_surgery(day(15)), Some(14));
    let dashboard = sam.dashboard(day(15));
    assert_eq!(dashboard.name, "Sam");
    assert_eq!(dashboard.exercises.total_entries, 1);
}
