//! Tracker scenarios against the CSV store.

use super::tracker_common::{self, day, leg_press};
use rehabtrack::session::SessionError;
use rehabtrack::{CsvStore, Difficulty, ExerciseCategory, RehabTracker, StoreError};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_csv_exercise_lifecycle() {
    let dir = tempdir().unwrap();
    tracker_common::exercise_lifecycle(|| CsvStore::new(dir.path()).unwrap());
}

#[test]
fn test_csv_rom_pain_lifecycle() {
    let dir = tempdir().unwrap();
    tracker_common::rom_pain_lifecycle(|| CsvStore::new(dir.path()).unwrap());
}

#[test]
fn test_csv_delete_missing() {
    let dir = tempdir().unwrap();
    tracker_common::delete_missing_is_not_found(|| CsvStore::new(dir.path()).unwrap());
}

#[test]
fn test_csv_invalid_entries() {
    let dir = tempdir().unwrap();
    tracker_common::invalid_entries_rejected(|| CsvStore::new(dir.path()).unwrap());
}

#[test]
fn test_csv_profiles_per_user() {
    let dir = tempdir().unwrap();
    tracker_common::profiles_are_per_user(|| CsvStore::new(dir.path()).unwrap());
}

#[test]
fn test_csv_files_use_readable_headers() {
    let dir = tempdir().unwrap();
    let mut tracker = RehabTracker::open(CsvStore::new(dir.path()).unwrap(), "sam").unwrap();
    tracker
        .log_exercise(leg_press(1), Difficulty::new(5).unwrap())
        .unwrap();

    let log = fs::read_to_string(dir.path().join("sam_exercise_log.csv")).unwrap();
    let mut lines = log.lines();
    assert_eq!(
        lines.next(),
        Some("date,category,exercise,sets,reps,weight,notes")
    );
    assert!(lines.next().unwrap().starts_with("2024-02-01,Strength Exercises,Leg Press,3,10,"));

    let power = fs::read_to_string(dir.path().join("sam_power_level.txt")).unwrap();
    assert_eq!(power.trim(), "10125");
}

#[test]
fn test_csv_reads_hand_edited_log() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("sam_rom_pain_log.csv"),
        "date,extension_angle,flexion_angle,pain_level,swelling,notes\n\
         2024-02-03,5,95,4,Moderate,\n\
         2024-02-04,3,100,3,1,better\n",
    )
    .unwrap();

    let tracker = RehabTracker::open(CsvStore::new(dir.path()).unwrap(), "sam").unwrap();
    assert_eq!(tracker.rom_pain_log().len(), 2);
    assert_eq!(tracker.rom_pain_log()[1].date, day(4));
    assert_eq!(tracker.rom_pain_log()[1].notes, "better");
}

#[test]
fn test_csv_rejects_path_like_usernames() {
    let dir = tempdir().unwrap();
    let store = CsvStore::new(dir.path()).unwrap();
    assert!(RehabTracker::open(store, "../escape").is_err());
}

#[test]
fn test_csv_out_of_range_reading_reported_on_open() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("sam_rom_pain_log.csv"),
        "date,extension_angle,flexion_angle,pain_level,swelling,notes\n\
         2024-02-03,5,95,12,1,\n",
    )
    .unwrap();

    let err = RehabTracker::open(CsvStore::new(dir.path()).unwrap(), "sam")
        .err()
        .unwrap();
    assert!(matches!(
        err,
        SessionError::Store(StoreError::Validation(_))
    ));
}

#[test]
fn test_csv_log_without_category_column_keeps_working() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("sam_exercise_log.csv"),
        "date,exercise,sets,reps,weight,notes\n\
         2024-02-03,Heel Slides,3,10,0.0,\n",
    )
    .unwrap();

    let mut tracker = RehabTracker::open(CsvStore::new(dir.path()).unwrap(), "sam").unwrap();
    assert_eq!(tracker.exercise_log()[0].category, ExerciseCategory::Rom);
    tracker
        .log_exercise(leg_press(4), Difficulty::new(5).unwrap())
        .unwrap();
    drop(tracker);

    let tracker = RehabTracker::open(CsvStore::new(dir.path()).unwrap(), "sam").unwrap();
    assert_eq!(tracker.exercise_log().len(), 2);
    assert_eq!(tracker.power_level().value(), 10_125);
}
