//! Tracker scenarios against the SQLite store.

use super::tracker_common::{self, leg_press};
use rehabtrack::{Difficulty, RehabTracker, SqliteStore};
use tempfile::tempdir;

#[test]
fn test_sqlite_exercise_lifecycle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rehab.db");
    tracker_common::exercise_lifecycle(|| SqliteStore::open(&path).unwrap());
}

#[test]
fn test_sqlite_rom_pain_lifecycle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rehab.db");
    tracker_common::rom_pain_lifecycle(|| SqliteStore::open(&path).unwrap());
}

#[test]
fn test_sqlite_delete_missing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rehab.db");
    tracker_common::delete_missing_is_not_found(|| SqliteStore::open(&path).unwrap());
}

#[test]
fn test_sqlite_invalid_entries() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rehab.db");
    tracker_common::invalid_entries_rejected(|| SqliteStore::open(&path).unwrap());
}

#[test]
fn test_sqlite_profiles_per_user() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("rehab.db");
    tracker_common::profiles_are_per_user(|| SqliteStore::open(&path).unwrap());
}

#[test]
fn test_sqlite_unreachable_path_is_unavailable() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let err = SqliteStore::open(&blocker.join("rehab.db")).err().unwrap();
    assert!(err.is_unavailable());
}

#[test]
fn test_sqlite_same_day_duplicates_kept() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rehab.db");

    let mut tracker = RehabTracker::open(SqliteStore::open(&path).unwrap(), "sam").unwrap();
    for _ in 0..3 {
        tracker
            .log_exercise(leg_press(1), Difficulty::new(5).unwrap())
            .unwrap();
    }
    tracker.delete_exercise(leg_press(1).date, "Leg Press").unwrap();
    drop(tracker);

    let tracker = RehabTracker::open(SqliteStore::open(&path).unwrap(), "sam").unwrap();
    assert_eq!(tracker.exercise_log().len(), 2);
    assert_eq!(tracker.power_level().value(), 9000 + 3 * 1125);
}
