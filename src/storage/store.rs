//! Record store contract shared by the CSV and SQLite backends.
//!
//! All reads and writes are partitioned by username. Logs are saved with
//! whole-collection replace semantics: the last writer wins.

use crate::metrics::PowerLevel;
use crate::records::{ExerciseLogEntry, Profile, RomPainEntry, ValidationError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend cannot be reached; callers may fall back to another store.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("User already exists: {0}")]
    UserExists(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }
}

/// Persistence for profiles, logs and power levels.
pub trait RecordStore {
    /// Profile for `username`, defaults when none is stored.
    fn get_profile(&self, username: &str) -> Result<Profile, StoreError>;

    fn save_profile(&mut self, username: &str, profile: &Profile) -> Result<(), StoreError>;

    fn get_exercise_log(&self, username: &str) -> Result<Vec<ExerciseLogEntry>, StoreError>;

    /// Replace the whole exercise log.
    fn replace_exercise_log(
        &mut self,
        username: &str,
        log: &[ExerciseLogEntry],
    ) -> Result<(), StoreError>;

    fn get_rom_pain_log(&self, username: &str) -> Result<Vec<RomPainEntry>, StoreError>;

    /// Replace the whole ROM/pain log.
    fn replace_rom_pain_log(&mut self, username: &str, log: &[RomPainEntry])
        -> Result<(), StoreError>;

    /// Remove the first entry matching `date` and `exercise`.
    fn delete_exercise_entry(
        &mut self,
        username: &str,
        date: NaiveDate,
        exercise: &str,
    ) -> Result<(), StoreError>;

    /// Remove the first entry on `date`.
    fn delete_rom_pain_entry(&mut self, username: &str, date: NaiveDate)
        -> Result<(), StoreError>;

    /// Stored power level, the initial level when none is stored.
    fn get_power_level(&self, username: &str) -> Result<PowerLevel, StoreError>;

    /// Persist the exercise log and power level together. On error neither
    /// is changed.
    fn commit_exercise_log(
        &mut self,
        username: &str,
        log: &[ExerciseLogEntry],
        power: PowerLevel,
    ) -> Result<(), StoreError>;

    /// Persist the ROM/pain log and power level together. On error neither
    /// is changed.
    fn commit_rom_pain_log(
        &mut self,
        username: &str,
        log: &[RomPainEntry],
        power: PowerLevel,
    ) -> Result<(), StoreError>;
}

/// Stored user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Entry of the user list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub username: String,
    pub name: String,
}

/// Account management for multi-user stores.
pub trait UserDirectory {
    fn create_user(
        &mut self,
        username: &str,
        password: &str,
        email: Option<&str>,
    ) -> Result<UserRecord, StoreError>;

    /// Verify credentials. Unknown users are `NotFound`, wrong passwords
    /// `InvalidCredentials`.
    fn authenticate(&self, username: &str, password: &str) -> Result<UserRecord, StoreError>;

    /// Username and display name of every stored profile.
    fn list_users(&self) -> Result<Vec<UserSummary>, StoreError>;
}
