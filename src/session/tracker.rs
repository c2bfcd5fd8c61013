//! Per-user application state over a record store.

use crate::catalog::{Catalog, CatalogError};
use crate::metrics::power::entry_score;
use crate::metrics::{days_since, rom_entry_score, DashboardSummary, PowerLevel, RehabPhase};
use crate::records::{
    format_date, validate_username, Difficulty, ExerciseLogEntry, Profile, RomPainEntry,
    ValidationError,
};
use crate::storage::{RecordStore, StoreError};
use chrono::NaiveDate;
use thiserror::Error;

/// Errors from tracker operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SessionError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SessionError::Store(e) if e.is_not_found())
    }
}

/// Loaded records of one user plus the store they came from.
///
/// Mutations go to the store first. In-memory state only changes once the
/// store has accepted the write.
pub struct RehabTracker<S: RecordStore> {
    store: S,
    username: String,
    profile: Profile,
    exercise_log: Vec<ExerciseLogEntry>,
    rom_pain_log: Vec<RomPainEntry>,
    power: PowerLevel,
}

impl<S: RecordStore> RehabTracker<S> {
    /// Load everything stored for `username`.
    pub fn open(store: S, username: impl Into<String>) -> Result<Self, SessionError> {
        let username = username.into();
        validate_username(&username)?;

        let profile = store.get_profile(&username)?;
        let exercise_log = store.get_exercise_log(&username)?;
        let rom_pain_log = store.get_rom_pain_log(&username)?;
        let power = store.get_power_level(&username)?;

        tracing::debug!(
            "Loaded {} exercise and {} ROM/pain entries for {}",
            exercise_log.len(),
            rom_pain_log.len(),
            username
        );

        Ok(Self {
            store,
            username,
            profile,
            exercise_log,
            rom_pain_log,
            power,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn exercise_log(&self) -> &[ExerciseLogEntry] {
        &self.exercise_log
    }

    pub fn rom_pain_log(&self) -> &[RomPainEntry] {
        &self.rom_pain_log
    }

    pub fn power_level(&self) -> PowerLevel {
        self.power
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn save_profile(&mut self, profile: Profile) -> Result<(), SessionError> {
        profile.validate()?;
        self.store.save_profile(&self.username, &profile)?;
        self.profile = profile;
        Ok(())
    }

    /// Append an exercise and raise the power level by its score.
    ///
    /// The exercise must be listed under its category in the catalog.
    /// Returns the score.
    pub fn log_exercise(
        &mut self,
        entry: ExerciseLogEntry,
        difficulty: Difficulty,
    ) -> Result<u64, SessionError> {
        entry.validate()?;
        if !Catalog::load()?.contains(entry.category, &entry.exercise) {
            return Err(ValidationError::UnknownExercise {
                category: entry.category,
                exercise: entry.exercise,
            }
            .into());
        }

        let score = entry_score(&entry, difficulty);
        let power = self.power.add(score);

        let mut log = self.exercise_log.clone();
        log.push(entry);
        self.store
            .commit_exercise_log(&self.username, &log, power)?;

        self.exercise_log = log;
        self.power = power;
        tracing::info!(
            "{} logged an exercise: +{} power ({})",
            self.username,
            score,
            power.value()
        );
        Ok(score)
    }

    /// Append a ROM/pain reading and raise the power level by its score.
    /// Returns the score.
    pub fn log_rom_pain(&mut self, entry: RomPainEntry) -> Result<u64, SessionError> {
        entry.validate()?;

        let score = rom_entry_score(&entry).total();
        let power = self.power.add(score);

        let mut log = self.rom_pain_log.clone();
        log.push(entry);
        self.store
            .commit_rom_pain_log(&self.username, &log, power)?;

        self.rom_pain_log = log;
        self.power = power;
        tracing::info!(
            "{} logged ROM/pain: +{} power ({})",
            self.username,
            score,
            power.value()
        );
        Ok(score)
    }

    /// Remove the first exercise named `exercise` on `date`. The power level
    /// is left as is.
    pub fn delete_exercise(&mut self, date: NaiveDate, exercise: &str) -> Result<(), SessionError> {
        let index = self
            .exercise_log
            .iter()
            .position(|e| e.date == date && e.exercise == exercise)
            .ok_or_else(|| {
                StoreError::NotFound(format!("{} on {}", exercise, format_date(date)))
            })?;

        self.store
            .delete_exercise_entry(&self.username, date, exercise)?;
        self.exercise_log.remove(index);
        Ok(())
    }

    /// Remove the first ROM/pain reading on `date`. The power level is left
    /// as is.
    pub fn delete_rom_pain(&mut self, date: NaiveDate) -> Result<(), SessionError> {
        let index = self
            .rom_pain_log
            .iter()
            .position(|e| e.date == date)
            .ok_or_else(|| {
                StoreError::NotFound(format!("ROM/pain entry on {}", format_date(date)))
            })?;

        self.store.delete_rom_pain_entry(&self.username, date)?;
        self.rom_pain_log.remove(index);
        Ok(())
    }

    pub fn days_since_surgery(&self, today: NaiveDate) -> Option<i64> {
        self.profile
            .surgery_date
            .map(|surgery| days_since(surgery, today))
    }

    pub fn phase(&self, today: NaiveDate) -> Option<RehabPhase> {
        self.days_since_surgery(today).map(RehabPhase::from_days)
    }

    pub fn dashboard(&self, today: NaiveDate) -> DashboardSummary {
        DashboardSummary::build(
            &self.profile,
            &self.exercise_log,
            &self.rom_pain_log,
            self.power,
            today,
        )
    }
}
