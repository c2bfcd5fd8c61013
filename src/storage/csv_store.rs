//! File-backed record store.
//!
//! Each user gets one CSV file per collection in the data directory plus a
//! plain text file holding the power level:
//!
//! - `{user}_user_profile.csv`
//! - `{user}_exercise_log.csv`
//! - `{user}_rom_pain_log.csv`
//! - `{user}_power_level.txt`
//!
//! Files are replaced by writing a sibling temp file and renaming it over the
//! original.

use crate::catalog::{Catalog, InjuryType};
use crate::metrics::PowerLevel;
use crate::records::{
    format_date, parse_date, validate_username, ExerciseLogEntry, Profile, RomPainEntry,
    Swelling,
};
use crate::storage::store::{RecordStore, StoreError};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const PROFILE_FILE: &str = "user_profile.csv";
const EXERCISE_LOG_FILE: &str = "exercise_log.csv";
const ROM_PAIN_LOG_FILE: &str = "rom_pain_log.csv";
const POWER_LEVEL_FILE: &str = "power_level.txt";

/// A CSV row type with a fixed header.
trait CsvRow: Serialize + DeserializeOwned {
    const HEADERS: &'static [&'static str];
}

#[derive(Debug, Serialize, Deserialize)]
struct ProfileRow {
    name: String,
    age: u32,
    weight: f64,
    height: f64,
    #[serde(default)]
    surgery_date: String,
    #[serde(default)]
    injury_type: String,
}

impl CsvRow for ProfileRow {
    const HEADERS: &'static [&'static str] =
        &["name", "age", "weight", "height", "surgery_date", "injury_type"];
}

impl From<&Profile> for ProfileRow {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            age: profile.age,
            weight: profile.weight_kg,
            height: profile.height_cm,
            surgery_date: profile.surgery_date.map(format_date).unwrap_or_default(),
            injury_type: profile.injury_type.label().to_string(),
        }
    }
}

impl ProfileRow {
    fn into_profile(self) -> Profile {
        // An unreadable surgery date is treated as not set.
        let surgery_date = match self.surgery_date.trim() {
            "" => None,
            raw => parse_date(raw)
                .map_err(|e| tracing::debug!("Ignoring stored surgery date: {}", e))
                .ok(),
        };

        Profile {
            name: self.name,
            age: self.age,
            weight_kg: self.weight,
            height_cm: self.height,
            surgery_date,
            injury_type: InjuryType::from_label(&self.injury_type),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ExerciseRow {
    date: String,
    #[serde(default)]
    category: String,
    exercise: String,
    sets: u32,
    reps: u32,
    weight: f64,
    #[serde(default)]
    notes: String,
}

impl CsvRow for ExerciseRow {
    const HEADERS: &'static [&'static str] =
        &["date", "category", "exercise", "sets", "reps", "weight", "notes"];
}

impl From<&ExerciseLogEntry> for ExerciseRow {
    fn from(entry: &ExerciseLogEntry) -> Self {
        Self {
            date: format_date(entry.date),
            category: entry.category.label().to_string(),
            exercise: entry.exercise.clone(),
            sets: entry.sets,
            reps: entry.reps,
            weight: entry.weight_kg,
            notes: entry.notes.clone(),
        }
    }
}

impl ExerciseRow {
    fn into_entry(self) -> Result<ExerciseLogEntry, StoreError> {
        let category = Catalog::load()
            .and_then(|catalog| catalog.resolve_category(&self.category, &self.exercise))
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;

        let entry = ExerciseLogEntry {
            date: parse_date(&self.date)?,
            category,
            exercise: self.exercise,
            sets: self.sets,
            reps: self.reps,
            weight_kg: self.weight,
            notes: self.notes,
        };
        entry.validate()?;
        Ok(entry)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct RomPainRow {
    date: String,
    extension_angle: f64,
    flexion_angle: f64,
    pain_level: u8,
    /// Ordinal on write; labels are accepted on read
    swelling: String,
    #[serde(default)]
    notes: String,
}

impl CsvRow for RomPainRow {
    const HEADERS: &'static [&'static str] = &[
        "date",
        "extension_angle",
        "flexion_angle",
        "pain_level",
        "swelling",
        "notes",
    ];
}

impl From<&RomPainEntry> for RomPainRow {
    fn from(entry: &RomPainEntry) -> Self {
        Self {
            date: format_date(entry.date),
            extension_angle: entry.extension_deg,
            flexion_angle: entry.flexion_deg,
            pain_level: entry.pain_level,
            swelling: entry.swelling.ordinal().to_string(),
            notes: entry.notes.clone(),
        }
    }
}

impl RomPainRow {
    fn into_entry(self) -> Result<RomPainEntry, StoreError> {
        let entry = RomPainEntry {
            date: parse_date(&self.date)?,
            extension_deg: self.extension_angle,
            flexion_deg: self.flexion_angle,
            pain_level: self.pain_level,
            swelling: self.swelling.parse::<Swelling>()?,
            notes: self.notes,
        };
        entry.validate()?;
        Ok(entry)
    }
}

/// Record store over per-user CSV files.
#[derive(Debug, Clone)]
pub struct CsvStore {
    data_dir: PathBuf,
}

impl CsvStore {
    /// Use `data_dir`, creating it if needed.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).map_err(|e| {
            StoreError::Unavailable(format!("{}: {}", data_dir.display(), e))
        })?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path(&self, username: &str, file: &str) -> Result<PathBuf, StoreError> {
        validate_username(username)?;
        Ok(self.data_dir.join(format!("{}_{}", username, file)))
    }

    fn write_exercise_log(&self, path: &Path, log: &[ExerciseLogEntry]) -> Result<(), StoreError> {
        for entry in log {
            entry.validate()?;
        }
        write_rows(path, log.iter().map(ExerciseRow::from))
    }

    fn write_rom_pain_log(&self, path: &Path, log: &[RomPainEntry]) -> Result<(), StoreError> {
        for entry in log {
            entry.validate()?;
        }
        write_rows(path, log.iter().map(RomPainRow::from))
    }

    fn write_power_level(&self, username: &str, power: PowerLevel) -> Result<(), StoreError> {
        let path = self.path(username, POWER_LEVEL_FILE)?;
        write_atomic(&path, |tmp| {
            fs::write(tmp, power.value().to_string())?;
            Ok(())
        })
    }

    /// Write a log then the power level, putting the old log back if the
    /// power level cannot be saved.
    fn commit(
        &self,
        username: &str,
        log_path: &Path,
        write_log: impl FnOnce() -> Result<(), StoreError>,
        power: PowerLevel,
    ) -> Result<(), StoreError> {
        let previous = match fs::read(log_path) {
            Ok(bytes) => Some(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        write_log()?;

        if let Err(e) = self.write_power_level(username, power) {
            let restored = match previous {
                Some(bytes) => write_atomic(log_path, |tmp| {
                    fs::write(tmp, &bytes)?;
                    Ok(())
                }),
                None => fs::remove_file(log_path).map_err(StoreError::from),
            };
            if let Err(restore_err) = restored {
                tracing::warn!(
                    "Could not restore {} after failed commit: {}",
                    log_path.display(),
                    restore_err
                );
            }
            return Err(e);
        }

        Ok(())
    }
}

fn read_rows<T: CsvRow>(path: &Path) -> Result<Vec<T>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}

fn write_rows<T: CsvRow>(path: &Path, rows: impl IntoIterator<Item = T>) -> Result<(), StoreError> {
    write_atomic(path, |tmp| {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(tmp)?;
        writer.write_record(T::HEADERS)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    })
}

fn write_atomic(
    path: &Path,
    write: impl FnOnce(&Path) -> Result<(), StoreError>,
) -> Result<(), StoreError> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let result = write(&tmp).and_then(|()| fs::rename(&tmp, path).map_err(StoreError::from));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

impl RecordStore for CsvStore {
    fn get_profile(&self, username: &str) -> Result<Profile, StoreError> {
        let path = self.path(username, PROFILE_FILE)?;
        let rows: Vec<ProfileRow> = read_rows(&path)?;
        Ok(rows
            .into_iter()
            .next()
            .map(ProfileRow::into_profile)
            .unwrap_or_default())
    }

    fn save_profile(&mut self, username: &str, profile: &Profile) -> Result<(), StoreError> {
        profile.validate()?;
        let path = self.path(username, PROFILE_FILE)?;
        write_rows(&path, [ProfileRow::from(profile)])?;
        tracing::info!("Saved profile for {}", username);
        Ok(())
    }

    fn get_exercise_log(&self, username: &str) -> Result<Vec<ExerciseLogEntry>, StoreError> {
        let path = self.path(username, EXERCISE_LOG_FILE)?;
        read_rows::<ExerciseRow>(&path)?
            .into_iter()
            .map(ExerciseRow::into_entry)
            .collect()
    }

    fn replace_exercise_log(
        &mut self,
        username: &str,
        log: &[ExerciseLogEntry],
    ) -> Result<(), StoreError> {
        let path = self.path(username, EXERCISE_LOG_FILE)?;
        self.write_exercise_log(&path, log)?;
        tracing::info!("Saved {} exercise entries for {}", log.len(), username);
        Ok(())
    }

    fn get_rom_pain_log(&self, username: &str) -> Result<Vec<RomPainEntry>, StoreError> {
        let path = self.path(username, ROM_PAIN_LOG_FILE)?;
        read_rows::<RomPainRow>(&path)?
            .into_iter()
            .map(RomPainRow::into_entry)
            .collect()
    }

    fn replace_rom_pain_log(
        &mut self,
        username: &str,
        log: &[RomPainEntry],
    ) -> Result<(), StoreError> {
        let path = self.path(username, ROM_PAIN_LOG_FILE)?;
        self.write_rom_pain_log(&path, log)?;
        tracing::info!("Saved {} ROM/pain entries for {}", log.len(), username);
        Ok(())
    }

    fn delete_exercise_entry(
        &mut self,
        username: &str,
        date: NaiveDate,
        exercise: &str,
    ) -> Result<(), StoreError> {
        let mut log = self.get_exercise_log(username)?;
        let index = log
            .iter()
            .position(|e| e.date == date && e.exercise == exercise)
            .ok_or_else(|| {
                StoreError::NotFound(format!("{} on {}", exercise, format_date(date)))
            })?;
        log.remove(index);
        self.replace_exercise_log(username, &log)
    }

    fn delete_rom_pain_entry(
        &mut self,
        username: &str,
        date: NaiveDate,
    ) -> Result<(), StoreError> {
        let mut log = self.get_rom_pain_log(username)?;
        let index = log
            .iter()
            .position(|e| e.date == date)
            .ok_or_else(|| {
                StoreError::NotFound(format!("ROM/pain entry on {}", format_date(date)))
            })?;
        log.remove(index);
        self.replace_rom_pain_log(username, &log)
    }

    fn get_power_level(&self, username: &str) -> Result<PowerLevel, StoreError> {
        let path = self.path(username, POWER_LEVEL_FILE)?;
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(PowerLevel::default())
            }
            Err(e) => return Err(e.into()),
        };

        content
            .trim()
            .parse::<u64>()
            .map(PowerLevel::new)
            .map_err(|e| StoreError::Corrupt(format!("{}: {}", path.display(), e)))
    }

    fn commit_exercise_log(
        &mut self,
        username: &str,
        log: &[ExerciseLogEntry],
        power: PowerLevel,
    ) -> Result<(), StoreError> {
        let path = self.path(username, EXERCISE_LOG_FILE)?;
        self.commit(username, &path, || self.write_exercise_log(&path, log), power)?;
        tracing::info!(
            "Committed {} exercise entries for {} at power level {}",
            log.len(),
            username,
            power.value()
        );
        Ok(())
    }

    fn commit_rom_pain_log(
        &mut self,
        username: &str,
        log: &[RomPainEntry],
        power: PowerLevel,
    ) -> Result<(), StoreError> {
        let path = self.path(username, ROM_PAIN_LOG_FILE)?;
        self.commit(username, &path, || self.write_rom_pain_log(&path, log), power)?;
        tracing::info!(
            "Committed {} ROM/pain entries for {} at power level {}",
            log.len(),
            username,
            power.value()
        );
        Ok(())
    }
}
