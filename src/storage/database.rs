//! SQLite record store with user accounts.

use crate::catalog::{Catalog, CatalogError, InjuryType};
use crate::metrics::PowerLevel;
use crate::records::{
    format_date, parse_date, validate_username, ExerciseLogEntry, Profile, RomPainEntry,
    Swelling,
};
use crate::storage::auth::{hash_password, verify_password};
use crate::storage::schema::{CURRENT_VERSION, MIGRATION_V1_TO_V2, SCHEMA, SCHEMA_VERSION_TABLE};
use crate::storage::store::{RecordStore, StoreError, UserDirectory, UserRecord, UserSummary};
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult};
use std::path::Path;

fn query_err(e: rusqlite::Error) -> StoreError {
    StoreError::Query(e.to_string())
}

/// Record store backed by a SQLite database.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open or create a database at the given path.
    ///
    /// Any failure to reach or initialize the database is reported as
    /// [`StoreError::Unavailable`].
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::Unavailable(format!("{}: {}", parent.display(), e)))?;
        }

        let conn = Connection::open(path)
            .map_err(|e| StoreError::Unavailable(format!("{}: {}", path.display(), e)))?;

        Self::with_connection(conn)
            .map_err(|e| StoreError::Unavailable(format!("{}: {}", path.display(), e)))
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn =
            Connection::open_in_memory().map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Initialize the database schema.
    fn initialize(&self) -> Result<(), StoreError> {
        self.conn
            .execute_batch(SCHEMA_VERSION_TABLE)
            .map_err(query_err)?;

        let current_version = self.get_schema_version()?;
        if current_version < CURRENT_VERSION {
            self.migrate(current_version)?;
        }

        Ok(())
    }

    /// Get the current schema version.
    fn get_schema_version(&self) -> Result<i32, StoreError> {
        let result: SqliteResult<i32> = self.conn.query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        );

        match result {
            Ok(version) => Ok(version),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
            Err(e) => Err(query_err(e)),
        }
    }

    /// Run database migrations.
    fn migrate(&self, from_version: i32) -> Result<(), StoreError> {
        if from_version < 1 {
            self.conn.execute_batch(SCHEMA).map_err(query_err)?;
            self.record_version(1)?;
        }

        if from_version < 2 {
            self.conn
                .execute_batch(MIGRATION_V1_TO_V2)
                .map_err(query_err)?;
            self.record_version(2)?;
        }

        tracing::info!("Database migrated to version {}", CURRENT_VERSION);
        Ok(())
    }

    fn record_version(&self, version: i32) -> Result<(), StoreError> {
        self.conn
            .execute(
                "INSERT INTO schema_version (version, applied_at) VALUES (?, datetime('now'))",
                [version],
            )
            .map_err(query_err)?;
        Ok(())
    }

    /// Number of stored user accounts.
    pub fn count_users(&self) -> Result<usize, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .map_err(query_err)?;
        Ok(count as usize)
    }

    fn user_exists(&self, username: &str) -> Result<bool, StoreError> {
        let count: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM users WHERE username = ?1",
                params![username],
                |row| row.get(0),
            )
            .map_err(query_err)?;
        Ok(count > 0)
    }
}

fn write_exercises(
    conn: &Connection,
    username: &str,
    log: &[ExerciseLogEntry],
) -> Result<(), StoreError> {
    conn.execute("DELETE FROM exercises WHERE username = ?1", params![username])
        .map_err(query_err)?;

    let mut stmt = conn
        .prepare(
            "INSERT INTO exercises (username, date, category, exercise, sets, reps, weight_kg, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )
        .map_err(query_err)?;

    for entry in log {
        stmt.execute(params![
            username,
            format_date(entry.date),
            entry.category.label(),
            entry.exercise,
            entry.sets,
            entry.reps,
            entry.weight_kg,
            entry.notes,
        ])
        .map_err(query_err)?;
    }

    Ok(())
}

fn write_rom_pain(
    conn: &Connection,
    username: &str,
    log: &[RomPainEntry],
) -> Result<(), StoreError> {
    conn.execute("DELETE FROM rom_pain WHERE username = ?1", params![username])
        .map_err(query_err)?;

    let mut stmt = conn
        .prepare(
            "INSERT INTO rom_pain (username, date, extension_deg, flexion_deg, pain_level, swelling, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .map_err(query_err)?;

    for entry in log {
        stmt.execute(params![
            username,
            format_date(entry.date),
            entry.extension_deg,
            entry.flexion_deg,
            entry.pain_level,
            entry.swelling.ordinal(),
            entry.notes,
        ])
        .map_err(query_err)?;
    }

    Ok(())
}

fn write_power_level(conn: &Connection, username: &str, power: PowerLevel) -> Result<(), StoreError> {
    let value = i64::try_from(power.value()).unwrap_or(i64::MAX);
    conn.execute(
        "INSERT INTO profiles (username, power_level, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(username) DO UPDATE SET
             power_level = excluded.power_level,
             updated_at = excluded.updated_at",
        params![username, value, Utc::now().to_rfc3339()],
    )
    .map_err(query_err)?;
    Ok(())
}

fn validate_exercises(log: &[ExerciseLogEntry]) -> Result<(), StoreError> {
    for entry in log {
        entry.validate()?;
    }
    Ok(())
}

fn validate_rom_pain(log: &[RomPainEntry]) -> Result<(), StoreError> {
    for entry in log {
        entry.validate()?;
    }
    Ok(())
}

impl RecordStore for SqliteStore {
    fn get_profile(&self, username: &str) -> Result<Profile, StoreError> {
        let row = self
            .conn
            .query_row(
                "SELECT name, age, weight_kg, height_cm, surgery_date, injury_type
                 FROM profiles WHERE username = ?1",
                params![username],
                |row| {
                    Ok(ProfileRow {
                        name: row.get(0)?,
                        age: row.get(1)?,
                        weight_kg: row.get(2)?,
                        height_cm: row.get(3)?,
                        surgery_date: row.get(4)?,
                        injury_type: row.get(5)?,
                    })
                },
            )
            .optional()
            .map_err(query_err)?;

        Ok(row.map(ProfileRow::into_profile).unwrap_or_default())
    }

    fn save_profile(&mut self, username: &str, profile: &Profile) -> Result<(), StoreError> {
        validate_username(username)?;
        profile.validate()?;

        self.conn
            .execute(
                "INSERT INTO profiles (username, name, age, weight_kg, height_cm, surgery_date,
                 injury_type, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                 ON CONFLICT(username) DO UPDATE SET
                     name = excluded.name,
                     age = excluded.age,
                     weight_kg = excluded.weight_kg,
                     height_cm = excluded.height_cm,
                     surgery_date = excluded.surgery_date,
                     injury_type = excluded.injury_type,
                     updated_at = excluded.updated_at",
                params![
                    username,
                    profile.name,
                    profile.age,
                    profile.weight_kg,
                    profile.height_cm,
                    profile.surgery_date.map(format_date),
                    profile.injury_type.label(),
                    Utc::now().to_rfc3339(),
                ],
            )
            .map_err(query_err)?;

        tracing::info!("Saved profile for {}", username);
        Ok(())
    }

    fn get_exercise_log(&self, username: &str) -> Result<Vec<ExerciseLogEntry>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT date, category, exercise, sets, reps, weight_kg, notes
                 FROM exercises WHERE username = ?1 ORDER BY id",
            )
            .map_err(query_err)?;

        let rows = stmt
            .query_map(params![username], |row| {
                Ok(ExerciseRow {
                    date: row.get(0)?,
                    category: row.get(1)?,
                    exercise: row.get(2)?,
                    sets: row.get(3)?,
                    reps: row.get(4)?,
                    weight_kg: row.get(5)?,
                    notes: row.get(6)?,
                })
            })
            .map_err(query_err)?;

        let mut log = Vec::new();
        for row in rows {
            let row = row.map_err(query_err)?;
            log.push(row.into_entry()?);
        }

        Ok(log)
    }

    fn replace_exercise_log(
        &mut self,
        username: &str,
        log: &[ExerciseLogEntry],
    ) -> Result<(), StoreError> {
        validate_username(username)?;
        validate_exercises(log)?;

        let tx = self.conn.transaction().map_err(query_err)?;
        write_exercises(&tx, username, log)?;
        tx.commit().map_err(query_err)?;

        tracing::info!("Saved {} exercise entries for {}", log.len(), username);
        Ok(())
    }

    fn get_rom_pain_log(&self, username: &str) -> Result<Vec<RomPainEntry>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT date, extension_deg, flexion_deg, pain_level, swelling, notes
                 FROM rom_pain WHERE username = ?1 ORDER BY id",
            )
            .map_err(query_err)?;

        let rows = stmt
            .query_map(params![username], |row| {
                Ok(RomPainRow {
                    date: row.get(0)?,
                    extension_deg: row.get(1)?,
                    flexion_deg: row.get(2)?,
                    pain_level: row.get(3)?,
                    swelling: row.get(4)?,
                    notes: row.get(5)?,
                })
            })
            .map_err(query_err)?;

        let mut log = Vec::new();
        for row in rows {
            let row = row.map_err(query_err)?;
            log.push(row.into_entry()?);
        }

        Ok(log)
    }

    fn replace_rom_pain_log(
        &mut self,
        username: &str,
        log: &[RomPainEntry],
    ) -> Result<(), StoreError> {
        validate_username(username)?;
        validate_rom_pain(log)?;

        let tx = self.conn.transaction().map_err(query_err)?;
        write_rom_pain(&tx, username, log)?;
        tx.commit().map_err(query_err)?;

        tracing::info!("Saved {} ROM/pain entries for {}", log.len(), username);
        Ok(())
    }

    fn delete_exercise_entry(
        &mut self,
        username: &str,
        date: NaiveDate,
        exercise: &str,
    ) -> Result<(), StoreError> {
        let rows_affected = self
            .conn
            .execute(
                "DELETE FROM exercises WHERE id = (
                     SELECT id FROM exercises
                     WHERE username = ?1 AND date = ?2 AND exercise = ?3
                     ORDER BY id LIMIT 1
                 )",
                params![username, format_date(date), exercise],
            )
            .map_err(query_err)?;

        if rows_affected == 0 {
            return Err(StoreError::NotFound(format!(
                "{} on {}",
                exercise,
                format_date(date)
            )));
        }

        tracing::info!("Deleted {} on {} for {}", exercise, format_date(date), username);
        Ok(())
    }

    fn delete_rom_pain_entry(
        &mut self,
        username: &str,
        date: NaiveDate,
    ) -> Result<(), StoreError> {
        let rows_affected = self
            .conn
            .execute(
                "DELETE FROM rom_pain WHERE id = (
                     SELECT id FROM rom_pain WHERE username = ?1 AND date = ?2
                     ORDER BY id LIMIT 1
                 )",
                params![username, format_date(date)],
            )
            .map_err(query_err)?;

        if rows_affected == 0 {
            return Err(StoreError::NotFound(format!(
                "ROM/pain entry on {}",
                format_date(date)
            )));
        }

        tracing::info!("Deleted ROM/pain entry on {} for {}", format_date(date), username);
        Ok(())
    }

    fn get_power_level(&self, username: &str) -> Result<PowerLevel, StoreError> {
        let value: Option<i64> = self
            .conn
            .query_row(
                "SELECT power_level FROM profiles WHERE username = ?1",
                params![username],
                |row| row.get(0),
            )
            .optional()
            .map_err(query_err)?;

        match value {
            None => Ok(PowerLevel::default()),
            Some(value) => u64::try_from(value)
                .map(PowerLevel::new)
                .map_err(|_| StoreError::Corrupt(format!("Negative power level {}", value))),
        }
    }

    fn commit_exercise_log(
        &mut self,
        username: &str,
        log: &[ExerciseLogEntry],
        power: PowerLevel,
    ) -> Result<(), StoreError> {
        validate_username(username)?;
        validate_exercises(log)?;

        let tx = self.conn.transaction().map_err(query_err)?;
        write_exercises(&tx, username, log)?;
        write_power_level(&tx, username, power)?;
        tx.commit().map_err(query_err)?;

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
        validate_username(username)?;
        validate_rom_pain(log)?;

        let tx = self.conn.transaction().map_err(query_err)?;
        write_rom_pain(&tx, username, log)?;
        write_power_level(&tx, username, power)?;
        tx.commit().map_err(query_err)?;

        tracing::info!(
            "Committed {} ROM/pain entries for {} at power level {}",
            log.len(),
            username,
            power.value()
        );
        Ok(())
    }
}

impl UserDirectory for SqliteStore {
    fn create_user(
        &mut self,
        username: &str,
        password: &str,
        email: Option<&str>,
    ) -> Result<UserRecord, StoreError> {
        validate_username(username)?;
        if self.user_exists(username)? {
            return Err(StoreError::UserExists(username.to_string()));
        }

        let created_at = Utc::now();
        self.conn
            .execute(
                "INSERT INTO users (username, password_hash, email, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    username,
                    hash_password(password),
                    email,
                    created_at.to_rfc3339()
                ],
            )
            .map_err(query_err)?;

        tracing::info!("Created user {}", username);
        Ok(UserRecord {
            username: username.to_string(),
            email: email.map(str::to_string),
            created_at,
        })
    }

    fn authenticate(&self, username: &str, password: &str) -> Result<UserRecord, StoreError> {
        let row: Option<(String, Option<String>, String)> = self
            .conn
            .query_row(
                "SELECT password_hash, email, created_at FROM users WHERE username = ?1",
                params![username],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()
            .map_err(query_err)?;

        let (password_hash, email, created_at) =
            row.ok_or_else(|| StoreError::NotFound(format!("User {}", username)))?;

        if !verify_password(&password_hash, password) {
            tracing::debug!("Rejected password for {}", username);
            return Err(StoreError::InvalidCredentials);
        }

        let created_at = DateTime::parse_from_rfc3339(&created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| StoreError::Corrupt(format!("Invalid created date: {}", e)))?;

        Ok(UserRecord {
            username: username.to_string(),
            email,
            created_at,
        })
    }

    fn list_users(&self) -> Result<Vec<UserSummary>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT username, name FROM profiles
                 UNION
                 SELECT username, '' FROM users
                 WHERE username NOT IN (SELECT username FROM profiles)
                 ORDER BY 1",
            )
            .map_err(query_err)?;

        let rows = stmt
            .query_map([], |row| {
                Ok(UserSummary {
                    username: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .map_err(query_err)?;

        let mut users = Vec::new();
        for row in rows {
            users.push(row.map_err(query_err)?);
        }

        Ok(users)
    }
}

/// Intermediate struct for reading profile rows from database.
struct ProfileRow {
    name: String,
    age: u32,
    weight_kg: f64,
    height_cm: f64,
    surgery_date: Option<String>,
    injury_type: String,
}

impl ProfileRow {
    fn into_profile(self) -> Profile {
        let surgery_date = self.surgery_date.and_then(|raw| {
            parse_date(&raw)
                .map_err(|e| tracing::debug!("Ignoring stored surgery date: {}", e))
                .ok()
        });

        Profile {
            name: self.name,
            age: self.age,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            surgery_date,
            injury_type: InjuryType::from_label(&self.injury_type),
        }
    }
}

/// Intermediate struct for reading exercise rows from database.
struct ExerciseRow {
    date: String,
    category: String,
    exercise: String,
    sets: u32,
    reps: u32,
    weight_kg: f64,
    notes: String,
}

impl ExerciseRow {
    fn into_entry(self) -> Result<ExerciseLogEntry, StoreError> {
        let category = Catalog::load()
            .and_then(|catalog| catalog.resolve_category(&self.category, &self.exercise))
            .map_err(|e: CatalogError| StoreError::Corrupt(e.to_string()))?;

        let entry = ExerciseLogEntry {
            date: parse_date(&self.date)?,
            category,
            exercise: self.exercise,
            sets: self.sets,
            reps: self.reps,
            weight_kg: self.weight_kg,
            notes: self.notes,
        };
        entry.validate()?;
        Ok(entry)
    }
}

/// Intermediate struct for reading ROM/pain rows from database.
struct RomPainRow {
    date: String,
    extension_deg: f64,
    flexion_deg: f64,
    pain_level: u8,
    swelling: u8,
    notes: String,
}

impl RomPainRow {
    fn into_entry(self) -> Result<RomPainEntry, StoreError> {
        let entry = RomPainEntry {
            date: parse_date(&self.date)?,
            extension_deg: self.extension_deg,
            flexion_deg: self.flexion_deg,
            pain_level: self.pain_level,
            swelling: Swelling::from_ordinal(self.swelling)?,
            notes: self.notes,
        };
        entry.validate()?;
        Ok(entry)
    }
}
