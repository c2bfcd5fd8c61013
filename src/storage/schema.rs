//! Database schema definitions for RehabTrack.

/// SQL schema for creating all database tables.
pub const SCHEMA: &str = r#"
-- User accounts
CREATE TABLE IF NOT EXISTS users (
    username TEXT PRIMARY KEY,
    password_hash TEXT NOT NULL,
    email TEXT,
    created_at TEXT NOT NULL
);

-- One rehab profile per username
CREATE TABLE IF NOT EXISTS profiles (
    username TEXT PRIMARY KEY,
    name TEXT NOT NULL DEFAULT '',
    age INTEGER NOT NULL DEFAULT 30,
    weight_kg REAL NOT NULL DEFAULT 70.0,
    height_cm REAL NOT NULL DEFAULT 170.0,
    surgery_date TEXT,
    injury_type TEXT NOT NULL DEFAULT 'ACL Tear',
    updated_at TEXT NOT NULL
);

-- Exercise log, insertion order is log order
CREATE TABLE IF NOT EXISTS exercises (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL,
    date TEXT NOT NULL,
    category TEXT NOT NULL,
    exercise TEXT NOT NULL,
    sets INTEGER NOT NULL,
    reps INTEGER NOT NULL,
    weight_kg REAL NOT NULL,
    notes TEXT NOT NULL DEFAULT ''
);

-- ROM and pain log
CREATE TABLE IF NOT EXISTS rom_pain (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL,
    date TEXT NOT NULL,
    extension_deg REAL NOT NULL,
    flexion_deg REAL NOT NULL,
    pain_level INTEGER NOT NULL,
    swelling INTEGER NOT NULL,
    notes TEXT NOT NULL DEFAULT ''
);

CREATE INDEX IF NOT EXISTS idx_exercises_user ON exercises(username, id);
CREATE INDEX IF NOT EXISTS idx_rom_pain_user ON rom_pain(username, id);
"#;

/// Schema version tracking table
pub const SCHEMA_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
);
"#;

/// Current schema version
pub const CURRENT_VERSION: i32 = 2;

/// SQL for migration from v1 to v2 (power level stored with the profile)
pub const MIGRATION_V1_TO_V2: &str = r#"
ALTER TABLE profiles ADD COLUMN power_level INTEGER NOT NULL DEFAULT 9000;
"#;
