//! Data model for profiles and the two rehab logs.

pub mod types;

pub use types::{
    format_date, parse_date, validate_username, BmiCategory, Difficulty, ExerciseLogEntry,
    Profile, RomPainEntry, Swelling, ValidationError, DATE_FORMAT,
};
