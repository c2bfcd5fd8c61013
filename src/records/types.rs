//! Logged records and the user profile.

use crate::catalog::{ExerciseCategory, InjuryType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical stored date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(value.to_string()))
}

/// Format a date in the canonical stored form.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Field-level validation failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("{0} must be a finite number")]
    NotFinite(&'static str),

    #[error("Unknown swelling level: {0}")]
    UnknownSwelling(String),

    #[error("Exercise {exercise:?} is not part of {category}")]
    UnknownExercise {
        category: ExerciseCategory,
        exercise: String,
    },

    #[error("Invalid username {0:?}: use letters, digits, '-' or '_'")]
    InvalidUsername(String),
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite(field));
    }
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            value,
        });
    }
    Ok(())
}

/// Validate a username used to partition stored records.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let valid = !username.is_empty()
        && username.len() <= 64
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidUsername(username.to_string()))
    }
}

/// Rehab profile, one per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Date of surgery, if scheduled or done
    pub surgery_date: Option<NaiveDate>,
    /// Injury being rehabilitated
    pub injury_type: InjuryType,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: 30,
            weight_kg: 70.0,
            height_cm: 170.0,
            surgery_date: None,
            injury_type: InjuryType::AclTear,
        }
    }
}

impl Profile {
    /// Validate the numeric fields against the ranges the profile form allows.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_range("age", f64::from(self.age), 0.0, 120.0)?;
        check_range("weight", self.weight_kg, 0.0, 200.0)?;
        check_range("height", self.height_cm, 0.0, 250.0)?;
        Ok(())
    }

    /// Body mass index rounded to one decimal, 0 when height is unknown.
    pub fn bmi(&self) -> f64 {
        if self.height_cm <= 0.0 {
            return 0.0;
        }
        let meters = self.height_cm / 100.0;
        (self.weight_kg / (meters * meters) * 10.0).round() / 10.0
    }

    pub fn bmi_category(&self) -> BmiCategory {
        BmiCategory::from_bmi(self.bmi())
    }
}

/// WHO BMI bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// One completed exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLogEntry {
    pub date: NaiveDate,
    pub category: ExerciseCategory,
    pub exercise: String,
    pub sets: u32,
    pub reps: u32,
    /// Load in kg, 0 for bodyweight
    pub weight_kg: f64,
    pub notes: String,
}

impl ExerciseLogEntry {
    /// Create a validated entry.
    pub fn new(
        date: NaiveDate,
        category: ExerciseCategory,
        exercise: impl Into<String>,
        sets: u32,
        reps: u32,
        weight_kg: f64,
    ) -> Result<Self, ValidationError> {
        let entry = Self {
            date,
            category,
            exercise: exercise.into(),
            sets,
            reps,
            weight_kg,
            notes: String::new(),
        };
        entry.validate()?;
        Ok(entry)
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// sets >= 1, reps >= 1, weight >= 0.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sets < 1 {
            return Err(ValidationError::OutOfRange {
                field: "sets",
                min: 1.0,
                max: f64::from(u32::MAX),
                value: f64::from(self.sets),
            });
        }
        if self.reps < 1 {
            return Err(ValidationError::OutOfRange {
                field: "reps",
                min: 1.0,
                max: f64::from(u32::MAX),
                value: f64::from(self.reps),
            });
        }
        check_range("weight", self.weight_kg, 0.0, f64::MAX)
    }

    /// Training volume: sets x reps x weight.
    pub fn volume(&self) -> f64 {
        f64::from(self.sets) * f64::from(self.reps) * self.weight_kg
    }
}

/// Ordinal swelling grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Swelling {
    #[default]
    None,
    Minimal,
    Moderate,
    Severe,
}

impl Swelling {
    pub const ALL: [Swelling; 4] = [
        Swelling::None,
        Swelling::Minimal,
        Swelling::Moderate,
        Swelling::Severe,
    ];

    /// Ordinal value, 0..=3.
    pub fn ordinal(&self) -> u8 {
        match self {
            Swelling::None => 0,
            Swelling::Minimal => 1,
            Swelling::Moderate => 2,
            Swelling::Severe => 3,
        }
    }

    pub fn from_ordinal(value: u8) -> Result<Self, ValidationError> {
        Swelling::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| ValidationError::UnknownSwelling(value.to_string()))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Swelling::None => "None",
            Swelling::Minimal => "Minimal",
            Swelling::Moderate => "Moderate",
            Swelling::Severe => "Severe",
        }
    }
}

impl std::str::FromStr for Swelling {
    type Err = ValidationError;

    /// Accepts either the ordinal (`0`..`3`) or the label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(value) = s.parse::<u8>() {
            return Swelling::from_ordinal(value);
        }
        Swelling::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::UnknownSwelling(s.to_string()))
    }
}

/// One range-of-motion and pain measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RomPainEntry {
    pub date: NaiveDate,
    /// Knee extension in degrees, negative is hyperextension
    pub extension_deg: f64,
    /// Knee flexion in degrees
    pub flexion_deg: f64,
    /// Pain on a 0-10 scale
    pub pain_level: u8,
    pub swelling: Swelling,
    pub notes: String,
}

impl RomPainEntry {
    pub const EXTENSION_RANGE: (f64, f64) = (-15.0, 30.0);
    pub const FLEXION_RANGE: (f64, f64) = (0.0, 160.0);
    pub const MAX_PAIN: u8 = 10;

    /// Create a validated entry.
    pub fn new(
        date: NaiveDate,
        extension_deg: f64,
        flexion_deg: f64,
        pain_level: u8,
        swelling: Swelling,
    ) -> Result<Self, ValidationError> {
        let entry = Self {
            date,
            extension_deg,
            flexion_deg,
            pain_level,
            swelling,
            notes: String::new(),
        };
        entry.validate()?;
        Ok(entry)
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let (ext_min, ext_max) = Self::EXTENSION_RANGE;
        let (flex_min, flex_max) = Self::FLEXION_RANGE;
        check_range("extension", self.extension_deg, ext_min, ext_max)?;
        check_range("flexion", self.flexion_deg, flex_min, flex_max)?;
        check_range(
            "pain",
            f64::from(self.pain_level),
            0.0,
            f64::from(Self::MAX_PAIN),
        )
    }
}

/// Difficulty rating given when logging an exercise, 1-10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::OutOfRange {
                field: "difficulty",
                min: f64::from(Self::MIN),
                max: f64::from(Self::MAX),
                value: f64::from(value),
            })
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(5)
    }
}
