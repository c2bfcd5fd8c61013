//! Power level gamification.
//!
//! Scores are arbitrary gamification values, not clinical measures. The
//! formulas are fixed so that existing power levels stay comparable.

use crate::records::{Difficulty, ExerciseLogEntry, RomPainEntry};
use serde::{Deserialize, Serialize};

/// Power level a new user starts with.
pub const INITIAL_POWER_LEVEL: u64 = 9000;

/// Score for a logged exercise:
/// `round(sets * reps * (1 + weight / 10) * difficulty * 1.5)`.
pub fn exercise_score(sets: u32, reps: u32, weight_kg: f64, difficulty: Difficulty) -> u64 {
    let raw = f64::from(sets)
        * f64::from(reps)
        * (1.0 + weight_kg.max(0.0) / 10.0)
        * f64::from(difficulty.value())
        * 1.5;
    raw.round() as u64
}

/// Score for an exercise log entry at the given difficulty.
pub fn entry_score(entry: &ExerciseLogEntry, difficulty: Difficulty) -> u64 {
    exercise_score(entry.sets, entry.reps, entry.weight_kg, difficulty)
}

/// The four parts of a ROM/pain score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RomScoreBreakdown {
    pub extension: u64,
    pub flexion: u64,
    pub pain: u64,
    pub swelling: u64,
}

impl RomScoreBreakdown {
    pub fn total(&self) -> u64 {
        self.extension + self.flexion + self.pain + self.swelling
    }
}

/// Score for a ROM/pain measurement. Less extension deficit, more flexion,
/// less pain and less swelling each score higher.
pub fn rom_score(
    extension_deg: f64,
    flexion_deg: f64,
    pain_level: u8,
    swelling_ordinal: u8,
) -> RomScoreBreakdown {
    let non_negative = |v: f64| v.max(0.0).round() as u64;
    RomScoreBreakdown {
        extension: non_negative((30.0 - extension_deg).max(0.0) * 50.0),
        flexion: non_negative(flexion_deg * 30.0),
        pain: non_negative((10.0 - f64::from(pain_level)) * 80.0),
        swelling: non_negative((3.0 - f64::from(swelling_ordinal)) * 100.0),
    }
}

/// Score breakdown for a ROM/pain entry.
pub fn rom_entry_score(entry: &RomPainEntry) -> RomScoreBreakdown {
    rom_score(
        entry.extension_deg,
        entry.flexion_deg,
        entry.pain_level,
        entry.swelling.ordinal(),
    )
}

/// Cumulative power level. Only ever grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PowerLevel(u64);

impl PowerLevel {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Level after gaining `score`, saturating at `u64::MAX`.
    pub fn add(self, score: u64) -> Self {
        Self(self.0.saturating_add(score))
    }

    pub fn tier(&self) -> PowerTier {
        PowerTier::from_level(self.0)
    }

    /// Fill of the power bar, 0-100: one percent per hundred points.
    pub fn bar_percent(&self) -> f64 {
        (self.0 as f64 / 100.0).min(100.0)
    }
}

impl Default for PowerLevel {
    fn default() -> Self {
        Self(INITIAL_POWER_LEVEL)
    }
}

impl std::fmt::Display for PowerLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Power level milestones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PowerTier {
    Base,
    OverNineThousand,
    SuperSaiyan,
    SuperSaiyanBlue,
    UltraInstinct,
}

impl PowerTier {
    pub fn from_level(level: u64) -> Self {
        match level {
            l if l > 100_000 => PowerTier::UltraInstinct,
            l if l > 50_000 => PowerTier::SuperSaiyanBlue,
            l if l > 20_000 => PowerTier::SuperSaiyan,
            l if l > 9_000 => PowerTier::OverNineThousand,
            _ => PowerTier::Base,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PowerTier::Base => "Training",
            PowerTier::OverNineThousand => "IT'S OVER 9000!!!",
            PowerTier::SuperSaiyan => "Super Saiyan Level Achieved!",
            PowerTier::SuperSaiyanBlue => "Super Saiyan Blue Achieved!",
            PowerTier::UltraInstinct => "Ultra Instinct Unlocked!",
        }
    }
}
