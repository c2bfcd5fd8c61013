//! Qualitative status of the latest ROM and pain readings.

use serde::{Deserialize, Serialize};

/// ROM classification from the latest extension/flexion pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RomStatus {
    NeedsWork,
    Good,
    Excellent,
    FullRange,
}

impl RomStatus {
    pub fn classify(extension_deg: f64, flexion_deg: f64) -> Self {
        if extension_deg <= 0.0 && flexion_deg >= 135.0 {
            RomStatus::FullRange
        } else if extension_deg <= 0.0 && flexion_deg >= 120.0 {
            RomStatus::Excellent
        } else if extension_deg <= 5.0 && flexion_deg >= 110.0 {
            RomStatus::Good
        } else {
            RomStatus::NeedsWork
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RomStatus::FullRange => "Super Saiyan ROM Achieved!",
            RomStatus::Excellent => "Excellent ROM - Keep it up!",
            RomStatus::Good => "Good ROM - Getting stronger!",
            RomStatus::NeedsWork => "Continue your ROM training!",
        }
    }
}

/// Pain classification from the latest pain level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PainStatus {
    Minimal,
    Controlled,
    Moderate,
    High,
}

impl PainStatus {
    pub fn classify(pain_level: u8) -> Self {
        match pain_level {
            0..=1 => PainStatus::Minimal,
            2..=3 => PainStatus::Controlled,
            4..=5 => PainStatus::Moderate,
            _ => PainStatus::High,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            PainStatus::Minimal => "Ultra Instinct Level Pain Control!",
            PainStatus::Controlled => "Well-controlled - Great job!",
            PainStatus::Moderate => "Moderate - Stay focused!",
            PainStatus::High => "High - Review pain management!",
        }
    }
}
