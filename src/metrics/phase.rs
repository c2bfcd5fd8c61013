//! Rehabilitation phase classification.
//!
//! Two classifiers with different day boundaries exist and stay separate:
//! [`RehabPhase`] drives the dashboard (7/21/42/90/180 days) while
//! [`TimelineStage`] drives the week-based profile timeline (14/42/84/140).

use serde::{Deserialize, Serialize};

/// Rehabilitation phase derived from days since surgery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RehabPhase {
    PreOp,
    EarlyMotion,
    InitialRecovery,
    ProgressiveLoading,
    StrengthBuilding,
    PowerDevelopment,
    ReturnToSport,
}

/// Lower day bound of each post-op phase, ascending. Entry `i` starts
/// `RehabPhase::ALL[i + 1]`.
const PHASE_STARTS: [i64; 6] = [0, 7, 21, 42, 90, 180];

impl RehabPhase {
    pub const ALL: [RehabPhase; 7] = [
        RehabPhase::PreOp,
        RehabPhase::EarlyMotion,
        RehabPhase::InitialRecovery,
        RehabPhase::ProgressiveLoading,
        RehabPhase::StrengthBuilding,
        RehabPhase::PowerDevelopment,
        RehabPhase::ReturnToSport,
    ];

    /// Phase for the given day offset: the greatest threshold not above `days`.
    pub fn from_days(days: i64) -> Self {
        let passed = PHASE_STARTS.iter().take_while(|&&start| days >= start).count();
        Self::ALL[passed]
    }

    /// Position in the phase sequence, 0 for pre-op.
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|phase| phase == self)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            RehabPhase::PreOp => "Pre-Op/Preparation",
            RehabPhase::EarlyMotion => "Phase 0 – Early Motion",
            RehabPhase::InitialRecovery => "Phase 1 – Initial Recovery",
            RehabPhase::ProgressiveLoading => "Phase 2 – Progressive Loading",
            RehabPhase::StrengthBuilding => "Phase 3 – Strength Building",
            RehabPhase::PowerDevelopment => "Phase 4 – Power Development",
            RehabPhase::ReturnToSport => "Phase 5 – Return to Sport",
        }
    }

    /// Focus of the phase, as shown on the timeline.
    pub fn focus(&self) -> &'static str {
        match self {
            RehabPhase::PreOp => "Pre-habilitation before surgery",
            RehabPhase::EarlyMotion => "Beginning of your journey",
            RehabPhase::InitialRecovery => "Early motion & pain control",
            RehabPhase::ProgressiveLoading => "Progressive loading",
            RehabPhase::StrengthBuilding => "Strength normalization",
            RehabPhase::PowerDevelopment => "Power & return to loading",
            RehabPhase::ReturnToSport => "Return to sport/impact",
        }
    }

    /// Day boundaries of this phase.
    pub fn span(&self) -> PhaseSpan {
        let i = self.index();
        PhaseSpan {
            phase: *self,
            start_day: i.checked_sub(1).map(|j| PHASE_STARTS[j]),
            end_day: PHASE_STARTS.get(i).copied(),
        }
    }
}

impl std::fmt::Display for RehabPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Half-open day range `[start_day, end_day)` covered by a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSpan {
    pub phase: RehabPhase,
    /// Inclusive lower bound, `None` for pre-op
    pub start_day: Option<i64>,
    /// Exclusive upper bound, `None` for the final phase
    pub end_day: Option<i64>,
}

impl PhaseSpan {
    pub fn contains(&self, days: i64) -> bool {
        self.start_day.map_or(true, |start| days >= start)
            && self.end_day.map_or(true, |end| days < end)
    }

    /// How far through the phase `days` is, 0-100. `None` for open-ended
    /// phases or days outside the span.
    pub fn progress_percent(&self, days: i64) -> Option<f64> {
        let (start, end) = (self.start_day?, self.end_day?);
        if !self.contains(days) {
            return None;
        }
        Some((days - start) as f64 / (end - start) as f64 * 100.0)
    }
}

/// Coarse week-based stage used by the profile timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimelineStage {
    PreOp,
    Weeks0To2,
    Weeks3To6,
    Weeks7To12,
    Weeks13To20,
    Weeks21Plus,
}

impl TimelineStage {
    pub const ALL: [TimelineStage; 6] = [
        TimelineStage::PreOp,
        TimelineStage::Weeks0To2,
        TimelineStage::Weeks3To6,
        TimelineStage::Weeks7To12,
        TimelineStage::Weeks13To20,
        TimelineStage::Weeks21Plus,
    ];

    /// Inclusive day ranges: 0-14, 15-42, 43-84, 85-140, then 141+.
    pub fn from_days(days: i64) -> Self {
        match days {
            d if d < 0 => TimelineStage::PreOp,
            0..=14 => TimelineStage::Weeks0To2,
            15..=42 => TimelineStage::Weeks3To6,
            43..=84 => TimelineStage::Weeks7To12,
            85..=140 => TimelineStage::Weeks13To20,
            _ => TimelineStage::Weeks21Plus,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimelineStage::PreOp => "Pre-op",
            TimelineStage::Weeks0To2 => "Week 0-2",
            TimelineStage::Weeks3To6 => "Week 3-6",
            TimelineStage::Weeks7To12 => "Week 7-12",
            TimelineStage::Weeks13To20 => "Week 13-20",
            TimelineStage::Weeks21Plus => "Week 21+",
        }
    }

    pub fn guidance(&self) -> &'static str {
        match self {
            TimelineStage::PreOp => "Prepare for surgery with prehabilitation exercises.",
            TimelineStage::Weeks0To2 => {
                "Focus on swelling control, early ROM, and quad activation."
            }
            TimelineStage::Weeks3To6 => "Progress ROM and begin early strength training.",
            TimelineStage::Weeks7To12 => {
                "Increase strength training and introduce light functional exercises."
            }
            TimelineStage::Weeks13To20 => "Add plyometrics and sport-specific training.",
            TimelineStage::Weeks21Plus => "Gradual return to sport and maintenance.",
        }
    }
}

impl std::fmt::Display for TimelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
