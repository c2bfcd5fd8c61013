//! Metrics engine: pure derivations from profile and log records.

pub mod aggregate;
pub mod dashboard;
pub mod days;
pub mod phase;
pub mod power;
pub mod status;

pub use aggregate::{Dated, RomTrend, SeriesPoint};
pub use dashboard::DashboardSummary;
pub use days::{days_since, days_since_str, recovery_percent, SurgeryCountdown};
pub use phase::{PhaseSpan, RehabPhase, TimelineStage};
pub use power::{
    exercise_score, rom_entry_score, rom_score, PowerLevel, PowerTier, RomScoreBreakdown,
    INITIAL_POWER_LEVEL,
};
pub use status::{PainStatus, RomStatus};
