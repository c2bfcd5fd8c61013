//! Everything the progress dashboard shows, derived in one pass.

use crate::catalog::ExerciseCategory;
use crate::metrics::aggregate::{self, RomTrend, SeriesPoint};
use crate::metrics::days::{days_since, recovery_percent, SurgeryCountdown};
use crate::metrics::phase::{RehabPhase, TimelineStage};
use crate::metrics::power::{PowerLevel, PowerTier};
use crate::metrics::status::{PainStatus, RomStatus};
use crate::records::{ExerciseLogEntry, Profile, RomPainEntry};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of entries shown in the recent activity list.
pub const RECENT_LIMIT: usize = 5;

/// Surgery timeline position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineSummary {
    pub days_since_surgery: i64,
    pub countdown: SurgeryCountdown,
    pub phase: RehabPhase,
    pub phase_label: String,
    /// Progress through the current phase, when it is bounded
    pub phase_progress: Option<f64>,
    pub stage: TimelineStage,
    pub recovery_percent: u8,
}

impl TimelineSummary {
    pub fn new(days: i64) -> Self {
        let phase = RehabPhase::from_days(days);
        Self {
            days_since_surgery: days,
            countdown: SurgeryCountdown::from_days(days),
            phase,
            phase_label: phase.label().to_string(),
            phase_progress: phase.span().progress_percent(days),
            stage: TimelineStage::from_days(days),
            recovery_percent: recovery_percent(days),
        }
    }
}

/// Latest ROM/pain reading with derived gauges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RomSummary {
    pub date: NaiveDate,
    pub extension_deg: f64,
    pub flexion_deg: f64,
    pub pain_level: u8,
    pub achievement_percent: f64,
    pub rom_status: RomStatus,
    pub pain_status: PainStatus,
    pub trend: Option<RomTrend>,
}

/// Exercise log totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExerciseSummary {
    pub total_entries: usize,
    pub total_sets: u64,
    pub total_volume: f64,
    pub by_category: Vec<(ExerciseCategory, usize)>,
    pub daily_frequency: Vec<(NaiveDate, usize)>,
    pub recent: Vec<ExerciseLogEntry>,
}

/// Dashboard view model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub name: String,
    /// `None` when no surgery date is set
    pub timeline: Option<TimelineSummary>,
    pub exercises: ExerciseSummary,
    /// `None` until the first ROM/pain entry
    pub rom: Option<RomSummary>,
    pub extension_series: Vec<SeriesPoint>,
    pub flexion_series: Vec<SeriesPoint>,
    pub pain_series: Vec<SeriesPoint>,
    pub power_level: u64,
    pub power_tier: PowerTier,
    pub power_bar_percent: f64,
}

impl DashboardSummary {
    /// Derive the dashboard from the current records.
    pub fn build(
        profile: &Profile,
        exercise_log: &[ExerciseLogEntry],
        rom_pain_log: &[RomPainEntry],
        power: PowerLevel,
        today: NaiveDate,
    ) -> Self {
        let timeline = profile
            .surgery_date
            .map(|surgery| TimelineSummary::new(days_since(surgery, today)));

        let exercises = ExerciseSummary {
            total_entries: aggregate::count_all(exercise_log),
            total_sets: aggregate::total_sets(exercise_log),
            total_volume: aggregate::total_volume(exercise_log),
            by_category: aggregate::group_by_category(exercise_log).into_iter().collect(),
            daily_frequency: aggregate::daily_frequency(exercise_log),
            recent: aggregate::recent(exercise_log, RECENT_LIMIT)
                .into_iter()
                .cloned()
                .collect(),
        };

        let rom = aggregate::latest(rom_pain_log).map(|latest| RomSummary {
            date: latest.date,
            extension_deg: latest.extension_deg,
            flexion_deg: latest.flexion_deg,
            pain_level: latest.pain_level,
            achievement_percent: aggregate::rom_achievement_percent(
                latest.extension_deg,
                latest.flexion_deg,
            ),
            rom_status: RomStatus::classify(latest.extension_deg, latest.flexion_deg),
            pain_status: PainStatus::classify(latest.pain_level),
            trend: RomTrend::from_log(rom_pain_log),
        });

        Self {
            name: profile.name.clone(),
            timeline,
            exercises,
            rom,
            extension_series: aggregate::series(rom_pain_log, |e| e.extension_deg),
            flexion_series: aggregate::series(rom_pain_log, |e| e.flexion_deg),
            pain_series: aggregate::series(rom_pain_log, |e| f64::from(e.pain_level)),
            power_level: power.value(),
            power_tier: power.tier(),
            power_bar_percent: power.bar_percent(),
        }
    }

    /// True when neither log has any entries yet.
    pub fn is_empty(&self) -> bool {
        self.exercises.total_entries == 0 && self.rom.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Swelling;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_empty_dashboard() {
        let summary =
            DashboardSummary::build(&Profile::default(), &[], &[], PowerLevel::default(), day(1));
        assert!(summary.is_empty());
        assert!(summary.timeline.is_none());
        assert!(summary.rom.is_none());
        assert!(summary.exercises.daily_frequency.is_empty());
        assert_eq!(summary.power_level, 9000);
    }

    #[test]
    fn test_dashboard_with_data() {
        let profile = Profile {
            name: "Sam".to_string(),
            surgery_date: Some(day(1)),
            ..Default::default()
        };
        let exercises = vec![
            ExerciseLogEntry::new(day(2), ExerciseCategory::Rom, "Heel Slides", 3, 10, 0.0).unwrap(),
            ExerciseLogEntry::new(day(4), ExerciseCategory::Strength, "Leg Press", 3, 10, 20.0)
                .unwrap(),
        ];
        let rom = vec![
            RomPainEntry::new(day(2), 8.0, 80.0, 6, Swelling::Moderate).unwrap(),
            RomPainEntry::new(day(9), 0.0, 135.0, 1, Swelling::None).unwrap(),
        ];

        let summary =
            DashboardSummary::build(&profile, &exercises, &rom, PowerLevel::new(12_000), day(11));

        let timeline = summary.timeline.as_ref().unwrap();
        assert_eq!(timeline.days_since_surgery, 10);
        assert_eq!(timeline.phase, RehabPhase::InitialRecovery);
        assert_eq!(timeline.stage, TimelineStage::Weeks0To2);
        assert_eq!(timeline.recovery_percent, 5);

        assert_eq!(summary.exercises.total_entries, 2);
        assert_eq!(summary.exercises.total_volume, 600.0);
        assert_eq!(summary.exercises.daily_frequency.len(), 3);
        assert_eq!(summary.exercises.recent[0].exercise, "Leg Press");

        let latest = summary.rom.as_ref().unwrap();
        assert_eq!(latest.date, day(9));
        assert_eq!(latest.achievement_percent, 100.0);
        assert_eq!(latest.rom_status, RomStatus::FullRange);
        assert_eq!(latest.pain_status, PainStatus::Minimal);
        assert_eq!(latest.trend.unwrap().flexion_delta, 55.0);

        assert_eq!(summary.power_tier, PowerTier::OverNineThousand);
        assert_eq!(summary.flexion_series.len(), 2);
    }
}
