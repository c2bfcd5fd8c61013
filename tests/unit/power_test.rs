//! Unit tests for power level scoring.

use rehabtrack::metrics::power::{exercise_score, rom_score, PowerTier, INITIAL_POWER_LEVEL};
use rehabtrack::{Difficulty, PowerLevel};

fn difficulty(v: u8) -> Difficulty {
    Difficulty::new(v).unwrap()
}

#[test]
fn test_exercise_score_weighted() {
    // 3 x 10 at 40 kg, difficulty 5: 30 * 5 * 5 * 1.5
    assert_eq!(exercise_score(3, 10, 40.0, difficulty(5)), 1125);
}

#[test]
fn test_exercise_score_bodyweight() {
    assert_eq!(exercise_score(2, 15, 0.0, difficulty(4)), 180);
    // 1.5 rounds up
    assert_eq!(exercise_score(1, 1, 0.0, difficulty(1)), 2);
}

#[test]
fn test_exercise_score_grows_with_difficulty() {
    let easy = exercise_score(3, 10, 10.0, difficulty(2));
    let hard = exercise_score(3, 10, 10.0, difficulty(9));
    assert!(hard > easy);
}

#[test]
fn test_rom_score_parts() {
    let score = rom_score(0.0, 120.0, 2, 1);
    assert_eq!(score.extension, 1500);
    assert_eq!(score.flexion, 3600);
    assert_eq!(score.pain, 640);
    assert_eq!(score.swelling, 200);
    assert_eq!(score.total(), 5940);
}

#[test]
fn test_rom_score_never_negative() {
    let score = rom_score(30.0, 0.0, 10, 3);
    assert_eq!(score.total(), 0);
}

#[test]
fn test_hyperextension_scores_above_zero_extension() {
    assert!(rom_score(-5.0, 90.0, 0, 0).extension > rom_score(0.0, 90.0, 0, 0).extension);
}

#[test]
fn test_power_level_starts_over_nine_thousand_threshold() {
    let power = PowerLevel::default();
    assert_eq!(power.value(), INITIAL_POWER_LEVEL);
    assert_eq!(power.tier(), PowerTier::Base);
    assert_eq!(power.add(1).tier(), PowerTier::OverNineThousand);
}

#[test]
fn test_power_tiers() {
    assert_eq!(PowerTier::from_level(20_000), PowerTier::OverNineThousand);
    assert_eq!(PowerTier::from_level(20_001), PowerTier::SuperSaiyan);
    assert_eq!(PowerTier::from_level(50_001), PowerTier::SuperSaiyanBlue);
    assert_eq!(PowerTier::from_level(100_001), PowerTier::UltraInstinct);
}

#[test]
fn test_power_bar_caps_at_full() {
    assert_eq!(PowerLevel::new(5_000).bar_percent(), 50.0);
    assert_eq!(PowerLevel::new(250_000).bar_percent(), 100.0);
}

#[test]
fn test_power_add_saturates() {
    assert_eq!(PowerLevel::new(u64::MAX).add(10).value(), u64::MAX);
}
