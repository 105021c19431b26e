use rand::Rng;

use crate::models::domain::Difficulty;

pub const PLAYER_CORRECT_BONUS: f64 = 0.10;
pub const MAX_OPPONENT_PROBABILITY: f64 = 0.95;

/// Uniform draws in `[0, 1)`.
pub trait Dice: Send + Sync {
    fn roll(&self) -> f64;
}

pub struct ThreadRngDice;

impl Dice for ThreadRngDice {
    fn roll(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Always rolls the same value.
pub struct FixedDice(pub f64);

impl Dice for FixedDice {
    fn roll(&self) -> f64 {
        self.0
    }
}

/// Chance that an opponent of `skill_level` answers correctly, before the
/// player bonus and the cap.
pub fn base_probability(difficulty: Difficulty, skill_level: u8) -> f64 {
    let s = f64::from(skill_level);
    match difficulty {
        Difficulty::Easy => 0.30 + s / 30.0,
        Difficulty::Medium => 0.40 + s / 20.0,
        Difficulty::Hard => 0.50 + s / 15.0,
        Difficulty::Expert => 0.60 + s / 12.0,
    }
}

pub fn answer_probability(difficulty: Difficulty, skill_level: u8, player_correct: bool) -> f64 {
    let mut p = base_probability(difficulty, skill_level);
    if player_correct {
        p += PLAYER_CORRECT_BONUS;
    }
    p.min(MAX_OPPONENT_PROBABILITY)
}

/// Independent Bernoulli draw for one question.
pub fn resolve_answer(
    dice: &dyn Dice,
    difficulty: Difficulty,
    skill_level: u8,
    player_correct: bool,
) -> bool {
    dice.roll() < answer_probability(difficulty, skill_level, player_correct)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn easy_skill_three_matches_reference_values() {
        assert!((base_probability(Difficulty::Easy, 3) - 0.40).abs() < EPSILON);
        assert!((answer_probability(Difficulty::Easy, 3, false) - 0.40).abs() < EPSILON);
        assert!((answer_probability(Difficulty::Easy, 3, true) - 0.50).abs() < EPSILON);
    }

    #[test]
    fn base_probability_is_monotonic_in_difficulty() {
        for skill in 1..=10 {
            let probabilities: Vec<f64> = Difficulty::ALL
                .iter()
                .map(|d| base_probability(*d, skill))
                .collect();
            for pair in probabilities.windows(2) {
                assert!(pair[1] >= pair[0], "skill {}: {:?}", skill, probabilities);
            }
        }
    }

    #[test]
    fn probability_is_capped() {
        for difficulty in Difficulty::ALL {
            for skill in 1..=10 {
                for player_correct in [false, true] {
                    let probability = answer_probability(difficulty, skill, player_correct);
                    assert!(probability <= MAX_OPPONENT_PROBABILITY);
                }
            }
        }
        assert_eq!(answer_probability(Difficulty::Expert, 10, true), MAX_OPPONENT_PROBABILITY);
    }

    #[test]
    fn draw_below_probability_is_correct() {
        assert!(resolve_answer(&FixedDice(0.39), Difficulty::Easy, 3, false));
        assert!(!resolve_answer(&FixedDice(0.40), Difficulty::Easy, 3, false));
        assert!(resolve_answer(&FixedDice(0.45), Difficulty::Easy, 3, true));
        assert!(!resolve_answer(&FixedDice(0.95), Difficulty::Expert, 10, true));
    }

    #[test]
    fn thread_rng_dice_rolls_unit_interval() {
        let dice = ThreadRngDice;
        for _ in 0..1000 {
            let roll = dice.roll();
            assert!((0.0..1.0).contains(&roll));
        }
    }
}
