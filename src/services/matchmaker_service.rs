use std::time::Duration;

use rand::{seq::SliceRandom, Rng};
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Difficulty, MatchResult, Opponent, OpponentType},
};

pub const AI_OPPONENT_NAMES: [&str; 10] = [
    "QuizBot",
    "BrainiacAI",
    "SmartAlec",
    "IntelliQuiz",
    "ThinkTank",
    "MindMaster",
    "EinsteinAI",
    "OmniBot",
    "ScholarBot",
    "KnowledgeKeeper",
];

/// Pairs a player with a simulated AI opponent.
pub struct Matchmaker {
    delay: Duration,
}

impl Matchmaker {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn find_opponent(
        &self,
        opponent_type: OpponentType,
        difficulty: Difficulty,
    ) -> AppResult<MatchResult> {
        if opponent_type != OpponentType::Ai {
            return Err(AppError::ValidationError(
                "Only AI opponents are available".to_string(),
            ));
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let opponent = create_ai_opponent(difficulty);
        log::debug!(
            "Matched {} opponent {} (skill {})",
            difficulty,
            opponent.name,
            opponent.skill_level
        );

        Ok(MatchResult {
            opponent,
            match_id: Uuid::new_v4(),
        })
    }
}

pub fn create_ai_opponent(difficulty: Difficulty) -> Opponent {
    let mut rng = rand::thread_rng();
    let skill_level = rng.gen_range(difficulty.skill_band());
    let name = AI_OPPONENT_NAMES
        .choose(&mut rng)
        .copied()
        .unwrap_or(AI_OPPONENT_NAMES[0]);

    Opponent::ai(name, skill_level)
}
