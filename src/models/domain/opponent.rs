use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MIN_SKILL_LEVEL: u8 = 1;
pub const MAX_SKILL_LEVEL: u8 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    Ai,
    Human,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Opponent {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: OpponentKind,
    // Only biases the opponent's answer probability.
    pub skill_level: u8,
}

impl Opponent {
    pub fn ai(name: impl Into<String>, skill_level: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind: OpponentKind::Ai,
            skill_level: skill_level.clamp(MIN_SKILL_LEVEL, MAX_SKILL_LEVEL),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub opponent: Opponent,
    pub match_id: Uuid,
}
