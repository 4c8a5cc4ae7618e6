use serde::{Deserialize, Serialize};

use crate::model::dilemma::Language;
use crate::model::game_state::RunStats;
use crate::model::internal_game_state::InternalGameState;

pub const SAVE_VERSION: u32 = 1;

/// The single persisted save slot: one resumable run per installation.
/// Selection state is deliberately not persisted: a continued game
/// always resumes at the start of the next unanswered dilemma, never
/// mid-answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub version: u32,
    pub position: usize,
    pub stats: RunStats,
    pub language: Language,
    pub muted: bool,
}

impl SaveRecord {
    pub fn from_state(state: &InternalGameState) -> Self {
        Self {
            version: SAVE_VERSION,
            position: state.position,
            stats: state.stats,
            language: state.language,
            muted: state.muted,
        }
    }

    /// A record whose tally disagrees with its position was not produced
    /// by this game and is treated as corrupt.
    pub fn is_consistent(&self) -> bool {
        self.stats.answered() as usize == self.position
    }
}
