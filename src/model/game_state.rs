use serde::{Deserialize, Serialize};

use crate::model::dilemma::Language;
use crate::model::phase::Phase;

/// Which top-level screen the game is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Menu,
    Playing,
    Ended,
}

/// Cumulative answer tally for the current run, mutated only when an
/// option is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub correct_count: u32,
    pub incorrect_count: u32,
}

impl RunStats {
    pub fn record(&mut self, correct: bool) {
        if correct {
            self.correct_count += 1;
        } else {
            self.incorrect_count += 1;
        }
    }

    /// How many dilemmas have been answered so far.
    pub fn answered(&self) -> u32 {
        self.correct_count + self.incorrect_count
    }
}

/// A full snapshot of the game state sent to the front end after every
/// applied command. This is READ-ONLY outside the engine: presentation
/// and audio react to it and route all mutation through commands.
#[derive(Debug, Clone)]
pub struct GameStateSnapshot {
    pub screen: Screen,
    /// Zero-based index into the dilemma catalog.
    pub position: usize,
    pub catalog_len: usize,
    /// Derived from position while playing, never stored.
    pub phase: Option<Phase>,
    /// Index of the option answered on the current dilemma, if any.
    pub selected_option: Option<usize>,
    pub awaiting_continue: bool,
    pub language: Language,
    pub muted: bool,
    pub stats: RunStats,
    /// Whether a resumable save exists, so the menu can show "continue".
    pub has_save: bool,
}
