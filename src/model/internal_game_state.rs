use crate::model::dilemma::Language;
use crate::model::game_state::{RunStats, Screen};
use crate::model::save::SaveRecord;

/// Authoritative game state. Exclusively owned by the engine; everything
/// outside it only ever sees `GameStateSnapshot` projections.
#[derive(Debug)]
pub struct InternalGameState {
    pub screen: Screen,
    /// Zero-based index into the dilemma catalog; the single source of
    /// truth for progress. Advances only after an answer was recorded.
    pub position: usize,
    pub selected_option: Option<usize>,
    /// True between answering a dilemma and dismissing its feedback.
    pub awaiting_continue: bool,
    pub language: Language,
    pub muted: bool,
    pub stats: RunStats,
}

impl Default for InternalGameState {
    fn default() -> Self {
        Self {
            screen: Screen::Menu,
            position: 0,
            selected_option: None,
            awaiting_continue: false,
            language: Language::Es,
            muted: false,
            stats: RunStats::default(),
        }
    }
}

impl InternalGameState {
    /// Back to a clean slate. Language and mute are preferences, not
    /// progress, and survive.
    pub fn reset_progress(&mut self) {
        self.position = 0;
        self.selected_option = None;
        self.awaiting_continue = false;
        self.stats = RunStats::default();
    }

    /// Restore a saved run. Selection state is never persisted, so a
    /// continued game resumes at the start of the next unanswered
    /// dilemma. A record pointing past the catalog end (the catalog
    /// shrank between versions) clamps to the end screen instead of
    /// indexing out of bounds.
    pub fn resume(&mut self, record: SaveRecord, catalog_len: usize) {
        self.position = record.position.min(catalog_len);
        self.stats = record.stats;
        self.language = record.language;
        self.muted = record.muted;
        self.selected_option = None;
        self.awaiting_continue = false;
        self.screen = if self.position >= catalog_len {
            Screen::Ended
        } else {
            Screen::Playing
        };
    }
}
