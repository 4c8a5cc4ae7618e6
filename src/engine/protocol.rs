use crate::model::dilemma::Language;
use crate::model::game_state::GameStateSnapshot;

/// Commands the front end may send. Every mutation of game state goes
/// through here; the UI holds no mutable reference to the state itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    StartNewGame,
    ContinueGame,
    SelectOption {
        /// Guards against answering a dilemma that is no longer current.
        dilemma_id: u32,
        option_index: usize,
    },
    Advance,
    SetLanguage(Language),
    ToggleMute,
    GoToMainMenu,
}

#[derive(Debug, Clone)]
pub enum EngineResponse {
    /// Sent after every applied command (and once at startup).
    StateChanged(GameStateSnapshot),
    /// Continue was requested but no usable save exists.
    ContinueUnavailable,
}
