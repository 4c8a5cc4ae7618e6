pub mod command_outcome;
pub mod dilemma;
pub mod game_state;
pub mod internal_game_state;
pub mod phase;
pub mod save;
