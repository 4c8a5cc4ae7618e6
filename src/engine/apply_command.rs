use crate::engine::protocol::EngineCommand;
use crate::model::command_outcome::CommandOutcome;
use crate::model::dilemma::DilemmaCatalog;
use crate::model::game_state::Screen;
use crate::model::internal_game_state::InternalGameState;

/// Apply one player command to the game state, returning the outcome.
/// Each command is atomic: it either fully applies or leaves the state
/// untouched.
pub fn apply_command(
    state: &mut InternalGameState,
    catalog: &DilemmaCatalog,
    command: &EngineCommand,
) -> CommandOutcome {
    match command {
        EngineCommand::StartNewGame => {
            state.reset_progress();
            state.screen = Screen::Playing;
            CommandOutcome::Applied
        }

        // Needs the save slot; the engine loop resolves it before this
        // dispatcher is reached.
        EngineCommand::ContinueGame => CommandOutcome::Ignored {
            reason: "continue is resolved against the save slot".to_string(),
        },

        EngineCommand::SelectOption {
            dilemma_id,
            option_index,
        } => {
            if state.screen != Screen::Playing {
                return CommandOutcome::Ignored {
                    reason: "no dilemma on screen".to_string(),
                };
            }
            // Selection is single-shot per dilemma: the answer was
            // already committed and the tally must not move again.
            if state.awaiting_continue {
                return CommandOutcome::Ignored {
                    reason: "answer already recorded for this dilemma".to_string(),
                };
            }
            let Some(dilemma) = catalog.get(state.position) else {
                return CommandOutcome::Ignored {
                    reason: format!("no dilemma at position {}", state.position),
                };
            };
            if dilemma.id != *dilemma_id {
                return CommandOutcome::Ignored {
                    reason: format!(
                        "option belongs to dilemma {}, current is {}",
                        dilemma_id, dilemma.id
                    ),
                };
            }
            let Some(option) = dilemma.options.get(*option_index) else {
                return CommandOutcome::Ignored {
                    reason: format!("dilemma {} has no option {}", dilemma.id, option_index),
                };
            };

            // The answer commits here, at selection time, not when the
            // feedback is dismissed.
            state.selected_option = Some(*option_index);
            state.awaiting_continue = true;
            state.stats.record(option.is_correct);
            CommandOutcome::Applied
        }

        EngineCommand::Advance => {
            if !state.awaiting_continue {
                return CommandOutcome::Ignored {
                    reason: "nothing to advance past".to_string(),
                };
            }
            state.position += 1;
            state.selected_option = None;
            state.awaiting_continue = false;
            if state.position >= catalog.len() {
                state.screen = Screen::Ended;
            }
            CommandOutcome::Applied
        }

        EngineCommand::SetLanguage(language) => {
            state.language = *language;
            CommandOutcome::Applied
        }

        EngineCommand::ToggleMute => {
            state.muted = !state.muted;
            CommandOutcome::Applied
        }

        EngineCommand::GoToMainMenu => {
            state.reset_progress();
            state.screen = Screen::Menu;
            CommandOutcome::Applied
        }
    }
}
