use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;

use crate::engine::apply_command::apply_command;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::save_io::SaveSlot;
use crate::model::command_outcome::CommandOutcome;
use crate::model::dilemma::DilemmaCatalog;
use crate::model::game_state::{GameStateSnapshot, Screen};
use crate::model::internal_game_state::InternalGameState;
use crate::model::phase::PhaseSchedule;
use crate::model::save::SaveRecord;

/// Owns the game state and processes one command at a time. The front
/// end talks to it exclusively through the two channels.
pub struct Engine {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    catalog: Arc<DilemmaCatalog>,
    schedule: PhaseSchedule,
    slot: SaveSlot,
    state: InternalGameState,
}

impl Engine {
    pub fn new(
        catalog: Arc<DilemmaCatalog>,
        schedule: PhaseSchedule,
        slot: SaveSlot,
        rx: Receiver<EngineCommand>,
        tx: Sender<EngineResponse>,
    ) -> Self {
        let mut state = InternalGameState::default();
        // Preferences persist across launches even before a run resumes,
        // so the menu comes up in the player's language.
        if let Some(record) = slot.load() {
            state.language = record.language;
            state.muted = record.muted;
        }

        Self {
            rx,
            tx,
            catalog,
            schedule,
            slot,
            state,
        }
    }

    pub fn run(&mut self) {
        // Let the front end render preferences and the continue
        // affordance before the first command arrives.
        self.push_state();

        while let Ok(command) = self.rx.recv() {
            match command {
                EngineCommand::ContinueGame => match self.slot.load() {
                    Some(record) => {
                        self.state.resume(record, self.catalog.len());
                        self.push_state();
                    }
                    None => {
                        let _ = self.tx.send(EngineResponse::ContinueUnavailable);
                    }
                },

                command => match apply_command(&mut self.state, &self.catalog, &command) {
                    CommandOutcome::Applied => {
                        self.persist_after(&command);
                        self.push_state();
                    }
                    CommandOutcome::Ignored { reason } => {
                        tracing::debug!("ignored {command:?}: {reason}");
                    }
                },
            }
        }
    }

    /// Save policy: a full save after starting a run and after every
    /// advance (a crash loses at most the in-progress dilemma), and a
    /// preference merge after language or mute changes.
    fn persist_after(&self, command: &EngineCommand) {
        match command {
            EngineCommand::StartNewGame | EngineCommand::Advance => {
                if let Err(err) = self.slot.save(&SaveRecord::from_state(&self.state)) {
                    tracing::warn!("failed to persist save: {err:#}");
                }
            }
            EngineCommand::SetLanguage(_) | EngineCommand::ToggleMute => {
                self.persist_preferences();
            }
            _ => {}
        }
    }

    /// Preference changes merge into the existing record so a toggle on
    /// the menu never clobbers a saved run's progress. With no record
    /// and no run in progress there is nothing to update yet.
    fn persist_preferences(&self) {
        let record = match self.slot.load() {
            Some(mut record) => {
                record.language = self.state.language;
                record.muted = self.state.muted;
                record
            }
            None if self.state.screen == Screen::Playing => SaveRecord::from_state(&self.state),
            None => return,
        };
        if let Err(err) = self.slot.save(&record) {
            tracing::warn!("failed to persist preferences: {err:#}");
        }
    }

    fn push_state(&self) {
        let _ = self.tx.send(EngineResponse::StateChanged(self.snapshot()));
    }

    fn snapshot(&self) -> GameStateSnapshot {
        let phase = match self.state.screen {
            Screen::Playing => Some(self.schedule.resolve(self.state.position)),
            Screen::Menu | Screen::Ended => None,
        };

        GameStateSnapshot {
            screen: self.state.screen,
            position: self.state.position,
            catalog_len: self.catalog.len(),
            phase,
            selected_option: self.state.selected_option,
            awaiting_continue: self.state.awaiting_continue,
            language: self.state.language,
            muted: self.state.muted,
            stats: self.state.stats,
            has_save: self.slot.exists(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    use crate::model::dilemma::Language;
    use crate::model::phase::Phase;

    fn catalog() -> Arc<DilemmaCatalog> {
        Arc::new(
            DilemmaCatalog::from_json_str(
                r#"{
                    "schema_version": 1,
                    "dilemmas": [
                        { "id": 1, "title": "one", "situation": "first",
                          "options": [
                            { "text": "right", "is_correct": true, "narrative_response": "good" },
                            { "text": "wrong", "is_correct": false, "narrative_response": "bad" }
                          ] },
                        { "id": 2, "title": "two", "situation": "second",
                          "options": [
                            { "text": "wrong", "is_correct": false, "narrative_response": "bad" },
                            { "text": "right", "is_correct": true, "narrative_response": "good" }
                          ] },
                        { "id": 3, "title": "three", "situation": "third",
                          "options": [
                            { "text": "right", "is_correct": true, "narrative_response": "good" },
                            { "text": "wrong", "is_correct": false, "narrative_response": "bad" }
                          ] }
                    ]
                }"#,
            )
            .unwrap(),
        )
    }

    fn scenario_schedule() -> PhaseSchedule {
        // Bands [0,1) = Intern, [1,3) = Junior.
        PhaseSchedule::from_starts(vec![(0, Phase::Intern), (1, Phase::Junior)]).unwrap()
    }

    fn slot_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("well-of-power-engine-test-{}", std::process::id()))
            .join(name)
            .join("save.json")
    }

    fn spawn(name: &str) -> (Sender<EngineCommand>, Receiver<EngineResponse>) {
        spawn_at(slot_path(name))
    }

    fn spawn_at(
        path: std::path::PathBuf,
    ) -> (Sender<EngineCommand>, Receiver<EngineResponse>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let catalog = catalog();
        let schedule = scenario_schedule();
        std::thread::spawn(move || {
            let mut engine = Engine::new(catalog, schedule, SaveSlot::at(path), cmd_rx, resp_tx);
            engine.run();
        });
        (cmd_tx, resp_rx)
    }

    fn next_state(rx: &Receiver<EngineResponse>) -> GameStateSnapshot {
        match rx.recv_timeout(Duration::from_secs(5)) {
            Ok(EngineResponse::StateChanged(snapshot)) => snapshot,
            Ok(other) => panic!("expected a state change, got {other:?}"),
            Err(err) => panic!("no response from engine: {err}"),
        }
    }

    #[test]
    fn scenario_run_promotes_by_position_and_ends() {
        let path = slot_path("scenario_run");
        let _ = std::fs::remove_file(&path);
        let (tx, rx) = spawn_at(path);

        let initial = next_state(&rx);
        assert_eq!(initial.screen, Screen::Menu);
        assert!(!initial.has_save);

        tx.send(EngineCommand::StartNewGame).unwrap();
        let snapshot = next_state(&rx);
        assert_eq!(snapshot.screen, Screen::Playing);
        assert_eq!(snapshot.position, 0);
        assert_eq!(snapshot.phase, Some(Phase::Intern));

        // Correct answer on dilemma 0.
        tx.send(EngineCommand::SelectOption {
            dilemma_id: 1,
            option_index: 0,
        })
        .unwrap();
        let snapshot = next_state(&rx);
        assert_eq!(snapshot.stats.correct_count, 1);
        assert!(snapshot.awaiting_continue);

        tx.send(EngineCommand::Advance).unwrap();
        let snapshot = next_state(&rx);
        assert_eq!(snapshot.position, 1);
        assert_eq!(snapshot.phase, Some(Phase::Junior));
        assert!(snapshot.has_save);

        // Incorrect answer on dilemma 1.
        tx.send(EngineCommand::SelectOption {
            dilemma_id: 2,
            option_index: 0,
        })
        .unwrap();
        let snapshot = next_state(&rx);
        assert_eq!(snapshot.stats.correct_count, 1);
        assert_eq!(snapshot.stats.incorrect_count, 1);

        tx.send(EngineCommand::Advance).unwrap();
        let snapshot = next_state(&rx);
        assert_eq!(snapshot.position, 2);
        assert_eq!(snapshot.phase, Some(Phase::Junior));

        tx.send(EngineCommand::SelectOption {
            dilemma_id: 3,
            option_index: 0,
        })
        .unwrap();
        next_state(&rx);
        tx.send(EngineCommand::Advance).unwrap();
        let snapshot = next_state(&rx);
        assert_eq!(snapshot.position, 3);
        assert_eq!(snapshot.screen, Screen::Ended);
        assert_eq!(snapshot.phase, None);
        assert_eq!(snapshot.stats.correct_count, 2);
    }

    #[test]
    fn continue_without_a_save_reports_unavailable() {
        let (tx, rx) = spawn("no_save");
        next_state(&rx);

        tx.send(EngineCommand::ContinueGame).unwrap();
        match rx.recv_timeout(Duration::from_secs(5)) {
            Ok(EngineResponse::ContinueUnavailable) => {}
            other => panic!("expected ContinueUnavailable, got {other:?}"),
        }

        // State is unchanged: still a clean menu.
        tx.send(EngineCommand::ToggleMute).unwrap();
        let snapshot = next_state(&rx);
        assert_eq!(snapshot.screen, Screen::Menu);
        assert_eq!(snapshot.position, 0);
    }

    #[test]
    fn continue_resumes_at_the_next_unanswered_dilemma() {
        let path = slot_path("resume");
        let _ = std::fs::remove_file(&path);

        let (tx, rx) = spawn_at(path.clone());
        next_state(&rx);
        tx.send(EngineCommand::StartNewGame).unwrap();
        next_state(&rx);
        tx.send(EngineCommand::SelectOption {
            dilemma_id: 1,
            option_index: 0,
        })
        .unwrap();
        next_state(&rx);
        tx.send(EngineCommand::Advance).unwrap();
        next_state(&rx);
        // Answer dilemma 1 but quit before advancing: the answer is
        // committed, the position is not.
        tx.send(EngineCommand::SelectOption {
            dilemma_id: 2,
            option_index: 1,
        })
        .unwrap();
        next_state(&rx);
        drop(tx);

        let (tx, rx) = spawn_at(path);
        let initial = next_state(&rx);
        assert!(initial.has_save);

        tx.send(EngineCommand::ContinueGame).unwrap();
        let snapshot = next_state(&rx);
        assert_eq!(snapshot.screen, Screen::Playing);
        // The save was written at the last advance, so the resumed run
        // re-presents dilemma 1 unanswered.
        assert_eq!(snapshot.position, 1);
        assert_eq!(snapshot.stats.correct_count, 1);
        assert_eq!(snapshot.stats.incorrect_count, 0);
        assert!(!snapshot.awaiting_continue);
        assert_eq!(snapshot.selected_option, None);
    }

    #[test]
    fn menu_preference_toggles_do_not_invent_a_run() {
        let path = slot_path("menu_prefs");
        let _ = std::fs::remove_file(&path);
        let (tx, rx) = spawn_at(path);
        next_state(&rx);

        tx.send(EngineCommand::ToggleMute).unwrap();
        let snapshot = next_state(&rx);
        assert!(snapshot.muted);
        assert!(!snapshot.has_save);

        tx.send(EngineCommand::SetLanguage(Language::En)).unwrap();
        let snapshot = next_state(&rx);
        assert_eq!(snapshot.language, Language::En);
        assert!(!snapshot.has_save);
    }

    #[test]
    fn preferences_are_restored_on_the_next_launch() {
        let path = slot_path("pref_restore");
        let _ = std::fs::remove_file(&path);

        let (tx, rx) = spawn_at(path.clone());
        next_state(&rx);
        tx.send(EngineCommand::StartNewGame).unwrap();
        next_state(&rx);
        tx.send(EngineCommand::SetLanguage(Language::En)).unwrap();
        next_state(&rx);
        tx.send(EngineCommand::ToggleMute).unwrap();
        next_state(&rx);
        drop(tx);

        let (_tx, rx) = spawn_at(path);
        let initial = next_state(&rx);
        assert_eq!(initial.screen, Screen::Menu);
        assert_eq!(initial.language, Language::En);
        assert!(initial.muted);
    }

    #[test]
    fn midrun_preference_change_keeps_saved_progress() {
        let path = slot_path("pref_merge");
        let _ = std::fs::remove_file(&path);

        let (tx, rx) = spawn_at(path.clone());
        next_state(&rx);
        tx.send(EngineCommand::StartNewGame).unwrap();
        next_state(&rx);
        tx.send(EngineCommand::SelectOption {
            dilemma_id: 1,
            option_index: 0,
        })
        .unwrap();
        next_state(&rx);
        tx.send(EngineCommand::Advance).unwrap();
        next_state(&rx);
        tx.send(EngineCommand::SetLanguage(Language::En)).unwrap();
        next_state(&rx);
        drop(tx);

        let (tx, rx) = spawn_at(path);
        next_state(&rx);
        tx.send(EngineCommand::ContinueGame).unwrap();
        let snapshot = next_state(&rx);
        assert_eq!(snapshot.position, 1);
        assert_eq!(snapshot.language, Language::En);
    }
}
