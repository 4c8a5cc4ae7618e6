use std::sync::mpsc::Sender;

use eframe::egui;

use crate::engine::protocol::EngineCommand;
use crate::model::game_state::GameStateSnapshot;
use crate::ui::app::UiState;
use crate::ui::main_menu::{language_toggle_label, mute_label};
use crate::ui::strings;

pub fn draw(
    ctx: &egui::Context,
    ui_state: &mut UiState,
    snapshot: &GameStateSnapshot,
    cmd_tx: &Sender<EngineCommand>,
) {
    let text = strings::for_language(snapshot.language);

    egui::SidePanel::right("stats")
        .resizable(false)
        .default_width(210.0)
        .show(ctx, |ui| {
            ui.add_space(10.0);

            if let Some(phase) = snapshot.phase {
                ui.label(
                    egui::RichText::new(format!(
                        "{}: {}",
                        text.phase_label,
                        phase.label(snapshot.language)
                    ))
                    .strong(),
                );
            }
            ui.label(format!(
                "{} {} / {}",
                text.dilemma_label,
                snapshot.position + 1,
                snapshot.catalog_len
            ));

            ui.separator();

            ui.label(format!(
                "✔ {}: {}",
                text.correct_label, snapshot.stats.correct_count
            ));
            ui.label(format!(
                "❌ {}: {}",
                text.incorrect_label, snapshot.stats.incorrect_count
            ));

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button(language_toggle_label(snapshot.language)).clicked() {
                    ui_state.click();
                    let _ = cmd_tx.send(EngineCommand::SetLanguage(snapshot.language.toggled()));
                }
                if ui.button(mute_label(snapshot.muted)).clicked() {
                    let _ = cmd_tx.send(EngineCommand::ToggleMute);
                }
            });

            if ui.button(text.main_menu).clicked() {
                ui_state.click();
                let _ = cmd_tx.send(EngineCommand::GoToMainMenu);
            }

            if let Some(track) = ui_state.music.now_playing() {
                ui.separator();
                ui.label(egui::RichText::new(format!("♪ {track}")).weak().small());
            }
        });
}
