use std::sync::mpsc::Sender;

use eframe::egui;

use crate::engine::protocol::EngineCommand;
use crate::model::game_state::GameStateSnapshot;
use crate::ui::app::UiState;
use crate::ui::strings;

pub fn draw(
    ctx: &egui::Context,
    ui_state: &mut UiState,
    snapshot: &GameStateSnapshot,
    cmd_tx: &Sender<EngineCommand>,
) {
    let text = strings::for_language(snapshot.language);

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(90.0);
            ui.label(egui::RichText::new(text.results_title).size(34.0).strong());
            ui.add_space(24.0);

            ui.label(
                egui::RichText::new(format!(
                    "✔ {}: {} / {}",
                    text.correct_label, snapshot.stats.correct_count, snapshot.catalog_len
                ))
                .size(20.0)
                .color(egui::Color32::from_rgb(110, 200, 110)),
            );
            ui.label(
                egui::RichText::new(format!(
                    "❌ {}: {}",
                    text.incorrect_label, snapshot.stats.incorrect_count
                ))
                .size(20.0),
            );

            ui.add_space(36.0);
            let button = |label: &str| {
                egui::Button::new(egui::RichText::new(label).size(18.0))
                    .min_size(egui::vec2(260.0, 42.0))
            };

            if ui.add(button(text.play_again)).clicked() {
                ui_state.click();
                let _ = cmd_tx.send(EngineCommand::StartNewGame);
            }
            ui.add_space(8.0);
            if ui.add(button(text.main_menu)).clicked() {
                ui_state.click();
                let _ = cmd_tx.send(EngineCommand::GoToMainMenu);
            }
        });
    });
}
