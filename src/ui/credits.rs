use eframe::egui;

use crate::model::game_state::GameStateSnapshot;
use crate::ui::app::UiState;
use crate::ui::strings;

pub fn draw(ctx: &egui::Context, ui_state: &mut UiState, snapshot: &GameStateSnapshot) {
    let text = strings::for_language(snapshot.language);

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(70.0);
            ui.label(egui::RichText::new(text.credits).size(34.0).strong());
            ui.add_space(20.0);

            for line in text.credits_body {
                ui.label(*line);
            }

            ui.add_space(28.0);
            if ui.button(text.back).clicked() {
                ui_state.click();
                ui_state.show_credits = false;
            }
        });
    });
}
