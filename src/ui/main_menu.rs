use std::sync::mpsc::Sender;

use eframe::egui;

use crate::engine::protocol::EngineCommand;
use crate::model::dilemma::Language;
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
            ui.add_space(70.0);
            ui.label(
                egui::RichText::new(text.title)
                    .size(42.0)
                    .strong()
                    .color(egui::Color32::from_rgb(235, 150, 60)),
            );
            ui.label(egui::RichText::new(text.tagline).italics().weak());
            ui.add_space(40.0);

            if ui.add(menu_button(text.new_game)).clicked() {
                ui_state.click();
                let _ = cmd_tx.send(EngineCommand::StartNewGame);
            }

            ui.add_space(8.0);
            if ui
                .add_enabled(snapshot.has_save, menu_button(text.continue_game))
                .clicked()
            {
                ui_state.click();
                let _ = cmd_tx.send(EngineCommand::ContinueGame);
            }
            if ui_state.continue_notice {
                ui.label(egui::RichText::new(text.no_save_notice).color(egui::Color32::LIGHT_RED));
            }

            ui.add_space(8.0);
            if ui.add(menu_button(text.credits)).clicked() {
                ui_state.click();
                ui_state.show_credits = true;
            }

            ui.add_space(28.0);
            ui.horizontal(|ui| {
                // Keep the toggles roughly under the buttons.
                ui.add_space(ui.available_width() / 2.0 - 60.0);

                if ui.button(language_toggle_label(snapshot.language)).clicked() {
                    ui_state.click();
                    let _ = cmd_tx.send(EngineCommand::SetLanguage(snapshot.language.toggled()));
                }
                if ui.button(mute_label(snapshot.muted)).clicked() {
                    let _ = cmd_tx.send(EngineCommand::ToggleMute);
                }
            });

            if let Some(track) = ui_state.music.now_playing() {
                ui.add_space(20.0);
                ui.label(
                    egui::RichText::new(format!("♪ {}: {track}", text.now_playing)).weak(),
                );
            }
        });
    });
}

fn menu_button(label: &str) -> egui::Button<'_> {
    egui::Button::new(egui::RichText::new(label).size(18.0)).min_size(egui::vec2(260.0, 42.0))
}

pub fn language_toggle_label(language: Language) -> &'static str {
    match language {
        Language::Es => "EN",
        Language::En => "ES",
    }
}

pub fn mute_label(muted: bool) -> &'static str {
    if muted {
        "🔇"
    } else {
        "🔊"
    }
}
