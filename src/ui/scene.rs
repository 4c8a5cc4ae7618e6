use std::sync::mpsc::Sender;

use eframe::egui;

use crate::engine::protocol::EngineCommand;
use crate::model::dilemma::{Dilemma, DilemmaCatalog};
use crate::model::game_state::GameStateSnapshot;
use crate::ui::app::UiState;
use crate::ui::strings::{self, UiStrings};

pub fn draw(
    ctx: &egui::Context,
    ui_state: &mut UiState,
    snapshot: &GameStateSnapshot,
    catalog: &DilemmaCatalog,
    cmd_tx: &Sender<EngineCommand>,
) {
    let text = strings::for_language(snapshot.language);

    // The engine flips to the end screen before the position can run
    // past the catalog; render nothing rather than index out of bounds.
    let Some(dilemma) = catalog.get(snapshot.position) else {
        return;
    };

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);

                if let Some(name) = dilemma.character_name() {
                    ui.label(egui::RichText::new(format!("— {name} —")).weak());
                    ui.add_space(6.0);
                }

                ui.label(
                    egui::RichText::new(dilemma.title.get(snapshot.language))
                        .size(28.0)
                        .strong(),
                );
                ui.add_space(14.0);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(dilemma.situation.get(snapshot.language)).size(16.0),
                    )
                    .wrap(),
                );
                ui.add_space(24.0);

                if snapshot.awaiting_continue {
                    draw_feedback(ui, ui_state, snapshot, dilemma, text, cmd_tx);
                } else {
                    draw_options(ui, ui_state, snapshot, dilemma, cmd_tx);
                }

                ui.add_space(24.0);
            });
        });
    });
}

fn draw_options(
    ui: &mut egui::Ui,
    ui_state: &mut UiState,
    snapshot: &GameStateSnapshot,
    dilemma: &Dilemma,
    cmd_tx: &Sender<EngineCommand>,
) {
    let width = ui.available_width().min(640.0);

    for (index, option) in dilemma.options.iter().enumerate() {
        let letter = (b'A' + index as u8) as char;
        let label = format!("{letter}: {}", option.text.get(snapshot.language));

        let clicked = ui
            .add_sized([width, 40.0], egui::Button::new(label).wrap())
            .clicked();
        if clicked {
            ui_state.click();
            if let Some(cue) = ui_state.music.answer_cue(option.is_correct) {
                tracing::debug!("cue: {cue}");
            }
            let _ = cmd_tx.send(EngineCommand::SelectOption {
                dilemma_id: dilemma.id,
                option_index: index,
            });
        }
        ui.add_space(6.0);
    }
}

fn draw_feedback(
    ui: &mut egui::Ui,
    ui_state: &mut UiState,
    snapshot: &GameStateSnapshot,
    dilemma: &Dilemma,
    text: &UiStrings,
    cmd_tx: &Sender<EngineCommand>,
) {
    let Some(index) = snapshot.selected_option else {
        return;
    };
    let Some(option) = dilemma.options.get(index) else {
        return;
    };

    ui.group(|ui| {
        ui.set_width(ui.available_width().min(640.0));
        ui.add(
            egui::Label::new(
                egui::RichText::new(option.narrative_response.get(snapshot.language)).size(16.0),
            )
            .wrap(),
        );
        if option.is_correct {
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(text.correct_answer)
                    .strong()
                    .color(egui::Color32::from_rgb(110, 200, 110)),
            );
        }
    });

    ui.add_space(14.0);
    let continue_button =
        egui::Button::new(egui::RichText::new(text.continue_button).size(18.0))
            .min_size(egui::vec2(260.0, 42.0));
    if ui.add(continue_button).clicked() {
        ui_state.click();
        let _ = cmd_tx.send(EngineCommand::Advance);
    }
}
