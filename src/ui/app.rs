use std::sync::mpsc;
use std::sync::Arc;

use eframe::egui;

use crate::audio::music::MusicManager;
use crate::engine::engine::Engine;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::save_io::SaveSlot;
use crate::model::dilemma::DilemmaCatalog;
use crate::model::game_state::{GameStateSnapshot, Screen};
use crate::model::phase::PhaseSchedule;
use crate::ui::{credits, end_screen, main_menu, scene, stats_panel};

/* =========================
   UI State
   ========================= */

pub struct UiState {
    pub snapshot: Option<GameStateSnapshot>,
    pub music: MusicManager,
    pub show_credits: bool,
    /// Transient "no saved game" notice on the menu.
    pub continue_notice: bool,
}

impl UiState {
    /// Fire the button-press cue through the music manager.
    pub fn click(&mut self) {
        if let Some(cue) = self.music.click_cue() {
            tracing::debug!("cue: {cue}");
        }
    }
}

/* =========================
   App
   ========================= */

pub struct WellOfPowerApp {
    ui: UiState,
    catalog: Arc<DilemmaCatalog>,

    cmd_tx: mpsc::Sender<EngineCommand>,
    resp_rx: mpsc::Receiver<EngineResponse>,
}

impl WellOfPowerApp {
    pub fn new(catalog: Arc<DilemmaCatalog>, schedule: PhaseSchedule, slot: SaveSlot) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        let engine_catalog = Arc::clone(&catalog);
        std::thread::spawn(move || {
            let mut engine = Engine::new(engine_catalog, schedule, slot, cmd_rx, resp_tx);
            engine.run();
        });

        Self {
            ui: UiState {
                snapshot: None,
                music: MusicManager::new(),
                show_credits: false,
                continue_notice: false,
            },
            catalog,
            cmd_tx,
            resp_rx,
        }
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for WellOfPowerApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        while let Ok(resp) = self.resp_rx.try_recv() {
            match resp {
                EngineResponse::StateChanged(snapshot) => {
                    if let Some(track) = self.ui.music.sync(&snapshot, &self.catalog) {
                        tracing::debug!("music: {track}");
                    }
                    self.ui.continue_notice = false;
                    self.ui.snapshot = Some(snapshot);
                }
                EngineResponse::ContinueUnavailable => {
                    self.ui.continue_notice = true;
                }
            }
        }

        // The engine pushes its first snapshot right after startup.
        let Some(snapshot) = self.ui.snapshot.clone() else {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
            });
            return;
        };

        if self.ui.show_credits {
            credits::draw(ctx, &mut self.ui, &snapshot);
            return;
        }

        match snapshot.screen {
            Screen::Menu => main_menu::draw(ctx, &mut self.ui, &snapshot, &self.cmd_tx),
            Screen::Playing => {
                stats_panel::draw(ctx, &mut self.ui, &snapshot, &self.cmd_tx);
                scene::draw(ctx, &mut self.ui, &snapshot, &self.catalog, &self.cmd_tx);
            }
            Screen::Ended => end_screen::draw(ctx, &mut self.ui, &snapshot, &self.cmd_tx),
        }
    }
}
