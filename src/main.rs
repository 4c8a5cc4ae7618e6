mod audio;
mod engine;
mod model;
mod ui;

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use crate::engine::save_io::SaveSlot;
use crate::model::dilemma::DilemmaCatalog;
use crate::model::phase::PhaseSchedule;
use crate::ui::app::WellOfPowerApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    // An optional path argument replaces the built-in catalog.
    let catalog = match env::args().nth(1).map(PathBuf::from) {
        Some(path) => DilemmaCatalog::from_path(&path),
        None => DilemmaCatalog::builtin(),
    };
    let catalog = match catalog {
        Ok(catalog) => Arc::new(catalog),
        Err(err) => {
            eprintln!("Failed to load dilemma catalog: {err:#}");
            std::process::exit(1);
        }
    };
    tracing::info!("loaded {} dilemmas", catalog.len());

    let schedule = PhaseSchedule::even_split(catalog.len());
    let slot = SaveSlot::at_default_location();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1000.0, 700.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Well of Power",
        options,
        Box::new(move |_cc| Ok(Box::new(WellOfPowerApp::new(catalog, schedule, slot)))),
    )
}
