mod app;
mod charts;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::{Context, bail};
use app::Co2DashApp;
use eframe::egui;

/// Source table shipped next to the binary.
const DATA_FILE: &str = "CO2_emission_by_countries.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // A load failure here is fatal: the dashboard never serves a partial
    // dataset. Runtime reloads via File → Open degrade gracefully instead.
    let dataset =
        data::loader::load(Path::new(DATA_FILE)).with_context(|| format!("loading '{DATA_FILE}'"))?;
    log::info!(
        "Loaded {} records for {} countries",
        dataset.len(),
        dataset.countries.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "Global CO2 Emissions",
        options,
        Box::new(move |_cc| Ok(Box::new(Co2DashApp::new(dataset)))),
    ) {
        bail!("eframe error: {e}");
    }
    Ok(())
}
