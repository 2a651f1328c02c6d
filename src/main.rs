mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::{anyhow, Context, Result};
use app::SpaceXDashApp;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = DashboardConfig::from_env();

    // The dashboard has nothing to show without data, so a load failure ends startup.
    let table = data::loader::load(&config.source).map_err(|e| {
        log::error!("Failed to load launch records: {e}");
        e
    })?;
    if table.is_empty() {
        log::warn!("Dataset at {} contains no launches", config.source);
    }
    let state = AppState::new(config, table);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(SpaceXDashApp::new(state)))),
    )
    .map_err(|e| anyhow!("{e}"))
    .context("running dashboard window")
}
