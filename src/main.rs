mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::SportsCarHubApp;
use clap::Parser;
use config::{CatalogConfig, Cli};
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = CatalogConfig::try_from(Cli::parse())?;
    log::debug!("Using {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        ui::panels::APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(SportsCarHubApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("running the catalog window: {e}"))
}
