mod app;
mod cli;
mod config;
mod map;
mod status;
mod theme;
mod ui;

use clap::Parser;
use eframe::egui;
use log::{info, warn};
use mimalloc::MiMalloc;

use app::PigeonApp;
use cli::Cli;
use config::AppConfig;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let saved = AppConfig::load_or_default();
    let mut session = saved.clone();
    cli.apply_to(&mut session);

    match AppConfig::get_config_path() {
        Ok(path) => info!("Preferences file: {}", path.display()),
        Err(err) => warn!("Could not resolve preferences path: {}", err),
    }

    info!("Starting Pigeon Desktop...");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([session.window_width, session.window_height])
            .with_min_inner_size([360.0, 640.0])
            .with_title("Pigeon Desktop"),
        ..Default::default()
    };

    eframe::run_native(
        "Pigeon Desktop",
        options,
        Box::new(move |cc| Ok(Box::new(PigeonApp::new(cc, saved, &session)))),
    )
}
