mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::RuleLensApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional CLI argument: directory holding the four rule tables.
    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "RuleLens – Association Rule Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(RuleLensApp::new(data_dir)))),
    )
}
