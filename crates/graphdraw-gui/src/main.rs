#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe::egui;

mod app;
mod components;
mod settings;
mod theme;

use app::GraphDrawApp;

fn main() -> eframe::Result<()> {
    // Log to stdout.
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_title("Graph Drawing"),
        ..Default::default()
    };

    eframe::run_native(
        "Graph Drawing",
        options,
        Box::new(|cc| Ok(Box::new(GraphDrawApp::new(cc)))),
    )
}
