#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use article_layout::{Config, LayoutApp};

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([800.0, 500.0])
            .with_title("Article Layout Editor"),
        ..Default::default()
    };

    eframe::run_native(
        "article_layout",
        native_options,
        Box::new(|cc| Ok(Box::new(LayoutApp::new(cc, config)))),
    )
}
