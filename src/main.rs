mod app;
mod color;
mod state;
mod ui;

use app::RustyTickerApp;
use eframe::egui;
use rusty_ticker::config::ViewerConfig;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let config = ViewerConfig::load();
    let today = chrono::Local::now().date_naive();
    let state = AppState::new(config, today);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty Ticker – Market Data Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(RustyTickerApp::new(state)))),
    )
}
