//! Smart Calculator - a button calculator
//!
//! Expressions are built from button presses and evaluated with `*` and `/`
//! taking precedence over `+` and `-`.

mod app;
mod theme;

use app::SmartCalcApp;
use calccore::CalcConfig;
use eframe::NativeOptions;
use theme::CalcTheme;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_env("SMARTCALC_LOG")
        .unwrap_or_else(|_| EnvFilter::new("smartcalc=info,calccore=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> eframe::Result<()> {
    init_logging();

    let config = CalcConfig::load();
    tracing::info!(path = %CalcConfig::config_path().display(), "starting");

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("Smart Calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "Smart Calculator",
        options,
        Box::new(move |cc| {
            CalcTheme::from_config(&config).apply(&cc.egui_ctx);
            Box::new(SmartCalcApp::new(cc, &config))
        }),
    )
}
