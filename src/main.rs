mod app;
mod upload;
mod utils;

use app::DropzoneApp;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([720.0, 620.0])
            .with_min_inner_size([480.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "File Upload Demo",
        options,
        Box::new(|cc| Box::new(DropzoneApp::new(cc))),
    )
}
