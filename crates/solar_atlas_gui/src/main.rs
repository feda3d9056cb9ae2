use anyhow::{Context, Result};

mod app;
mod detail;
mod gallery;
mod scene;
mod sphere;
mod theme;
mod util;

fn main() -> Result<()> {
    // keep the handle alive for the lifetime of the process
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")
        .context("Invalid log specification")?
        .log_to_stderr()
        .start()
        .context("Failed to start logger")?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Solar Atlas")
            .with_inner_size([1100.0, 760.0]),
        ..Default::default()
    };

    // eframe's error type is not Send + Sync, so it cannot ride on anyhow
    if let Err(err) = eframe::run_native(
        "Solar Atlas",
        native_options,
        Box::new(|cc| Ok(Box::new(app::AtlasApp::new(cc)))),
    ) {
        eprintln!("Failed to start the GUI: {err}");
    }

    Ok(())
}
