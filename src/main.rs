use eframe::egui;
use log::{error, info};

mod ui;

use ui::app_state::FitnessTrackerApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Fitness Tracker egui application");

    // Portrait window sized for the single-column goal layout
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([430.0, 780.0])
            .with_min_inner_size([360.0, 640.0])
            .with_title("Fitness Goal Tracker")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Fitness Goal Tracker",
        options,
        Box::new(|cc| {
            // Color preferences are restored from here on startup
            if cc.storage.is_some() {
                info!("Persistence storage available");
            }

            match FitnessTrackerApp::new(cc) {
                Ok(app) => {
                    info!("Successfully initialized Fitness Tracker app");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {}", e);
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}
