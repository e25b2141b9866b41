//! # App Implementation
//!
//! The `eframe::App` implementation for the fitness tracker: per-frame
//! screen dispatch on a settings-driven background fill, plus the save hook
//! that flushes color preferences to storage.

use eframe::egui;

use crate::ui::app_state::{FitnessTrackerApp, Screen};
use crate::ui::state::ColorKey;

impl eframe::App for FitnessTrackerApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // Background color follows the persisted preference on every screen
        let background = self.settings.color(ColorKey::Background);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(background)
                    .inner_margin(egui::Margin::same(16.0)),
            )
            .show(ctx, |ui| match self.screen {
                Screen::OnboardingWelcome => self.render_onboarding_welcome(ui),
                Screen::OnboardingTour => self.render_onboarding_tour(ui),
                Screen::Dashboard => self.render_dashboard(ui),
                Screen::Settings => self.render_settings(ui),
            });

        // A selection made this frame is durable before the next one
        if let Some(storage) = frame.storage_mut() {
            self.settings.flush_if_dirty(storage);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.settings.save(storage);
    }

    // Four small strings; flush them well before the 30s default.
    fn auto_save_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(5)
    }
}
