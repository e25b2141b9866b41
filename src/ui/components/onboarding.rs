//! # Onboarding Module
//!
//! The two-screen welcome carousel shown on launch: a welcome screen listing
//! the three daily goals, then a short feature tour. Progression is linear
//! with a single action per screen; there is no back navigation.

use eframe::egui;

use crate::ui::app_state::FitnessTrackerApp;
use crate::ui::components::progress_ring::{ProgressRing, RingConfig};
use crate::ui::components::styling::capsule_button;
use crate::ui::components::theme;
use crate::ui::state::ColorKey;

impl FitnessTrackerApp {
    /// Render the first onboarding screen: the three goal categories.
    pub fn render_onboarding_welcome(&mut self, ui: &mut egui::Ui) {
        ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
            ui.add_space(40.0);

            ui.label(
                egui::RichText::new("Set Your Daily...")
                    .font(egui::FontId::new(36.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(theme::ACCENT),
            );
            ui.add_space(20.0);

            goal_category(ui, "🔥", self.settings.color(ColorKey::Calorie), "Calorie Goal");
            goal_category(ui, "👟", self.settings.color(ColorKey::Step), "Step Goal");
            goal_category(ui, "🚶", self.settings.color(ColorKey::Exercise), "Exercise Goal");

            ui.add_space(40.0);
            if capsule_button(ui, "CONTINUE").clicked() {
                self.advance_onboarding();
            }
        });
    }

    /// Render the second onboarding screen: a short tour of the dashboard
    /// features, ending in the action that opens the dashboard.
    pub fn render_onboarding_tour(&mut self, ui: &mut egui::Ui) {
        ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
            ui.add_space(30.0);

            // A full ring around the calorie flame previews the dashboard
            let ring = ProgressRing::with_config(RingConfig {
                radius: 40.0,
                stroke_width: 8.0,
                glyph_size: 30.0,
            });
            ring.render(ui, 1.0, self.settings.color(ColorKey::Calorie), "🔥");
            tour_caption(ui, "Check your daily progress");

            ui.add_space(16.0);

            // Disabled demo slider previews the goal controls
            ui.scope(|ui| {
                ui.visuals_mut().selection.bg_fill = self.settings.color(ColorKey::Calorie);
                let mut demo = 0.5;
                ui.add_enabled(
                    false,
                    egui::Slider::new(&mut demo, 0.0..=1.0).show_value(false),
                );
            });
            tour_caption(ui, "Adjust your goals");

            ui.add_space(16.0);

            ui.label(
                egui::RichText::new("⚙")
                    .font(egui::FontId::new(64.0, egui::FontFamily::Proportional))
                    .color(theme::ACCENT),
            );
            tour_caption(ui, "Customize your experience");

            ui.add_space(30.0);
            if capsule_button(ui, "LET'S GO!").clicked() {
                self.go_to_dashboard();
            }
        });
    }
}

/// One goal category on the welcome screen: a big pictogram over its name.
fn goal_category(ui: &mut egui::Ui, glyph: &str, color: egui::Color32, name: &str) {
    ui.label(
        egui::RichText::new(glyph)
            .font(egui::FontId::new(64.0, egui::FontFamily::Proportional))
            .color(color),
    );
    ui.label(
        egui::RichText::new(name)
            .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
            .strong()
            .color(theme::ACCENT),
    );
    ui.add_space(18.0);
}

fn tour_caption(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
            .strong()
            .color(theme::ACCENT),
    );
}
