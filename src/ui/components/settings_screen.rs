//! # Settings Screen Module
//!
//! The settings page: four labelled color pickers, one per preference. The
//! background picker offers its own 4-color palette; the three metric
//! pickers share the 7-color metric palette. Every selection writes straight
//! back to the settings store.

use eframe::egui;

use crate::ui::app_state::FitnessTrackerApp;
use crate::ui::components::theme::{self, PaletteColor};
use crate::ui::state::ColorKey;

impl FitnessTrackerApp {
    /// Render the settings screen.
    pub fn render_settings(&mut self, ui: &mut egui::Ui) {
        // Back arrow returns to the dashboard
        let back = egui::Button::new(
            egui::RichText::new("←")
                .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                .color(theme::ACCENT),
        )
        .frame(false);
        if ui.add(back).clicked() {
            self.go_to_dashboard();
        }

        ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new("Settings")
                    .font(egui::FontId::new(32.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(theme::ACCENT),
            );
            ui.add_space(24.0);

            egui::Grid::new("color_settings")
                .num_columns(2)
                .spacing([30.0, 23.0])
                .show(ui, |ui| {
                    for key in ColorKey::ALL {
                        let palette: &[PaletteColor] = match key {
                            ColorKey::Background => &theme::BACKGROUND_PALETTE,
                            _ => &theme::METRIC_PALETTE,
                        };

                        ui.label(
                            egui::RichText::new(key.label())
                                .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                                .strong()
                                .color(theme::ACCENT),
                        );

                        if let Some(hex) =
                            color_picker(ui, key.storage_key(), self.settings.hex(key), palette)
                        {
                            self.settings.set(key, hex);
                        }
                        ui.end_row();
                    }
                });
        });
    }
}

/// One color picker: a combo box over a palette. Returns the newly selected
/// hex value, if any.
fn color_picker(
    ui: &mut egui::Ui,
    id: &str,
    current_hex: &str,
    palette: &[PaletteColor],
) -> Option<String> {
    let mut picked = None;

    egui::ComboBox::from_id_source(id)
        .width(160.0)
        .selected_text(
            egui::RichText::new(theme::palette_name(current_hex, palette))
                .strong()
                .color(theme::color_or(current_hex, theme::ACCENT)),
        )
        .show_ui(ui, |ui| {
            for (name, hex) in palette.iter().copied() {
                let selected = hex == current_hex;
                let entry = egui::RichText::new(format!("⏺ {name}"))
                    .strong()
                    .color(theme::color_or(hex, theme::ACCENT));
                if ui.selectable_label(selected, entry).clicked() && !selected {
                    picked = Some(hex.to_string());
                }
            }
        });

    picked
}
