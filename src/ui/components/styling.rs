//! # Styling Module
//!
//! Global egui styling and shared drawing helpers for the fitness tracker.
//!
//! ## Key Functions:
//! - `setup_app_style()` - Configure global egui styling (fonts, spacing, rounding)
//! - `capsule_button()` - Large accent-colored call-to-action button
//!
//! ## Purpose:
//! The app draws everything on a user-chosen dark background, so panels are
//! made transparent here and the background fill is painted per frame by the
//! app shell from the settings store.

use eframe::egui;

use crate::ui::components::theme;

/// Setup the heavy, high-contrast styling used across every screen.
pub fn setup_app_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        // Panels stay transparent so the settings-driven background shows through
        style.visuals.window_fill = egui::Color32::TRANSPARENT;
        style.visuals.panel_fill = egui::Color32::TRANSPARENT;
        style.visuals.button_frame = true;

        // Fill slider tracks up to the handle with the per-metric accent
        style.visuals.slider_trailing_fill = true;

        // Bold text sizes throughout
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(30.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(18.0, egui::FontFamily::Proportional),
        );

        // Rounded corners and generous padding
        style.spacing.button_padding = egui::vec2(14.0, 8.0);
        style.spacing.item_spacing = egui::vec2(8.0, 10.0);
        style.spacing.slider_width = 230.0;
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);

        style
    });
}

/// Draw a large capsule-shaped button in the accent color.
///
/// Used for the onboarding CONTINUE / LET'S GO actions.
pub fn capsule_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let label = egui::RichText::new(text)
        .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
        .strong()
        .color(theme::ON_ACCENT);

    ui.add_sized(
        [240.0, 64.0],
        egui::Button::new(label)
            .fill(theme::ACCENT)
            .rounding(egui::Rounding::same(32.0)),
    )
}
