//! # Dashboard Module
//!
//! The main content screen: three animated progress rings showing today's
//! sample progress against the goal targets, and three sliders adjusting
//! those targets. Ring ratios recompute every frame, so any slider change is
//! reflected immediately.

use eframe::egui;

use crate::ui::app_state::FitnessTrackerApp;
use crate::ui::components::progress_ring::{fill_ratio, ProgressRing, RingConfig};
use crate::ui::components::theme;
use crate::ui::state::goal_state::{self, SliderBounds, TODAY};
use crate::ui::state::ColorKey;

impl FitnessTrackerApp {
    /// Render the dashboard screen.
    pub fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        // Gear icon in the top-right corner opens settings
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            let gear = egui::Button::new(
                egui::RichText::new("⚙")
                    .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                    .color(theme::ACCENT),
            )
            .frame(false);
            if ui.add(gear).clicked() {
                self.go_to_settings();
            }
        });

        // Advance ring animations toward this frame's target ratios
        let dt = ui.input(|i| i.stable_dt).min(0.1);
        let calorie_target = fill_ratio(TODAY.calories, self.goals.calories);
        let step_target = fill_ratio(TODAY.steps, self.goals.steps);
        let minute_target = fill_ratio(TODAY.minutes, self.goals.minutes);

        let calorie_shown = self.rings.calories.advance(calorie_target, dt);
        let step_shown = self.rings.steps.advance(step_target, dt);
        let minute_shown = self.rings.minutes.advance(minute_target, dt);

        if !(self.rings.calories.settled(calorie_target)
            && self.rings.steps.settled(step_target)
            && self.rings.minutes.settled(minute_target))
        {
            ui.ctx().request_repaint();
        }

        let calorie_color = self.settings.color(ColorKey::Calorie);
        let step_color = self.settings.color(ColorKey::Step);
        let exercise_color = self.settings.color(ColorKey::Exercise);

        ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new("Meet your goals")
                    .font(egui::FontId::new(32.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(theme::ACCENT),
            );
            ui.add_space(8.0);

            // Big calorie ring on top
            let big_ring = ProgressRing::with_config(RingConfig {
                radius: 55.0,
                stroke_width: 11.0,
                glyph_size: 34.0,
            });
            big_ring.render(ui, calorie_shown, calorie_color, "🔥");
            progress_caption(
                ui,
                &format!("{:.0}", TODAY.calories),
                &format!("/{:.0}", self.goals.calories),
                calorie_color,
            );

            ui.add_space(10.0);

            // Step and exercise rings side by side
            let small_ring = ProgressRing::new();
            ui.horizontal(|ui| {
                let half = ui.available_width() / 2.0;
                ui.allocate_ui_with_layout(
                    egui::vec2(half, 0.0),
                    egui::Layout::top_down(egui::Align::Center),
                    |ui| {
                        small_ring.render(ui, step_shown, step_color, "👟");
                        progress_caption(
                            ui,
                            &format!("{}", TODAY.steps),
                            &format!("/{:.0}K", self.goals.steps),
                            step_color,
                        );
                    },
                );
                ui.allocate_ui_with_layout(
                    egui::vec2(half, 0.0),
                    egui::Layout::top_down(egui::Align::Center),
                    |ui| {
                        small_ring.render(ui, minute_shown, exercise_color, "🚶");
                        progress_caption(
                            ui,
                            &format!("{:.0}", TODAY.minutes),
                            &format!("/{:.0}", self.goals.minutes),
                            exercise_color,
                        );
                    },
                );
            });

            ui.add_space(18.0);

            ui.label(
                egui::RichText::new("Make your goals")
                    .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(theme::ACCENT),
            );
            ui.add_space(8.0);

            goal_slider_row(
                ui,
                "🔥",
                "CALS",
                calorie_color,
                &mut self.goals.calories,
                goal_state::CALORIE_BOUNDS,
                |v| format!("{v:.0}"),
            );
            goal_slider_row(
                ui,
                "👟",
                "STEPS",
                step_color,
                &mut self.goals.steps,
                goal_state::STEP_BOUNDS,
                |v| format!("{v:.0}K"),
            );
            goal_slider_row(
                ui,
                "🚶",
                "MINS",
                exercise_color,
                &mut self.goals.minutes,
                goal_state::MINUTE_BOUNDS,
                |v| format!("{v:.0}"),
            );
        });
    }
}

/// "current/goal" caption below a ring, with the goal part in the ring color.
fn progress_caption(ui: &mut egui::Ui, current: &str, goal: &str, color: egui::Color32) {
    let font = egui::FontId::new(16.0, egui::FontFamily::Proportional);
    let mut job = egui::text::LayoutJob::default();
    job.append(
        current,
        0.0,
        egui::TextFormat::simple(font.clone(), theme::ACCENT),
    );
    job.append(goal, 0.0, egui::TextFormat::simple(font, color));
    ui.label(job);
}

/// One goal slider row: pictogram and label, the bounded slider, and the
/// current target value. The slider enforces the range and step grid.
fn goal_slider_row(
    ui: &mut egui::Ui,
    glyph: &str,
    label: &str,
    color: egui::Color32,
    value: &mut f32,
    bounds: SliderBounds,
    fmt: impl Fn(f32) -> String,
) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(glyph)
                    .font(egui::FontId::new(26.0, egui::FontFamily::Proportional))
                    .color(color),
            );
            ui.label(
                egui::RichText::new(label)
                    .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(theme::ACCENT),
            );
        });

        ui.scope(|ui| {
            ui.visuals_mut().selection.bg_fill = color;
            ui.add(
                egui::Slider::new(value, bounds.range())
                    .step_by(bounds.step as f64)
                    .show_value(false),
            );
            *value = bounds.snap(*value);
        });

        ui.label(
            egui::RichText::new(fmt(*value))
                .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                .strong()
                .color(theme::ACCENT),
        );
    });
}
