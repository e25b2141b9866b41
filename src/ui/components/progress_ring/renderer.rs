//! # Progress Ring Renderer
//!
//! Draws the ring widget with egui painting primitives: a muted track
//! circle, a colored progress arc starting at 12 o'clock, and an optional
//! glyph in the center.

use eframe::egui;
use std::f32::consts::PI;

use super::calculations::sweep_angle;
use crate::ui::components::theme;

/// Configuration for ring appearance.
#[derive(Debug, Clone)]
pub struct RingConfig {
    /// Radius of the ring centerline
    pub radius: f32,
    /// Stroke width for track and arc
    pub stroke_width: f32,
    /// Font size for the center glyph
    pub glyph_size: f32,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            radius: 50.0,
            stroke_width: 10.0,
            glyph_size: 30.0,
        }
    }
}

/// Stateless ring widget: `(ratio, color)` in, painted arc out.
#[derive(Debug, Clone, Default)]
pub struct ProgressRing {
    config: RingConfig,
}

impl ProgressRing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RingConfig) -> Self {
        Self { config }
    }

    /// Render the ring at the given fill ratio. `glyph` is painted in the
    /// center in the ring color (the metric's pictogram).
    pub fn render(&self, ui: &mut egui::Ui, ratio: f32, color: egui::Color32, glyph: &str) {
        let side = (self.config.radius + self.config.stroke_width) * 2.0;
        let (rect, _response) =
            ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
        let center = rect.center();
        let painter = ui.painter();

        // Track circle behind the arc
        painter.circle_stroke(
            center,
            self.config.radius,
            egui::Stroke::new(self.config.stroke_width, theme::RING_TRACK),
        );

        // Progress arc, from 12 o'clock clockwise
        let ratio = ratio.clamp(0.0, 1.0);
        if ratio > 0.0 {
            let start_angle = -PI / 2.0;
            let end_angle = start_angle + sweep_angle(ratio);
            self.draw_arc(painter, center, start_angle, end_angle, color);
        }

        // Center glyph
        if !glyph.is_empty() {
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                glyph,
                egui::FontId::new(self.config.glyph_size, egui::FontFamily::Proportional),
                color,
            );
        }
    }

    /// Draw an arc as short line segments (egui has no native arc primitive).
    fn draw_arc(
        &self,
        painter: &egui::Painter,
        center: egui::Pos2,
        start_angle: f32,
        end_angle: f32,
        color: egui::Color32,
    ) {
        let radius = self.config.radius;
        // Roughly 3 pixels per segment, bounded for tiny and full arcs
        let arc_length = (end_angle - start_angle).abs();
        let num_segments = ((arc_length * radius / 3.0).ceil() as i32).clamp(8, 100);
        let angle_step = (end_angle - start_angle) / num_segments as f32;

        for i in 0..num_segments {
            let angle1 = start_angle + angle_step * i as f32;
            let angle2 = start_angle + angle_step * (i + 1) as f32;

            let point1 = egui::pos2(
                center.x + radius * angle1.cos(),
                center.y + radius * angle1.sin(),
            );
            let point2 = egui::pos2(
                center.x + radius * angle2.cos(),
                center.y + radius * angle2.sin(),
            );

            painter.line_segment(
                [point1, point2],
                egui::Stroke::new(self.config.stroke_width, color),
            );
        }
    }
}
