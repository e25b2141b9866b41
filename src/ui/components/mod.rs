//! # UI Components Module
//!
//! This module organizes all UI components for the fitness tracker application.
//! Each submodule handles a specific aspect of the user interface.
//!
//! ## Module Organization:
//! - `theme` - Color palettes and hex color parsing
//! - `styling` - Global egui styling and shared drawing helpers
//! - `progress_ring` - Circular goal progress rendering
//! - `onboarding` - The two-screen welcome carousel
//! - `dashboard` - Progress rings and goal sliders
//! - `settings_screen` - Per-metric color pickers

pub mod dashboard;
pub mod onboarding;
pub mod progress_ring;
pub mod settings_screen;
pub mod styling;
pub mod theme;

pub use progress_ring::*;
pub use styling::{capsule_button, setup_app_style};
pub use theme::*;
