//! # Progress Ring Module
//!
//! This module provides the circular goal progress indicator used on the
//! dashboard: a colored arc over a gray track, filled according to how much
//! of the goal is achieved.
//!
//! ## Key Components:
//! - `calculations.rs` - Fill ratio / sweep angle math and the ring animation
//! - `renderer.rs` - Arc rendering using egui painting primitives

pub mod calculations;
pub mod renderer;

pub use calculations::{fill_ratio, sweep_angle, RingAnimation};
pub use renderer::{ProgressRing, RingConfig};
