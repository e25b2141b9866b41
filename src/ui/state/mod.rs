//! # State Module
//!
//! This module organizes the application state for the fitness tracker.
//!
//! ## Module Organization:
//! - `settings_state` - Persisted color preferences (the settings store)
//! - `goal_state` - Dashboard-local goal sliders and the sample progress data

pub mod goal_state;
pub mod settings_state;

pub use goal_state::*;
pub use settings_state::*;
