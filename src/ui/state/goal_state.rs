//! # Goal State Module
//!
//! Dashboard-local goal targets and the hardcoded sample progress they are
//! measured against.
//!
//! ## Responsibilities:
//! - Slider bounds and step quantization for the three metrics
//! - Default goal values, restored on every dashboard entry
//! - The sample progress constants the rings fill toward
//!
//! Goals are deliberately not persisted: leaving the dashboard and coming
//! back resets them to the defaults.

use std::ops::RangeInclusive;

/// Inclusive slider bounds with step quantization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderBounds {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl SliderBounds {
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    /// Range for `egui::Slider::new`.
    pub fn range(&self) -> RangeInclusive<f32> {
        self.min..=self.max
    }

    /// Snap a value onto the step grid, then clamp into range.
    pub fn snap(&self, value: f32) -> f32 {
        let stepped = if self.step > 0.0 {
            self.min + ((value - self.min) / self.step).round() * self.step
        } else {
            value
        };
        stepped.clamp(self.min, self.max)
    }

    /// Whether a value is in range and on the step grid.
    pub fn contains(&self, value: f32) -> bool {
        (self.snap(value) - value).abs() < f32::EPSILON * self.max
    }
}

/// Daily calorie target, in kcal.
pub const CALORIE_BOUNDS: SliderBounds = SliderBounds::new(400.0, 1200.0, 10.0);
/// Daily step target, in thousands of steps.
pub const STEP_BOUNDS: SliderBounds = SliderBounds::new(5.0, 20.0, 1.0);
/// Daily exercise target, in minutes.
pub const MINUTE_BOUNDS: SliderBounds = SliderBounds::new(0.0, 120.0, 5.0);

/// Today's achieved progress. There is no real data source; these stand in
/// for one and are never mutated by user action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSample {
    /// kcal burned so far
    pub calories: f32,
    /// thousands of steps taken so far
    pub steps: f32,
    /// minutes exercised so far
    pub minutes: f32,
}

/// The sample shown on the dashboard.
pub const TODAY: ProgressSample = ProgressSample {
    calories: 634.0,
    steps: 4.2,
    minutes: 15.0,
};

/// Slider-bound goal targets for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalState {
    pub calories: f32,
    pub steps: f32,
    pub minutes: f32,
}

impl Default for GoalState {
    fn default() -> Self {
        Self {
            calories: 800.0,
            steps: 10.0,
            minutes: 30.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_in_range_and_on_grid() {
        let goals = GoalState::default();
        assert!(CALORIE_BOUNDS.contains(goals.calories));
        assert!(STEP_BOUNDS.contains(goals.steps));
        assert!(MINUTE_BOUNDS.contains(goals.minutes));
    }

    #[test]
    fn test_snap_clamps_out_of_range_values() {
        assert_eq!(CALORIE_BOUNDS.snap(0.0), 400.0);
        assert_eq!(CALORIE_BOUNDS.snap(5000.0), 1200.0);
        assert_eq!(MINUTE_BOUNDS.snap(-10.0), 0.0);
    }

    #[test]
    fn test_snap_lands_on_step_grid() {
        assert_eq!(CALORIE_BOUNDS.snap(803.0), 800.0);
        assert_eq!(CALORIE_BOUNDS.snap(806.0), 810.0);
        assert_eq!(STEP_BOUNDS.snap(12.4), 12.0);
        assert_eq!(MINUTE_BOUNDS.snap(33.0), 35.0);
    }

    #[test]
    fn test_goals_never_allow_zero_for_positive_metrics() {
        // Calorie and step minimums are above zero, so ring ratios for them
        // can never divide by zero.
        assert!(CALORIE_BOUNDS.min > 0.0);
        assert!(STEP_BOUNDS.min > 0.0);
    }
}
