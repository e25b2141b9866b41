//! # Progress Ring Calculations
//!
//! Fill ratio and sweep angle math for the ring widget, plus the small
//! animation state that eases the drawn arc toward its target.

use std::f32::consts::TAU;

/// Fill ratio for a ring: achieved progress over the goal, clamped to [0, 1].
///
/// A zero goal is trivially met: any positive progress fills the ring, and
/// only 0-over-0 stays empty. The minutes slider range starts at 0, so the
/// zero-goal case is reachable from the dashboard.
pub fn fill_ratio(current: f32, goal: f32) -> f32 {
    if goal == 0.0 {
        return if current > 0.0 { 1.0 } else { 0.0 };
    }
    (current / goal).clamp(0.0, 1.0)
}

/// Sweep angle in radians for a fill ratio, full circle at ratio 1.0.
pub fn sweep_angle(ratio: f32) -> f32 {
    TAU * ratio.clamp(0.0, 1.0)
}

/// Linear animation toward a target fill ratio.
///
/// The drawn ratio moves at a fixed speed, covering a full sweep in about
/// half a second, so goal changes ease the arc instead of snapping it.
#[derive(Debug, Clone, Copy, Default)]
pub struct RingAnimation {
    shown: f32,
}

impl RingAnimation {
    /// Ratio units per second: full circle in 0.5s.
    const SPEED: f32 = 2.0;

    pub fn new() -> Self {
        Self { shown: 0.0 }
    }

    /// Advance toward `target` by `dt` seconds, returning the ratio to draw.
    pub fn advance(&mut self, target: f32, dt: f32) -> f32 {
        let target = target.clamp(0.0, 1.0);
        let max_step = Self::SPEED * dt.max(0.0);
        self.shown += (target - self.shown).clamp(-max_step, max_step);
        self.shown
    }

    /// Whether the drawn ratio has reached the target.
    pub fn settled(&self, target: f32) -> bool {
        (self.shown - target.clamp(0.0, 1.0)).abs() < 1e-3
    }

    /// Restart the animation from an empty ring.
    pub fn reset(&mut self) {
        self.shown = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_ratio_basic() {
        assert_eq!(fill_ratio(400.0, 800.0), 0.5);
        assert_eq!(fill_ratio(0.0, 800.0), 0.0);
        assert!((fill_ratio(634.0, 800.0) - 0.7925).abs() < 1e-6);
    }

    #[test]
    fn test_fill_ratio_clamps_to_one() {
        assert_eq!(fill_ratio(1500.0, 800.0), 1.0);
        assert_eq!(fill_ratio(120.0, 120.0), 1.0);
    }

    #[test]
    fn test_fill_ratio_zero_goal_is_trivially_met() {
        // min(current/goal, 1.0) with a zero goal: the division is +inf, so
        // the ring fills completely
        assert_eq!(fill_ratio(15.0, 0.0), (15.0f32 / 0.0).min(1.0));
        assert_eq!(fill_ratio(15.0, 0.0), 1.0);
        assert_eq!(fill_ratio(0.0, 0.0), 0.0);
        // Negative goals are unreachable from the sliders; the ratio stays in range
        assert_eq!(fill_ratio(15.0, -5.0), 0.0);
    }

    #[test]
    fn test_sweep_angle_example() {
        // goal=800 kcal, progress=634 -> ratio 0.7925 -> 285.3 degrees
        let degrees = sweep_angle(fill_ratio(634.0, 800.0)).to_degrees();
        assert!((degrees - 285.3).abs() < 0.05, "got {degrees}");
    }

    #[test]
    fn test_sweep_angle_bounds() {
        assert_eq!(sweep_angle(0.0), 0.0);
        assert_eq!(sweep_angle(1.0), TAU);
        assert_eq!(sweep_angle(2.5), TAU);
    }

    #[test]
    fn test_animation_converges_without_overshoot() {
        let mut anim = RingAnimation::new();
        let mut last = 0.0;
        for _ in 0..120 {
            let shown = anim.advance(0.7925, 1.0 / 60.0);
            assert!(shown >= last, "animation must be monotonic toward target");
            assert!(shown <= 0.7925 + 1e-6, "animation must not overshoot");
            last = shown;
        }
        assert!(anim.settled(0.7925));
    }

    #[test]
    fn test_animation_follows_lowered_target() {
        let mut anim = RingAnimation::new();
        anim.advance(1.0, 1.0); // settle at full
        assert!(anim.settled(1.0));
        let shown = anim.advance(0.5, 1.0 / 60.0);
        assert!(shown < 1.0);
    }
}
