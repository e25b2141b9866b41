//! # App State Module
//!
//! This module defines the central application state structure and
//! initialization logic for the fitness tracker app.
//!
//! ## Key Types:
//! - `Screen` - Enum defining the app's screens (onboarding, dashboard, settings)
//! - `FitnessTrackerApp` - Main application state struct
//!
//! ## State Management:
//! The FitnessTrackerApp struct holds all application state in a single
//! location: the persisted color preferences, the dashboard-local goal
//! values, the current screen, and the ring animation state. This follows
//! the single source of truth principle for state management.

use log::info;

use crate::ui::components::progress_ring::RingAnimation;
use crate::ui::state::{GoalState, SettingsState};

/// Screens of the app. Onboarding progresses linearly; dashboard and
/// settings navigate between each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    OnboardingWelcome,
    OnboardingTour,
    Dashboard,
    Settings,
}

/// Animation state for the three dashboard rings.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardRings {
    pub calories: RingAnimation,
    pub steps: RingAnimation,
    pub minutes: RingAnimation,
}

impl DashboardRings {
    /// Restart all three rings from empty.
    pub fn reset(&mut self) {
        self.calories.reset();
        self.steps.reset();
        self.minutes.reset();
    }
}

/// Main application struct for the egui fitness tracker.
pub struct FitnessTrackerApp {
    /// Persisted color preferences, written only by the settings screen
    pub settings: SettingsState,
    /// Dashboard-local goal targets, reset on every dashboard entry
    pub goals: GoalState,
    /// Currently visible screen
    pub screen: Screen,
    /// Ring fill animations
    pub rings: DashboardRings,
}

impl FitnessTrackerApp {
    /// Create a new FitnessTrackerApp, restoring color preferences from the
    /// platform storage eframe provides.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing FitnessTrackerApp");

        crate::ui::components::styling::setup_app_style(&cc.egui_ctx);

        let settings = SettingsState::load(cc.storage);

        Ok(Self {
            settings,
            goals: GoalState::default(),
            screen: Screen::OnboardingWelcome,
            rings: DashboardRings::default(),
        })
    }

    /// Advance from the welcome screen to the feature tour.
    pub fn advance_onboarding(&mut self) {
        info!("👋 Advancing onboarding to the tour screen");
        self.screen = Screen::OnboardingTour;
    }

    /// Navigate to the dashboard. Goals reset to their defaults and the
    /// rings animate in from empty on every entry.
    pub fn go_to_dashboard(&mut self) {
        info!("📊 Entering dashboard, resetting goals to defaults");
        self.goals = GoalState::default();
        self.rings.reset();
        self.screen = Screen::Dashboard;
    }

    /// Navigate to the settings screen.
    pub fn go_to_settings(&mut self) {
        info!("⚙ Entering settings");
        self.screen = Screen::Settings;
    }
}
