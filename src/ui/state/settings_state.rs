//! # Settings State Module
//!
//! The settings store: four persisted color preferences, read by every
//! screen and written only from the settings screen.
//!
//! ## Persistence:
//! Each preference is one string entry in eframe's key-value storage, under
//! a fixed key. `set()` is the single update entry point; it marks the store
//! dirty and the next `eframe::App::save` pass flushes all four keys. Absent
//! keys fall back to the documented defaults on first run.

use eframe::egui::Color32;
use eframe::Storage;
use log::info;

use crate::ui::components::theme;

/// The four persisted color preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKey {
    Background,
    Calorie,
    Step,
    Exercise,
}

impl ColorKey {
    pub const ALL: [ColorKey; 4] = [
        ColorKey::Background,
        ColorKey::Calorie,
        ColorKey::Step,
        ColorKey::Exercise,
    ];

    /// Fixed key the preference is persisted under.
    pub fn storage_key(self) -> &'static str {
        match self {
            ColorKey::Background => "backgroundColor",
            ColorKey::Calorie => "calorieColor",
            ColorKey::Step => "stepColor",
            ColorKey::Exercise => "exerciseColor",
        }
    }

    /// First-run default hex value.
    pub fn default_hex(self) -> &'static str {
        match self {
            ColorKey::Background => "35413D",
            ColorKey::Calorie => "FF5326",
            ColorKey::Step => "A72AFF",
            ColorKey::Exercise => "21FFE6",
        }
    }

    /// Parsed form of `default_hex`, used as the render fallback when a
    /// stored value turns out to be malformed.
    pub fn default_color(self) -> Color32 {
        match self {
            ColorKey::Background => Color32::from_rgb(0x35, 0x41, 0x3D),
            ColorKey::Calorie => Color32::from_rgb(0xFF, 0x53, 0x26),
            ColorKey::Step => Color32::from_rgb(0xA7, 0x2A, 0xFF),
            ColorKey::Exercise => Color32::from_rgb(0x21, 0xFF, 0xE6),
        }
    }

    /// Label shown next to the picker on the settings screen.
    pub fn label(self) -> &'static str {
        match self {
            ColorKey::Background => "Background",
            ColorKey::Calorie => "Calorie Tracker",
            ColorKey::Step => "Step Tracker",
            ColorKey::Exercise => "Exercise Tracker",
        }
    }
}

/// Color preferences for the whole app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsState {
    background: String,
    calorie: String,
    step: String,
    exercise: String,
    /// True when a preference changed since the last flush to storage.
    dirty: bool,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            background: ColorKey::Background.default_hex().to_string(),
            calorie: ColorKey::Calorie.default_hex().to_string(),
            step: ColorKey::Step.default_hex().to_string(),
            exercise: ColorKey::Exercise.default_hex().to_string(),
            dirty: false,
        }
    }
}

impl SettingsState {
    /// Load preferences from storage, keeping defaults for absent keys.
    pub fn load(storage: Option<&dyn Storage>) -> Self {
        let mut state = Self::default();
        if let Some(storage) = storage {
            for key in ColorKey::ALL {
                if let Some(hex) = storage.get_string(key.storage_key()) {
                    *state.slot_mut(key) = hex;
                }
            }
        }
        info!(
            "🎨 Loaded color preferences: bg={} cal={} step={} ex={}",
            state.background, state.calorie, state.step, state.exercise
        );
        state
    }

    /// Write all four preferences back to storage.
    pub fn save(&mut self, storage: &mut dyn Storage) {
        for key in ColorKey::ALL {
            storage.set_string(key.storage_key(), self.hex(key).to_string());
        }
        self.dirty = false;
    }

    /// Raw stored hex string for a preference.
    pub fn hex(&self, key: ColorKey) -> &str {
        match key {
            ColorKey::Background => &self.background,
            ColorKey::Calorie => &self.calorie,
            ColorKey::Step => &self.step,
            ColorKey::Exercise => &self.exercise,
        }
    }

    /// Parsed color for a preference; malformed stored values fall back to
    /// the default for that key instead of failing the render pass.
    pub fn color(&self, key: ColorKey) -> Color32 {
        theme::color_or(self.hex(key), key.default_color())
    }

    /// The single update entry point. Records the value and marks the store
    /// dirty so the next save pass persists it.
    pub fn set(&mut self, key: ColorKey, hex: String) {
        if self.hex(key) == hex {
            return;
        }
        info!("🎨 Setting {} to {}", key.storage_key(), hex);
        *self.slot_mut(key) = hex;
        self.dirty = true;
    }

    /// Flush to storage right away if anything changed, so a new selection
    /// is durable immediately rather than on the next autosave pass.
    pub fn flush_if_dirty(&mut self, storage: &mut dyn Storage) {
        if !self.dirty {
            return;
        }
        info!("💾 Flushing color preferences to storage");
        self.save(storage);
        storage.flush();
    }

    /// Whether there are unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn slot_mut(&mut self, key: ColorKey) -> &mut String {
        match key {
            ColorKey::Background => &mut self.background,
            ColorKey::Calorie => &mut self.calorie,
            ColorKey::Step => &mut self.step,
            ColorKey::Exercise => &mut self.exercise,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory stand-in for eframe's on-disk key-value storage.
    #[derive(Default)]
    struct MemoryStorage {
        entries: HashMap<String, String>,
        flushes: usize,
    }

    impl Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.entries.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.entries.insert(key.to_string(), value);
        }

        fn flush(&mut self) {
            self.flushes += 1;
        }
    }

    #[test]
    fn test_first_run_uses_documented_defaults() {
        let state = SettingsState::load(None);
        assert_eq!(state.hex(ColorKey::Background), "35413D");
        assert_eq!(state.hex(ColorKey::Calorie), "FF5326");
        assert_eq!(state.hex(ColorKey::Step), "A72AFF");
        assert_eq!(state.hex(ColorKey::Exercise), "21FFE6");
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_set_then_reload_returns_written_value() {
        let mut storage = MemoryStorage::default();

        let mut state = SettingsState::default();
        state.set(ColorKey::Calorie, "FF00D6".to_string());
        assert!(state.is_dirty());
        state.save(&mut storage);
        assert!(!state.is_dirty());

        let reloaded = SettingsState::load(Some(&storage));
        assert_eq!(reloaded.hex(ColorKey::Calorie), "FF00D6");
        // Untouched keys keep their defaults
        assert_eq!(reloaded.hex(ColorKey::Step), "A72AFF");
    }

    #[test]
    fn test_absent_keys_fall_back_per_key() {
        let mut storage = MemoryStorage::default();
        storage.set_string("stepColor", "FBFF00".to_string());

        let state = SettingsState::load(Some(&storage));
        assert_eq!(state.hex(ColorKey::Step), "FBFF00");
        assert_eq!(state.hex(ColorKey::Background), "35413D");
    }

    #[test]
    fn test_flush_if_dirty_persists_immediately() {
        let mut storage = MemoryStorage::default();
        let mut state = SettingsState::default();

        // Nothing changed yet: storage stays untouched
        state.flush_if_dirty(&mut storage);
        assert!(storage.entries.is_empty());
        assert_eq!(storage.flushes, 0);

        // A single set is written through and flushed on the next pass
        state.set(ColorKey::Calorie, "FF00D6".to_string());
        state.flush_if_dirty(&mut storage);
        assert_eq!(storage.get_string("calorieColor").as_deref(), Some("FF00D6"));
        assert_eq!(storage.flushes, 1);
        assert!(!state.is_dirty());

        // Clean store does not flush again
        state.flush_if_dirty(&mut storage);
        assert_eq!(storage.flushes, 1);
    }

    #[test]
    fn test_setting_same_value_does_not_mark_dirty() {
        let mut state = SettingsState::default();
        state.set(ColorKey::Background, "35413D".to_string());
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_malformed_stored_color_falls_back_to_default() {
        let mut storage = MemoryStorage::default();
        storage.set_string("calorieColor", "not-a-color".to_string());

        let state = SettingsState::load(Some(&storage));
        // Raw value is kept as stored, but rendering falls back
        assert_eq!(state.hex(ColorKey::Calorie), "not-a-color");
        assert_eq!(state.color(ColorKey::Calorie), ColorKey::Calorie.default_color());
    }
}
