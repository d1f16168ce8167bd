//! SettingsController: the explicit state-update functions the settings panel
//! calls when the user changes a preference.
//!
//! Each function changes one field through
//! [`SettingsRepository::update_with`], which applies the change to the
//! current snapshot and persists it as one step.  The controller never touches
//! the file system itself, and the UI never touches the record directly.

use std::sync::Arc;

use eosk_core::{ButtonPalette, Rgb, SettingsRecord, ThemePalette, ThemePreset, ThemeType};
use tracing::info;

/// Range accepted by the volume slider.
pub const VOLUME_RANGE: std::ops::RangeInclusive<i32> = 0..=100;

/// Owner of the in-memory settings snapshot.
///
/// Implemented by `infrastructure::storage::SettingsStore`.
pub trait SettingsRepository: Send + Sync {
    /// The last loaded or saved record.
    fn current(&self) -> SettingsRecord;

    /// Replaces the in-memory record and persists it.
    fn update(&self, record: SettingsRecord);

    /// Changes the in-memory record in place and persists it, as one step
    /// with respect to other callers.  Returns the persisted record.
    fn update_with(&self, change: &mut dyn FnMut(&mut SettingsRecord)) -> SettingsRecord;
}

/// The Manage Settings use case.
pub struct SettingsController {
    repository: Arc<dyn SettingsRepository>,
}

impl SettingsController {
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self { repository }
    }

    pub fn current(&self) -> SettingsRecord {
        self.repository.current()
    }

    /// The palette for the current accent colour and base theme.
    pub fn palette(&self) -> ThemePalette {
        ThemePalette::for_settings(&self.repository.current())
    }

    pub fn button_palette(&self) -> ButtonPalette {
        ButtonPalette::derive(self.palette().accent)
    }

    /// The preset radio button to show as checked.
    pub fn selected_preset(&self) -> ThemePreset {
        ThemePreset::matching(self.palette().accent)
    }

    /// Stores `color` as the accent and returns the palette to apply.
    pub fn select_theme_color(&self, color: Rgb) -> ThemePalette {
        let record = self.modify(|r| r.theme_color = color.to_hex());
        info!(theme_color = %record.theme_color, "theme colour changed");
        ThemePalette::for_settings(&record)
    }

    pub fn select_preset(&self, preset: ThemePreset) -> ThemePalette {
        info!(preset = preset.color_name(), "preset selected");
        self.select_theme_color(preset.color())
    }

    pub fn set_theme_type(&self, theme_type: ThemeType) -> ThemePalette {
        let record = self.modify(|r| r.theme_type = theme_type);
        info!(%theme_type, "base theme changed");
        ThemePalette::for_settings(&record)
    }

    pub fn set_auto_start(&self, enabled: bool) {
        self.modify(|r| r.auto_start = enabled);
    }

    pub fn set_sound_enabled(&self, enabled: bool) {
        self.modify(|r| r.enable_sound = enabled);
    }

    /// Stores the volume clamped to [`VOLUME_RANGE`] and returns the stored value.
    pub fn set_volume(&self, volume: i32) -> i32 {
        let volume = volume.clamp(*VOLUME_RANGE.start(), *VOLUME_RANGE.end());
        self.modify(|r| r.volume = volume);
        volume
    }

    /// Replaces every preference with its default and persists the result.
    pub fn reset_to_defaults(&self) -> SettingsRecord {
        let defaults = SettingsRecord::default();
        self.repository.update(defaults.clone());
        info!("settings reset to defaults");
        defaults
    }

    fn modify(&self, mut change: impl FnMut(&mut SettingsRecord)) -> SettingsRecord {
        self.repository.update_with(&mut change)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
