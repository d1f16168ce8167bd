//! Composition root: one settings store, one settings controller, and one
//! key injector, constructed together and owned by the UI shell.

use std::sync::Arc;

use eosk_core::ThemePalette;
use tracing::info;

use crate::application::manage_settings::{SettingsController, SettingsRepository};
use crate::application::press_key::{KeyInjector, PlatformKeyInjector};
use crate::infrastructure::input_injection::default_injector;
use crate::infrastructure::storage::SettingsStore;

/// Everything the keyboard window and the settings panel need.
pub struct EoskApp {
    store: Arc<SettingsStore>,
    settings: SettingsController,
    keyboard: KeyInjector,
}

impl EoskApp {
    /// Wires the use cases over `store` and the given injection backend.
    pub fn new(store: Arc<SettingsStore>, platform: Arc<dyn PlatformKeyInjector>) -> Self {
        let repository: Arc<dyn SettingsRepository> = Arc::clone(&store) as _;
        Self {
            settings: SettingsController::new(repository),
            keyboard: KeyInjector::new(platform),
            store,
        }
    }

    /// Wires the use cases over `store` and this platform's injector.
    pub fn with_default_injector(store: Arc<SettingsStore>) -> Self {
        Self::new(store, default_injector())
    }

    /// Loads the settings file and returns the palette the UI starts with.
    pub fn start(&self) -> ThemePalette {
        let record = self.store.load();
        let palette = ThemePalette::for_settings(&record);
        info!(
            theme_color = %record.theme_color,
            theme_type = %record.theme_type,
            "settings applied"
        );
        palette
    }

    pub fn store(&self) -> &Arc<SettingsStore> {
        &self.store
    }

    pub fn settings(&self) -> &SettingsController {
        &self.settings
    }

    pub fn keyboard(&self) -> &KeyInjector {
        &self.keyboard
    }
}
