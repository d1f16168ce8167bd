//! Storage infrastructure: settings file persistence.
//!
//! The `settings_store` sub-module handles:
//!
//! - Reading `settings.json` from the directory the executable runs from.
//! - Repairing invalid fields and self-healing an unreadable file.
//! - Writing changes back to disk when the user modifies a preference.

pub mod settings_store;

pub use settings_store::{SettingsStore, StoreError, StorePhase, SETTINGS_FILE_NAME};
