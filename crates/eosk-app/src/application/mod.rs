//! Application layer use cases for the on-screen keyboard.
//!
//! # What use cases does the keyboard have?
//!
//! - **`press_key`** – Turns a tap on a key button into a key-down/key-up pair
//!   delivered to the focused window.  The actual OS call is made by a
//!   `PlatformKeyInjector` implementation that is injected at construction
//!   time.
//!
//! - **`manage_settings`** – The state-update functions behind the settings
//!   panel.  Each change is handed to a `SettingsRepository`, which keeps the
//!   in-memory snapshot and persists it.

pub mod manage_settings;
pub mod press_key;
