//! # eosk-core
//!
//! Shared library for EOSK containing the on-screen keyboard's key catalogue,
//! the theme colour model, and the persisted settings record.
//!
//! This crate has zero dependencies on OS APIs, UI frameworks, or the file
//! system.  Everything here is pure data and arithmetic so it can be tested on
//! any platform.
//!
//! # Architecture overview (for beginners)
//!
//! EOSK is a desktop utility that shows a clickable keyboard on screen.  When
//! the user taps a key, the application synthesizes a real key press and
//! delivers it to whichever window currently has keyboard focus.  A settings
//! panel lets the user pick an accent colour and a light or dark theme.
//!
//! This crate (`eosk-core`) is the shared foundation.  It defines:
//!
//! - **`keymap`** – The names of every key the on-screen keyboard can show
//!   ([`LogicalKey`]) and their translation to Windows Virtual Key codes.
//!
//! - **`input`** – The platform-neutral description of a synthesized key
//!   event ([`KeyStroke`]) and the down/up pair that makes one key press.
//!
//! - **`theme`** – Colour parsing and the light/mid/dark palette derived from
//!   the single accent colour the user picks.
//!
//! - **`settings`** – The [`SettingsRecord`] stored in `settings.json`, its
//!   defaults, and the repair rules applied when the file is loaded.

pub mod input;
pub mod keymap;
pub mod settings;
pub mod theme;

// Re-export the most-used types at the crate root so callers can write
// `eosk_core::LogicalKey` instead of `eosk_core::keymap::LogicalKey`.
pub use input::{synthesize_press, KeyStroke, WindowHandle};
pub use keymap::{KeyParseError, LogicalKey};
pub use settings::{
    validate_and_repair, RepairedField, SettingsParseError, SettingsRecord, ThemeType,
    DEFAULT_THEME_COLOR,
};
pub use theme::{ButtonPalette, ColorParseError, Gradient, Rgb, ThemePalette, ThemePreset};
