//! eosk-app library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does eosk-app do? (for beginners)
//!
//! The app shows a keyboard on screen that can be operated with a mouse,
//! pen, or touch.  Two things happen behind the buttons:
//!
//! 1. A tap on a key button becomes a real key press, delivered to the window
//!    the user was typing into (`application::press_key`).  The keyboard
//!    window itself never takes focus.
//! 2. The settings panel changes the accent colour, the light/dark base
//!    theme, and the sound options; every change is written to
//!    `settings.json` next to the executable (`application::manage_settings`
//!    and `infrastructure::storage`).
//!
//! [`app::EoskApp`] wires both together and is what the UI shell holds.

/// Application layer: use cases for the keyboard.
pub mod application;

/// Infrastructure layer: OS key injection and settings persistence.
pub mod infrastructure;

/// Composition root shared by the binary and the integration tests.
pub mod app;
