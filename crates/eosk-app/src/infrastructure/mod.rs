//! Infrastructure layer for the on-screen keyboard.
//!
//! Contains OS-facing adapters: key injection and the settings file.
//!
//! **Dependency rule**: this layer may depend on `application` and `eosk_core`,
//! but MUST NOT be imported by the `application` or domain layers.
//!
//! # Sub-modules
//!
//! - **`input_injection`** – Implementations of `PlatformKeyInjector`.  The
//!   Windows backend is selected at compile time using `#[cfg(target_os)]`;
//!   other targets get a backend that reports `Unsupported`.  A
//!   `RecordingKeyInjector` is also provided for tests.
//!
//! - **`storage`** – `SettingsStore`, which loads, repairs, and saves
//!   `settings.json` next to the executable.

pub mod input_injection;
pub mod storage;
