//! Platform-specific key injection implementations.
//!
//! The correct implementation is selected at compile time via `#[cfg(target_os = ...)]`.

use std::sync::Arc;

use crate::application::press_key::PlatformKeyInjector;

pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(not(target_os = "windows"))]
pub mod unsupported;

/// The injector for the platform this binary was built for.
pub fn default_injector() -> Arc<dyn PlatformKeyInjector> {
    #[cfg(target_os = "windows")]
    {
        Arc::new(windows::WindowsKeyInjector::new())
    }
    #[cfg(not(target_os = "windows"))]
    {
        Arc::new(unsupported::UnsupportedKeyInjector)
    }
}
