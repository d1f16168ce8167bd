//! Fallback injector for targets without a key injection backend.
//!
//! The keyboard still starts and its settings still work; every press is
//! logged by the use case and dropped.

#![cfg(not(target_os = "windows"))]

use eosk_core::{KeyStroke, WindowHandle};

use crate::application::press_key::{InjectionError, PlatformKeyInjector};

/// Reports no focused window and refuses every injection.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedKeyInjector;

impl PlatformKeyInjector for UnsupportedKeyInjector {
    fn foreground_window(&self) -> Option<WindowHandle> {
        None
    }

    fn set_foreground_window(&self, _window: WindowHandle) -> Result<(), InjectionError> {
        Err(InjectionError::Unsupported)
    }

    fn send_strokes(&self, _strokes: &[KeyStroke]) -> Result<u32, InjectionError> {
        Err(InjectionError::Unsupported)
    }
}
