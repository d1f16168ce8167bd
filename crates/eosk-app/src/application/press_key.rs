//! KeyInjector: turns a tap on the on-screen keyboard into a key press
//! delivered to the window that currently has keyboard focus.
//!
//! This use case sits at the application layer and delegates to a
//! [`PlatformKeyInjector`] trait object for the OS calls.  The platform
//! implementations are in `infrastructure::input_injection`.
//!
//! # Why re-assert the foreground window? (for beginners)
//!
//! Clicking a button on the on-screen keyboard could, in principle, move focus
//! to the keyboard's own window.  The keyboard window is created so that it
//! never takes focus, but between the click and the injection the foreground
//! can still drift.  Reading the foreground window and immediately setting it
//! again pins the target before the key events are queued.
//!
//! # Failure policy
//!
//! A press is best effort.  Every failure (no focused window, the OS refusing
//! the foreground request, `SendInput` being blocked) is logged and swallowed;
//! nothing is retried and nothing is returned to the UI.

use std::sync::Arc;

use eosk_core::{synthesize_press, KeyStroke, LogicalKey, WindowHandle};
use thiserror::Error;
use tracing::{debug, warn};

/// Error type for platform key-injection calls.
#[derive(Debug, Error)]
pub enum InjectionError {
    #[error("platform error: {0}")]
    Platform(String),
    #[error("window {0:#x} could not be brought to the foreground")]
    ForegroundRefused(isize),
    #[error("key injection is not supported on this platform")]
    Unsupported,
}

/// Platform-agnostic key injection trait.
///
/// Each supported OS provides an implementation in the infrastructure layer.
#[cfg_attr(test, mockall::automock)]
pub trait PlatformKeyInjector: Send + Sync {
    /// The window currently receiving keyboard input, or `None` if no window
    /// has focus.
    fn foreground_window(&self) -> Option<WindowHandle>;

    /// Asks the OS to make `window` the foreground window.
    fn set_foreground_window(&self, window: WindowHandle) -> Result<(), InjectionError>;

    /// Queues `strokes` on the system input stream, in order.
    ///
    /// Returns the number of strokes the OS accepted.
    fn send_strokes(&self, strokes: &[KeyStroke]) -> Result<u32, InjectionError>;
}

/// The Press Key use case.
pub struct KeyInjector {
    platform: Arc<dyn PlatformKeyInjector>,
}

impl KeyInjector {
    /// Creates a new use case over the given platform backend.
    pub fn new(platform: Arc<dyn PlatformKeyInjector>) -> Self {
        Self { platform }
    }

    /// Presses and releases `key` in the currently focused window.
    ///
    /// Must be called from the UI thread.  Never fails; see the module docs.
    pub fn press(&self, key: LogicalKey) {
        let Some(target) = self.platform.foreground_window() else {
            debug!(%key, "no foreground window; press skipped");
            return;
        };

        if let Err(e) = self.platform.set_foreground_window(target) {
            warn!(%key, "could not re-assert foreground window: {e}");
        }

        let strokes = synthesize_press(key);
        match self.platform.send_strokes(&strokes) {
            Ok(sent) if sent as usize == strokes.len() => {
                debug!(%key, vk = strokes[0].vk, window = target.as_raw(), "key injected");
            }
            Ok(sent) => {
                warn!(%key, sent, expected = strokes.len(), "key injection partially blocked");
                if let Some(held) = strokes
                    .get(sent as usize..)
                    .into_iter()
                    .flatten()
                    .filter(|s| s.key_up)
                    .find_map(KeyStroke::logical_key)
                {
                    warn!(key = %held, "key-up was not delivered; the key may stay held down");
                }
            }
            Err(e) => warn!(%key, "key injection failed: {e}"),
        }
    }

    /// Parses a button's key name and presses it.
    ///
    /// Unknown names are logged and ignored.
    pub fn press_named(&self, name: &str) {
        match name.parse::<LogicalKey>() {
            Ok(key) => self.press(key),
            Err(e) => warn!("{e}; press ignored"),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
