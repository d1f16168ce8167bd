//! Recording key injector for tests and headless runs.
//!
//! # Why a recording injector?
//!
//! The real injector (`WindowsKeyInjector`) presses keys on the machine running
//! the tests and needs an interactive desktop.  `RecordingKeyInjector` replaces
//! every OS call with in-memory bookkeeping so assertions can inspect exactly
//! which strokes were sent and which window was targeted.
//!
//! # Usage in tests
//!
//! ```ignore
//! let platform = Arc::new(RecordingKeyInjector::with_foreground(0x1234));
//! let keyboard = KeyInjector::new(Arc::clone(&platform) as _);
//!
//! keyboard.press(LogicalKey::A);
//!
//! assert_eq!(platform.sent().len(), 2);
//! ```
//!
//! # Failure flags
//!
//! `refuse_foreground` makes `set_foreground_window` fail and `fail_sends`
//! makes `send_strokes` fail, so the use case's error paths can be exercised.

use std::sync::{Mutex, MutexGuard, PoisonError};

use eosk_core::{KeyStroke, LogicalKey, WindowHandle};

use crate::application::press_key::{InjectionError, PlatformKeyInjector};

/// An injector that records all calls without performing OS API calls.
#[derive(Default)]
pub struct RecordingKeyInjector {
    foreground: Mutex<Option<WindowHandle>>,
    foreground_requests: Mutex<Vec<WindowHandle>>,
    sent: Mutex<Vec<KeyStroke>>,
    /// When `true`, `set_foreground_window` returns `ForegroundRefused`.
    pub refuse_foreground: bool,
    /// When `true`, `send_strokes` returns a platform error and records nothing.
    pub fail_sends: bool,
}

impl RecordingKeyInjector {
    /// An injector that reports `raw` as the focused window.
    ///
    /// A `raw` of 0 behaves like [`RecordingKeyInjector::without_foreground`].
    pub fn with_foreground(raw: isize) -> Self {
        Self {
            foreground: Mutex::new(WindowHandle::from_raw(raw)),
            ..Self::default()
        }
    }

    /// An injector that reports no focused window.
    pub fn without_foreground() -> Self {
        Self::default()
    }

    /// Makes every `set_foreground_window` call fail.
    pub fn refusing_foreground(mut self) -> Self {
        self.refuse_foreground = true;
        self
    }

    /// Makes every `send_strokes` call fail.
    pub fn failing_sends(mut self) -> Self {
        self.fail_sends = true;
        self
    }

    /// Changes the window reported as focused.
    pub fn set_foreground(&self, window: Option<WindowHandle>) {
        *lock(&self.foreground) = window;
    }

    /// Every stroke accepted so far, in send order.
    pub fn sent(&self) -> Vec<KeyStroke> {
        lock(&self.sent).clone()
    }

    /// The keys of every accepted stroke, in send order.
    ///
    /// Strokes whose VK code is not in the catalogue are skipped.
    pub fn sent_keys(&self) -> Vec<LogicalKey> {
        lock(&self.sent).iter().filter_map(KeyStroke::logical_key).collect()
    }

    /// Every window passed to `set_foreground_window`, in call order.
    pub fn foreground_requests(&self) -> Vec<WindowHandle> {
        lock(&self.foreground_requests).clone()
    }
}

impl PlatformKeyInjector for RecordingKeyInjector {
    fn foreground_window(&self) -> Option<WindowHandle> {
        *lock(&self.foreground)
    }

    fn set_foreground_window(&self, window: WindowHandle) -> Result<(), InjectionError> {
        lock(&self.foreground_requests).push(window);
        if self.refuse_foreground {
            return Err(InjectionError::ForegroundRefused(window.as_raw()));
        }
        *lock(&self.foreground) = Some(window);
        Ok(())
    }

    fn send_strokes(&self, strokes: &[KeyStroke]) -> Result<u32, InjectionError> {
        if self.fail_sends {
            return Err(InjectionError::Platform("mock failure".into()));
        }
        lock(&self.sent).extend_from_slice(strokes);
        Ok(strokes.len() as u32)
    }
}

// A panicking test thread must not hide the recorded calls from the others.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
