//! Platform-neutral description of synthesized keyboard input.
//!
//! A key press on the on-screen keyboard becomes exactly two [`KeyStroke`]s:
//! a key-down immediately followed by a key-up.  Platform backends translate
//! each stroke into their native input structure (a `KEYBDINPUT` on Windows);
//! nothing in this module touches the OS.

use std::num::NonZeroIsize;

use crate::keymap::{windows_vk, LogicalKey};

/// One synthesized keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyStroke {
    /// Windows Virtual Key code.
    pub vk: u8,
    /// Hardware scan code.  Always 0: the OS derives it from `vk`.
    pub scan_code: u16,
    /// Application-defined extra information attached to the event.  Always 0.
    pub extra_info: usize,
    /// `true` for the release half of a press.
    pub key_up: bool,
    /// Whether the key belongs to the extended keyboard block.
    pub extended: bool,
}

impl KeyStroke {
    fn new(key: LogicalKey, key_up: bool) -> Self {
        Self {
            vk: key.to_windows_vk(),
            scan_code: 0,
            extra_info: 0,
            key_up,
            extended: key.is_extended(),
        }
    }

    /// The catalogue key this stroke presses or releases, if its VK code
    /// names one.
    pub fn logical_key(&self) -> Option<LogicalKey> {
        windows_vk::vk_to_key(self.vk)
    }
}

/// Builds the down/up stroke pair for a single tap of `key`.
pub fn synthesize_press(key: LogicalKey) -> [KeyStroke; 2] {
    [KeyStroke::new(key, false), KeyStroke::new(key, true)]
}

/// Opaque handle to a top-level OS window.
///
/// Null handles are not representable; platform calls that can return null
/// surface `Option<WindowHandle>` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(NonZeroIsize);

impl WindowHandle {
    /// Wraps a raw handle value, returning `None` for null.
    pub fn from_raw(raw: isize) -> Option<Self> {
        NonZeroIsize::new(raw).map(Self)
    }

    /// The raw handle value.
    pub fn as_raw(self) -> isize {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_down_then_up() {
        let [down, up] = synthesize_press(LogicalKey::A);

        assert!(!down.key_up);
        assert!(up.key_up);
        assert_eq!(down.vk, 0x41);
        assert_eq!(up.vk, 0x41);
    }

    #[test]
    fn test_press_carries_zero_scan_code_and_extra_info() {
        for stroke in synthesize_press(LogicalKey::Enter) {
            assert_eq!(stroke.scan_code, 0);
            assert_eq!(stroke.extra_info, 0);
        }
    }

    #[test]
    fn test_extended_flag_follows_key() {
        let [down, up] = synthesize_press(LogicalKey::Home);
        assert!(down.extended && up.extended);

        let [down, up] = synthesize_press(LogicalKey::Space);
        assert!(!down.extended && !up.extended);
    }

    #[test]
    fn test_stroke_maps_back_to_its_key() {
        let [down, up] = synthesize_press(LogicalKey::OemComma);
        assert_eq!(down.logical_key(), Some(LogicalKey::OemComma));
        assert_eq!(up.logical_key(), Some(LogicalKey::OemComma));

        let unmapped = KeyStroke { vk: 0x01, ..down };
        assert_eq!(unmapped.logical_key(), None);
    }

    #[test]
    fn test_window_handle_rejects_null() {
        assert_eq!(WindowHandle::from_raw(0), None);
        assert_eq!(WindowHandle::from_raw(0x1234).map(WindowHandle::as_raw), Some(0x1234));
    }
}
