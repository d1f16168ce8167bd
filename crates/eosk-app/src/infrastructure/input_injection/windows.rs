//! Windows key injection via the SendInput API.
//!
//! Each [`KeyStroke`] becomes one `KEYBDINPUT` carrying the stroke's Virtual
//! Key code.  The scan code is left at 0 so Windows derives it from the VK,
//! and keys in the extended block carry `KEYEVENTF_EXTENDEDKEY`.

#![cfg(target_os = "windows")]

use std::ffi::c_void;

use eosk_core::{KeyStroke, WindowHandle};
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, KEYBDINPUT, KEYBD_EVENT_FLAGS,
    KEYEVENTF_EXTENDEDKEY, KEYEVENTF_KEYUP, VIRTUAL_KEY,
};
use windows::Win32::UI::WindowsAndMessaging::{GetForegroundWindow, SetForegroundWindow};

use crate::application::press_key::{InjectionError, PlatformKeyInjector};

/// Windows implementation of [`PlatformKeyInjector`] using SendInput.
pub struct WindowsKeyInjector;

impl WindowsKeyInjector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsKeyInjector {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformKeyInjector for WindowsKeyInjector {
    fn foreground_window(&self) -> Option<WindowHandle> {
        // SAFETY: GetForegroundWindow has no preconditions and may return null
        let hwnd = unsafe { GetForegroundWindow() };
        WindowHandle::from_raw(hwnd.0 as isize)
    }

    fn set_foreground_window(&self, window: WindowHandle) -> Result<(), InjectionError> {
        let hwnd = HWND(window.as_raw() as *mut c_void);
        // SAFETY: a stale handle makes the call fail, it is never dereferenced here
        let accepted = unsafe { SetForegroundWindow(hwnd) };
        if accepted.as_bool() {
            Ok(())
        } else {
            Err(InjectionError::ForegroundRefused(window.as_raw()))
        }
    }

    fn send_strokes(&self, strokes: &[KeyStroke]) -> Result<u32, InjectionError> {
        let inputs: Vec<INPUT> = strokes.iter().map(to_input).collect();
        // SAFETY: inputs is a valid slice of keyboard INPUT structures
        let sent = unsafe { SendInput(&inputs, std::mem::size_of::<INPUT>() as i32) };
        if sent == 0 && !inputs.is_empty() {
            // SendInput returns 0 when the input was blocked by another thread
            // or by UIPI; the reason is only in the thread's last error.
            let err = windows::core::Error::from_win32();
            return Err(InjectionError::Platform(err.message().to_string()));
        }
        Ok(sent)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn to_input(stroke: &KeyStroke) -> INPUT {
    let mut flags = KEYBD_EVENT_FLAGS(0);
    if stroke.extended {
        flags |= KEYEVENTF_EXTENDEDKEY;
    }
    if stroke.key_up {
        flags |= KEYEVENTF_KEYUP;
    }

    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: VIRTUAL_KEY(u16::from(stroke.vk)),
                wScan: stroke.scan_code,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: stroke.extra_info,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eosk_core::{synthesize_press, LogicalKey};

    fn keyboard_part(input: &INPUT) -> KEYBDINPUT {
        assert_eq!(input.r#type, INPUT_KEYBOARD);
        // SAFETY: r#type was checked to be INPUT_KEYBOARD
        unsafe { input.Anonymous.ki }
    }

    #[test]
    fn test_to_input_sets_keyup_only_on_release() {
        let [down, up] = synthesize_press(LogicalKey::A);

        let down = keyboard_part(&to_input(&down));
        let up = keyboard_part(&to_input(&up));

        assert_eq!(down.wVk, VIRTUAL_KEY(0x41));
        assert_eq!(down.dwFlags, KEYBD_EVENT_FLAGS(0));
        assert_eq!(up.dwFlags, KEYEVENTF_KEYUP);
        assert_eq!(up.wScan, 0);
    }

    #[test]
    fn test_to_input_marks_extended_keys() {
        let [down, up] = synthesize_press(LogicalKey::Delete);

        let down = keyboard_part(&to_input(&down));
        let up = keyboard_part(&to_input(&up));

        assert_eq!(down.dwFlags, KEYEVENTF_EXTENDEDKEY);
        assert_eq!(up.dwFlags, KEYEVENTF_EXTENDEDKEY | KEYEVENTF_KEYUP);
    }
}
