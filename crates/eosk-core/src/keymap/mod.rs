//! Logical key catalogue for the on-screen keyboard.
//!
//! Every button on the virtual keyboard carries the *name* of the key it
//! represents (for example `"A"`, `"Enter"` or `"OemComma"`).  The names follow
//! the desktop UI framework's key enumeration so the keyboard layout markup can
//! use them directly.  A name is turned into a [`LogicalKey`] when the button
//! is tapped and into a platform key code only at injection time.
//!
//! # Why not use platform key codes directly? (for beginners)
//!
//! The same physical key has a different number on every platform.  Keeping a
//! platform-neutral enum in the middle means the UI and the settings never see
//! a raw code, and each platform backend owns exactly one translation table
//! (see [`windows_vk`]).

pub mod windows_vk;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a key name does not match any [`LogicalKey`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    /// The name is empty or names no known key.
    #[error("unknown key name: {0:?}")]
    Unknown(String),
}

macro_rules! logical_keys {
    ($($variant:ident),+ $(,)?) => {
        /// A key the on-screen keyboard can press.
        ///
        /// Variant names are the canonical key names; [`LogicalKey::name`]
        /// returns them verbatim and [`FromStr`] accepts them back.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum LogicalKey {
            $($variant),+
        }

        impl LogicalKey {
            /// Every key, in declaration order.
            pub const ALL: &'static [LogicalKey] = &[$(LogicalKey::$variant),+];

            /// Canonical name of this key.
            pub const fn name(self) -> &'static str {
                match self {
                    $(LogicalKey::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

logical_keys! {
    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    // Digit row
    D0, D1, D2, D3, D4, D5, D6, D7, D8, D9,
    // Function row
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    F13, F14, F15, F16, F17, F18, F19, F20, F21, F22, F23, F24,
    // Numeric keypad
    NumPad0, NumPad1, NumPad2, NumPad3, NumPad4,
    NumPad5, NumPad6, NumPad7, NumPad8, NumPad9,
    Multiply, Add, Separator, Subtract, Decimal, Divide,
    // Editing and control
    Back, Tab, Enter, Pause, CapsLock, Escape, Space,
    PrintScreen, Insert, Delete,
    // Navigation
    PageUp, PageDown, End, Home, Left, Up, Right, Down,
    // System
    LWin, RWin, Apps, NumLock, Scroll,
    // Modifiers
    LeftShift, RightShift, LeftCtrl, RightCtrl, LeftAlt, RightAlt,
    // Media
    VolumeMute, VolumeDown, VolumeUp,
    MediaNextTrack, MediaPreviousTrack, MediaStop, MediaPlayPause,
    // Punctuation (US layout positions)
    OemSemicolon, OemPlus, OemComma, OemMinus, OemPeriod, OemQuestion,
    OemTilde, OemOpenBrackets, OemPipe, OemCloseBrackets, OemQuotes, OemBackslash,
}

/// Alternative names the UI framework defines for the same key.
const ALIASES: &[(&str, LogicalKey)] = &[
    ("Return", LogicalKey::Enter),
    ("Capital", LogicalKey::CapsLock),
    ("Prior", LogicalKey::PageUp),
    ("Next", LogicalKey::PageDown),
    ("Snapshot", LogicalKey::PrintScreen),
    ("Oem1", LogicalKey::OemSemicolon),
    ("Oem2", LogicalKey::OemQuestion),
    ("Oem3", LogicalKey::OemTilde),
    ("Oem4", LogicalKey::OemOpenBrackets),
    ("Oem5", LogicalKey::OemPipe),
    ("Oem6", LogicalKey::OemCloseBrackets),
    ("Oem7", LogicalKey::OemQuotes),
    ("Oem102", LogicalKey::OemBackslash),
];

impl LogicalKey {
    /// Translates this key to its Windows Virtual Key code.
    ///
    /// Every logical key has a mapping, so the result is never zero.
    pub const fn to_windows_vk(self) -> u8 {
        windows_vk::key_to_vk(self)
    }

    /// Returns `true` for keys that live in the extended part of the keyboard
    /// and must be injected with the extended-key flag.
    pub const fn is_extended(self) -> bool {
        matches!(
            self,
            LogicalKey::PageUp
                | LogicalKey::PageDown
                | LogicalKey::End
                | LogicalKey::Home
                | LogicalKey::Left
                | LogicalKey::Up
                | LogicalKey::Right
                | LogicalKey::Down
                | LogicalKey::Insert
                | LogicalKey::Delete
                | LogicalKey::LWin
                | LogicalKey::RWin
                | LogicalKey::Apps
                | LogicalKey::RightCtrl
                | LogicalKey::RightAlt
                | LogicalKey::Divide
                | LogicalKey::NumLock
                | LogicalKey::PrintScreen
        )
    }
}

impl fmt::Display for LogicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogicalKey {
    type Err = KeyParseError;

    /// Parses a key name.
    ///
    /// Exact canonical names and aliases win; otherwise an ASCII
    /// case-insensitive match is attempted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();

        let exact = LogicalKey::ALL
            .iter()
            .copied()
            .find(|k| k.name() == name)
            .or_else(|| ALIASES.iter().find(|(a, _)| *a == name).map(|(_, k)| *k));
        if let Some(key) = exact {
            return Ok(key);
        }

        LogicalKey::ALL
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(name))
            .or_else(|| {
                ALIASES
                    .iter()
                    .find(|(a, _)| a.eq_ignore_ascii_case(name))
                    .map(|(_, k)| *k)
            })
            .ok_or_else(|| KeyParseError::Unknown(s.to_string()))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
