//! Windows Virtual Key (VK) code translation table.
//!
//! Reference: Windows Virtual-Key Codes (winuser.h).
//! Windows VK codes range from 0x00 to 0xFF.
//!
//! # What is a Windows Virtual Key (VK) code? (for beginners)
//!
//! Windows assigns each keyboard key a number called a "Virtual Key code".
//! These are defined in `<winuser.h>` and named `VK_*` (e.g., `VK_RETURN = 0x0D`,
//! `VK_SPACE = 0x20`).  They are "virtual" because they represent *logical* keys
//! rather than physical scan codes.  `SendInput` accepts a VK code directly, so
//! the injector never needs to know the hardware scan code.
//!
//! # How this table works
//!
//! [`key_to_vk`] is a `const fn` match, the single source of truth.
//! `VK_TO_KEY_TABLE` is derived from it at compile time by walking
//! [`LogicalKey::ALL`], so the two directions can never disagree.

use super::LogicalKey;

/// Translates a [`LogicalKey`] to its Windows Virtual Key code.
pub const fn key_to_vk(key: LogicalKey) -> u8 {
    use LogicalKey::*;
    match key {
        // ── Alphabet keys (VK_A=0x41 … VK_Z=0x5A) ────────────────────────────
        A => 0x41,
        B => 0x42,
        C => 0x43,
        D => 0x44,
        E => 0x45,
        F => 0x46,
        G => 0x47,
        H => 0x48,
        I => 0x49,
        J => 0x4A,
        K => 0x4B,
        L => 0x4C,
        M => 0x4D,
        N => 0x4E,
        O => 0x4F,
        P => 0x50,
        Q => 0x51,
        R => 0x52,
        S => 0x53,
        T => 0x54,
        U => 0x55,
        V => 0x56,
        W => 0x57,
        X => 0x58,
        Y => 0x59,
        Z => 0x5A,

        // ── Digit row (VK_0=0x30 … VK_9=0x39) ───────────────────────────────
        D0 => 0x30,
        D1 => 0x31,
        D2 => 0x32,
        D3 => 0x33,
        D4 => 0x34,
        D5 => 0x35,
        D6 => 0x36,
        D7 => 0x37,
        D8 => 0x38,
        D9 => 0x39,

        // ── Function keys (VK_F1=0x70 … VK_F24=0x87) ────────────────────────
        F1 => 0x70,
        F2 => 0x71,
        F3 => 0x72,
        F4 => 0x73,
        F5 => 0x74,
        F6 => 0x75,
        F7 => 0x76,
        F8 => 0x77,
        F9 => 0x78,
        F10 => 0x79,
        F11 => 0x7A,
        F12 => 0x7B,
        F13 => 0x7C,
        F14 => 0x7D,
        F15 => 0x7E,
        F16 => 0x7F,
        F17 => 0x80,
        F18 => 0x81,
        F19 => 0x82,
        F20 => 0x83,
        F21 => 0x84,
        F22 => 0x85,
        F23 => 0x86,
        F24 => 0x87,

        // ── Numpad ────────────────────────────────────────────────────────────
        NumPad0 => 0x60,
        NumPad1 => 0x61,
        NumPad2 => 0x62,
        NumPad3 => 0x63,
        NumPad4 => 0x64,
        NumPad5 => 0x65,
        NumPad6 => 0x66,
        NumPad7 => 0x67,
        NumPad8 => 0x68,
        NumPad9 => 0x69,
        Multiply => 0x6A,
        Add => 0x6B,
        Separator => 0x6C,
        Subtract => 0x6D,
        Decimal => 0x6E,
        Divide => 0x6F,

        // ── Control keys ─────────────────────────────────────────────────────
        Back => 0x08,
        Tab => 0x09,
        Enter => 0x0D,       // VK_RETURN
        Pause => 0x13,
        CapsLock => 0x14,    // VK_CAPITAL
        Escape => 0x1B,
        Space => 0x20,
        PrintScreen => 0x2C, // VK_SNAPSHOT
        Insert => 0x2D,
        Delete => 0x2E,

        // ── Navigation ───────────────────────────────────────────────────────
        PageUp => 0x21,   // VK_PRIOR
        PageDown => 0x22, // VK_NEXT
        End => 0x23,
        Home => 0x24,
        Left => 0x25,
        Up => 0x26,
        Right => 0x27,
        Down => 0x28,

        // ── System ───────────────────────────────────────────────────────────
        LWin => 0x5B,
        RWin => 0x5C,
        Apps => 0x5D,
        NumLock => 0x90,
        Scroll => 0x91,

        // ── Modifier keys (sided) ────────────────────────────────────────────
        LeftShift => 0xA0,
        RightShift => 0xA1,
        LeftCtrl => 0xA2,
        RightCtrl => 0xA3,
        LeftAlt => 0xA4,  // VK_LMENU
        RightAlt => 0xA5, // VK_RMENU

        // ── Media ────────────────────────────────────────────────────────────
        VolumeMute => 0xAD,
        VolumeDown => 0xAE,
        VolumeUp => 0xAF,
        MediaNextTrack => 0xB0,
        MediaPreviousTrack => 0xB1,
        MediaStop => 0xB2,
        MediaPlayPause => 0xB3,

        // ── OEM punctuation ──────────────────────────────────────────────────
        OemSemicolon => 0xBA,     // VK_OEM_1
        OemPlus => 0xBB,
        OemComma => 0xBC,
        OemMinus => 0xBD,
        OemPeriod => 0xBE,
        OemQuestion => 0xBF,      // VK_OEM_2
        OemTilde => 0xC0,         // VK_OEM_3
        OemOpenBrackets => 0xDB,  // VK_OEM_4
        OemPipe => 0xDC,          // VK_OEM_5
        OemCloseBrackets => 0xDD, // VK_OEM_6
        OemQuotes => 0xDE,        // VK_OEM_7
        OemBackslash => 0xE2,     // VK_OEM_102
    }
}

/// Translates a Windows Virtual Key code back to a [`LogicalKey`].
///
/// Returns `None` for VK codes the on-screen keyboard does not show
/// (mouse buttons, IME keys, browser keys, and unassigned codes).
pub fn vk_to_key(vk: u8) -> Option<LogicalKey> {
    VK_TO_KEY_TABLE[vk as usize]
}

/// Reverse table indexed by VK code (0x00–0xFF), built from [`key_to_vk`].
const VK_TO_KEY_TABLE: [Option<LogicalKey>; 256] = {
    let mut t = [None; 256];
    let mut i = 0;
    while i < LogicalKey::ALL.len() {
        let key = LogicalKey::ALL[i];
        t[key_to_vk(key) as usize] = Some(key);
        i += 1;
    }
    t
};

// ── Tests ─────────────────────────────────────────────────────────────────────
