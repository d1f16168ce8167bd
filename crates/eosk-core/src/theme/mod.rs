//! Theme colour model and palette derivation.
//!
//! The user picks a single accent colour.  Every other colour the UI needs is
//! derived from it with simple per-channel arithmetic:
//!
//! | Slot            | Derivation                               |
//! |-----------------|------------------------------------------|
//! | primary light   | accent with alpha 100                    |
//! | primary mid     | accent                                   |
//! | primary dark    | accent × 0.7                             |
//! | gradient top    | accent × 1.2 (clamped to 255)            |
//! | pressed button  | gradient of accent × 0.8                 |
//!
//! Foreground (text) colours on the light and mid slots switch to black when
//! the accent is bright (`r + g + b > 382`, i.e. above half of 765).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

use crate::settings::{SettingsRecord, ThemeType};

pub mod named_colors;

/// Channel-sum threshold above which text on the accent is drawn black.
const BRIGHTNESS_THRESHOLD: u16 = 382;

/// Alpha applied to the accent for the translucent "light" slot.
const LIGHT_ALPHA: u8 = 100;

const DARK_FACTOR: f64 = 0.7;
const GRADIENT_TOP_FACTOR: f64 = 1.2;
const PRESSED_FACTOR: f64 = 0.8;

/// Error type for colour string parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("colour string is empty")]
    Empty,
    #[error("colour {0:?} is neither a known name nor a #-prefixed hex value")]
    UnknownName(String),
    #[error("hex colour must have 3, 4, 6 or 8 digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digit in colour {0:?}")]
    InvalidDigit(String),
}

/// An opaque 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A colour with an alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Argb {
    /// `#AARRGGBB`, upper-case.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RGB`, `#ARGB`, `#RRGGBB`, `#AARRGGBB`, or a colour name from
    /// [`named_colors`].
    ///
    /// Any alpha component is discarded.
    pub fn parse(s: &str) -> Result<Self, ColorParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }
        let Some(hex) = s.strip_prefix('#') else {
            return named_colors::lookup(s)
                .ok_or_else(|| ColorParseError::UnknownName(s.to_string()));
        };

        if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(s.to_string()));
        }
        let digit = |i: usize| -> Result<u8, ColorParseError> {
            u8::from_str_radix(&hex[i..=i], 16)
                .map(|d| d * 17)
                .map_err(|_| ColorParseError::InvalidDigit(s.to_string()))
        };
        let pair = |i: usize| -> Result<u8, ColorParseError> {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ColorParseError::InvalidDigit(s.to_string()))
        };

        match hex.len() {
            3 => Ok(Self::new(digit(0)?, digit(1)?, digit(2)?)),
            4 => Ok(Self::new(digit(1)?, digit(2)?, digit(3)?)),
            6 => Ok(Self::new(pair(0)?, pair(2)?, pair(4)?)),
            8 => Ok(Self::new(pair(2)?, pair(4)?, pair(6)?)),
            n => Err(ColorParseError::InvalidLength(n)),
        }
    }

    /// Formats as `#RRGGBB` with upper-case digits.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Multiplies every channel by `factor`, truncating and clamping to 0..=255.
    pub fn scale(self, factor: f64) -> Self {
        let ch = |c: u8| (f64::from(c) * factor).clamp(0.0, 255.0) as u8;
        Self::new(ch(self.r), ch(self.g), ch(self.b))
    }

    /// `true` when text drawn on this colour should be black.
    pub fn is_bright(self) -> bool {
        u16::from(self.r) + u16::from(self.g) + u16::from(self.b) > BRIGHTNESS_THRESHOLD
    }

    /// Black on bright colours, white otherwise.
    pub fn contrasting_foreground(self) -> Rgb {
        if self.is_bright() {
            Rgb::BLACK
        } else {
            Rgb::WHITE
        }
    }

    pub const fn with_alpha(self, a: u8) -> Argb {
        Argb { a, r: self.r, g: self.g, b: self.b }
    }

    pub const fn opaque(self) -> Argb {
        self.with_alpha(0xFF)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::parse(s)
    }
}

// ── Palette ───────────────────────────────────────────────────────────────────

/// A background colour and the text colour drawn on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub color: Argb,
    pub foreground: Rgb,
}

/// The primary light/mid/dark slots derived from one accent colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub base: ThemeType,
    pub accent: Rgb,
    pub light: ColorPair,
    pub mid: ColorPair,
    pub dark: ColorPair,
}

impl ThemePalette {
    /// Derives the palette for `accent` on a light base theme.
    pub fn derive(accent: Rgb) -> Self {
        Self::derive_with_base(accent, ThemeType::Light)
    }

    pub fn derive_with_base(accent: Rgb, base: ThemeType) -> Self {
        let foreground = accent.contrasting_foreground();
        Self {
            base,
            accent,
            light: ColorPair {
                color: accent.with_alpha(LIGHT_ALPHA),
                foreground,
            },
            mid: ColorPair {
                color: accent.opaque(),
                foreground,
            },
            dark: ColorPair {
                color: accent.scale(DARK_FACTOR).opaque(),
                foreground: Rgb::WHITE,
            },
        }
    }

    /// Derives the palette described by a settings record.
    ///
    /// An unparseable theme colour falls back to the Purple preset.
    pub fn for_settings(settings: &SettingsRecord) -> Self {
        let accent = Rgb::parse(&settings.theme_color).unwrap_or_else(|e| {
            warn!(
                theme_color = %settings.theme_color,
                "theme colour not usable ({e}); falling back to purple"
            );
            ThemePreset::Purple.color()
        });
        Self::derive_with_base(accent, settings.theme_type)
    }
}

/// A two-stop top-to-bottom gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub top: Rgb,
    pub bottom: Rgb,
}

impl Gradient {
    /// Brightened top stop fading into `color` at the bottom.
    pub fn vertical(color: Rgb) -> Self {
        Self {
            top: color.scale(GRADIENT_TOP_FACTOR),
            bottom: color,
        }
    }
}

/// Backgrounds for the accent-coloured buttons and the title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonPalette {
    pub normal: Gradient,
    pub hover: Gradient,
    pub pressed: Gradient,
}

impl ButtonPalette {
    pub fn derive(accent: Rgb) -> Self {
        let normal = Gradient::vertical(accent);
        Self {
            normal,
            hover: normal,
            pressed: Gradient::vertical(accent.scale(PRESSED_FACTOR)),
        }
    }
}

// ── Presets ───────────────────────────────────────────────────────────────────

/// The accent colours offered by the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    Purple,
    Blue,
    Green,
    Orange,
    Red,
    Pink,
    Indigo,
    Teal,
    Lime,
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 9] = [
        ThemePreset::Purple,
        ThemePreset::Blue,
        ThemePreset::Green,
        ThemePreset::Orange,
        ThemePreset::Red,
        ThemePreset::Pink,
        ThemePreset::Indigo,
        ThemePreset::Teal,
        ThemePreset::Lime,
    ];

    pub const fn color(self) -> Rgb {
        match self {
            ThemePreset::Purple => Rgb::new(0x80, 0x00, 0x80),
            ThemePreset::Blue => Rgb::new(0x00, 0x00, 0xFF),
            ThemePreset::Green => Rgb::new(0x00, 0x80, 0x00),
            ThemePreset::Orange => Rgb::new(0xFF, 0xA5, 0x00),
            ThemePreset::Red => Rgb::new(0xFF, 0x00, 0x00),
            ThemePreset::Pink => Rgb::new(0xFF, 0x14, 0x93),
            ThemePreset::Indigo => Rgb::new(0x4B, 0x00, 0x82),
            ThemePreset::Teal => Rgb::new(0x00, 0x80, 0x80),
            ThemePreset::Lime => Rgb::new(0x32, 0xCD, 0x32),
        }
    }

    /// The named-colour spelling of this preset (`DeepPink`, `LimeGreen`, ...).
    pub const fn color_name(self) -> &'static str {
        match self {
            ThemePreset::Purple => "Purple",
            ThemePreset::Blue => "Blue",
            ThemePreset::Green => "Green",
            ThemePreset::Orange => "Orange",
            ThemePreset::Red => "Red",
            ThemePreset::Pink => "DeepPink",
            ThemePreset::Indigo => "Indigo",
            ThemePreset::Teal => "Teal",
            ThemePreset::Lime => "LimeGreen",
        }
    }

    /// The preset to show as selected for `color`; Purple when none matches.
    pub fn matching(color: Rgb) -> ThemePreset {
        ThemePreset::ALL
            .into_iter()
            .find(|p| p.color() == color)
            .unwrap_or(ThemePreset::Purple)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
