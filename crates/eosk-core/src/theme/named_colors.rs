//! The named colours accepted in `ThemeColor`.
//!
//! These are the 141 names of the WPF `Colors` class (the X11/CSS set plus
//! `Transparent`), so a hand-edited settings file may say `"Crimson"` instead
//! of `"#DC143C"`.  Lookup ignores ASCII case.  `Transparent` is
//! `#00FFFFFF`; its alpha is discarded like every other alpha.

use super::Rgb;

const NAMED_COLORS: [(&str, Rgb); 141] = [
    ("AliceBlue", Rgb::new(0xF0, 0xF8, 0xFF)),
    ("AntiqueWhite", Rgb::new(0xFA, 0xEB, 0xD7)),
    ("Aqua", Rgb::new(0x00, 0xFF, 0xFF)),
    ("Aquamarine", Rgb::new(0x7F, 0xFF, 0xD4)),
    ("Azure", Rgb::new(0xF0, 0xFF, 0xFF)),
    ("Beige", Rgb::new(0xF5, 0xF5, 0xDC)),
    ("Bisque", Rgb::new(0xFF, 0xE4, 0xC4)),
    ("Black", Rgb::new(0x00, 0x00, 0x00)),
    ("BlanchedAlmond", Rgb::new(0xFF, 0xEB, 0xCD)),
    ("Blue", Rgb::new(0x00, 0x00, 0xFF)),
    ("BlueViolet", Rgb::new(0x8A, 0x2B, 0xE2)),
    ("Brown", Rgb::new(0xA5, 0x2A, 0x2A)),
    ("BurlyWood", Rgb::new(0xDE, 0xB8, 0x87)),
    ("CadetBlue", Rgb::new(0x5F, 0x9E, 0xA0)),
    ("Chartreuse", Rgb::new(0x7F, 0xFF, 0x00)),
    ("Chocolate", Rgb::new(0xD2, 0x69, 0x1E)),
    ("Coral", Rgb::new(0xFF, 0x7F, 0x50)),
    ("CornflowerBlue", Rgb::new(0x64, 0x95, 0xED)),
    ("Cornsilk", Rgb::new(0xFF, 0xF8, 0xDC)),
    ("Crimson", Rgb::new(0xDC, 0x14, 0x3C)),
    ("Cyan", Rgb::new(0x00, 0xFF, 0xFF)),
    ("DarkBlue", Rgb::new(0x00, 0x00, 0x8B)),
    ("DarkCyan", Rgb::new(0x00, 0x8B, 0x8B)),
    ("DarkGoldenrod", Rgb::new(0xB8, 0x86, 0x0B)),
    ("DarkGray", Rgb::new(0xA9, 0xA9, 0xA9)),
    ("DarkGreen", Rgb::new(0x00, 0x64, 0x00)),
    ("DarkKhaki", Rgb::new(0xBD, 0xB7, 0x6B)),
    ("DarkMagenta", Rgb::new(0x8B, 0x00, 0x8B)),
    ("DarkOliveGreen", Rgb::new(0x55, 0x6B, 0x2F)),
    ("DarkOrange", Rgb::new(0xFF, 0x8C, 0x00)),
    ("DarkOrchid", Rgb::new(0x99, 0x32, 0xCC)),
    ("DarkRed", Rgb::new(0x8B, 0x00, 0x00)),
    ("DarkSalmon", Rgb::new(0xE9, 0x96, 0x7A)),
    ("DarkSeaGreen", Rgb::new(0x8F, 0xBC, 0x8F)),
    ("DarkSlateBlue", Rgb::new(0x48, 0x3D, 0x8B)),
    ("DarkSlateGray", Rgb::new(0x2F, 0x4F, 0x4F)),
    ("DarkTurquoise", Rgb::new(0x00, 0xCE, 0xD1)),
    ("DarkViolet", Rgb::new(0x94, 0x00, 0xD3)),
    ("DeepPink", Rgb::new(0xFF, 0x14, 0x93)),
    ("DeepSkyBlue", Rgb::new(0x00, 0xBF, 0xFF)),
    ("DimGray", Rgb::new(0x69, 0x69, 0x69)),
    ("DodgerBlue", Rgb::new(0x1E, 0x90, 0xFF)),
    ("Firebrick", Rgb::new(0xB2, 0x22, 0x22)),
    ("FloralWhite", Rgb::new(0xFF, 0xFA, 0xF0)),
    ("ForestGreen", Rgb::new(0x22, 0x8B, 0x22)),
    ("Fuchsia", Rgb::new(0xFF, 0x00, 0xFF)),
    ("Gainsboro", Rgb::new(0xDC, 0xDC, 0xDC)),
    ("GhostWhite", Rgb::new(0xF8, 0xF8, 0xFF)),
    ("Gold", Rgb::new(0xFF, 0xD7, 0x00)),
    ("Goldenrod", Rgb::new(0xDA, 0xA5, 0x20)),
    ("Gray", Rgb::new(0x80, 0x80, 0x80)),
    ("Green", Rgb::new(0x00, 0x80, 0x00)),
    ("GreenYellow", Rgb::new(0xAD, 0xFF, 0x2F)),
    ("Honeydew", Rgb::new(0xF0, 0xFF, 0xF0)),
    ("HotPink", Rgb::new(0xFF, 0x69, 0xB4)),
    ("IndianRed", Rgb::new(0xCD, 0x5C, 0x5C)),
    ("Indigo", Rgb::new(0x4B, 0x00, 0x82)),
    ("Ivory", Rgb::new(0xFF, 0xFF, 0xF0)),
    ("Khaki", Rgb::new(0xF0, 0xE6, 0x8C)),
    ("Lavender", Rgb::new(0xE6, 0xE6, 0xFA)),
    ("LavenderBlush", Rgb::new(0xFF, 0xF0, 0xF5)),
    ("LawnGreen", Rgb::new(0x7C, 0xFC, 0x00)),
    ("LemonChiffon", Rgb::new(0xFF, 0xFA, 0xCD)),
    ("LightBlue", Rgb::new(0xAD, 0xD8, 0xE6)),
    ("LightCoral", Rgb::new(0xF0, 0x80, 0x80)),
    ("LightCyan", Rgb::new(0xE0, 0xFF, 0xFF)),
    ("LightGoldenrodYellow", Rgb::new(0xFA, 0xFA, 0xD2)),
    ("LightGray", Rgb::new(0xD3, 0xD3, 0xD3)),
    ("LightGreen", Rgb::new(0x90, 0xEE, 0x90)),
    ("LightPink", Rgb::new(0xFF, 0xB6, 0xC1)),
    ("LightSalmon", Rgb::new(0xFF, 0xA0, 0x7A)),
    ("LightSeaGreen", Rgb::new(0x20, 0xB2, 0xAA)),
    ("LightSkyBlue", Rgb::new(0x87, 0xCE, 0xFA)),
    ("LightSlateGray", Rgb::new(0x77, 0x88, 0x99)),
    ("LightSteelBlue", Rgb::new(0xB0, 0xC4, 0xDE)),
    ("LightYellow", Rgb::new(0xFF, 0xFF, 0xE0)),
    ("Lime", Rgb::new(0x00, 0xFF, 0x00)),
    ("LimeGreen", Rgb::new(0x32, 0xCD, 0x32)),
    ("Linen", Rgb::new(0xFA, 0xF0, 0xE6)),
    ("Magenta", Rgb::new(0xFF, 0x00, 0xFF)),
    ("Maroon", Rgb::new(0x80, 0x00, 0x00)),
    ("MediumAquamarine", Rgb::new(0x66, 0xCD, 0xAA)),
    ("MediumBlue", Rgb::new(0x00, 0x00, 0xCD)),
    ("MediumOrchid", Rgb::new(0xBA, 0x55, 0xD3)),
    ("MediumPurple", Rgb::new(0x93, 0x70, 0xDB)),
    ("MediumSeaGreen", Rgb::new(0x3C, 0xB3, 0x71)),
    ("MediumSlateBlue", Rgb::new(0x7B, 0x68, 0xEE)),
    ("MediumSpringGreen", Rgb::new(0x00, 0xFA, 0x9A)),
    ("MediumTurquoise", Rgb::new(0x48, 0xD1, 0xCC)),
    ("MediumVioletRed", Rgb::new(0xC7, 0x15, 0x85)),
    ("MidnightBlue", Rgb::new(0x19, 0x19, 0x70)),
    ("MintCream", Rgb::new(0xF5, 0xFF, 0xFA)),
    ("MistyRose", Rgb::new(0xFF, 0xE4, 0xE1)),
    ("Moccasin", Rgb::new(0xFF, 0xE4, 0xB5)),
    ("NavajoWhite", Rgb::new(0xFF, 0xDE, 0xAD)),
    ("Navy", Rgb::new(0x00, 0x00, 0x80)),
    ("OldLace", Rgb::new(0xFD, 0xF5, 0xE6)),
    ("Olive", Rgb::new(0x80, 0x80, 0x00)),
    ("OliveDrab", Rgb::new(0x6B, 0x8E, 0x23)),
    ("Orange", Rgb::new(0xFF, 0xA5, 0x00)),
    ("OrangeRed", Rgb::new(0xFF, 0x45, 0x00)),
    ("Orchid", Rgb::new(0xDA, 0x70, 0xD6)),
    ("PaleGoldenrod", Rgb::new(0xEE, 0xE8, 0xAA)),
    ("PaleGreen", Rgb::new(0x98, 0xFB, 0x98)),
    ("PaleTurquoise", Rgb::new(0xAF, 0xEE, 0xEE)),
    ("PaleVioletRed", Rgb::new(0xDB, 0x70, 0x93)),
    ("PapayaWhip", Rgb::new(0xFF, 0xEF, 0xD5)),
    ("PeachPuff", Rgb::new(0xFF, 0xDA, 0xB9)),
    ("Peru", Rgb::new(0xCD, 0x85, 0x3F)),
    ("Pink", Rgb::new(0xFF, 0xC0, 0xCB)),
    ("Plum", Rgb::new(0xDD, 0xA0, 0xDD)),
    ("PowderBlue", Rgb::new(0xB0, 0xE0, 0xE6)),
    ("Purple", Rgb::new(0x80, 0x00, 0x80)),
    ("Red", Rgb::new(0xFF, 0x00, 0x00)),
    ("RosyBrown", Rgb::new(0xBC, 0x8F, 0x8F)),
    ("RoyalBlue", Rgb::new(0x41, 0x69, 0xE1)),
    ("SaddleBrown", Rgb::new(0x8B, 0x45, 0x13)),
    ("Salmon", Rgb::new(0xFA, 0x80, 0x72)),
    ("SandyBrown", Rgb::new(0xF4, 0xA4, 0x60)),
    ("SeaGreen", Rgb::new(0x2E, 0x8B, 0x57)),
    ("SeaShell", Rgb::new(0xFF, 0xF5, 0xEE)),
    ("Sienna", Rgb::new(0xA0, 0x52, 0x2D)),
    ("Silver", Rgb::new(0xC0, 0xC0, 0xC0)),
    ("SkyBlue", Rgb::new(0x87, 0xCE, 0xEB)),
    ("SlateBlue", Rgb::new(0x6A, 0x5A, 0xCD)),
    ("SlateGray", Rgb::new(0x70, 0x80, 0x90)),
    ("Snow", Rgb::new(0xFF, 0xFA, 0xFA)),
    ("SpringGreen", Rgb::new(0x00, 0xFF, 0x7F)),
    ("SteelBlue", Rgb::new(0x46, 0x82, 0xB4)),
    ("Tan", Rgb::new(0xD2, 0xB4, 0x8C)),
    ("Teal", Rgb::new(0x00, 0x80, 0x80)),
    ("Thistle", Rgb::new(0xD8, 0xBF, 0xD8)),
    ("Tomato", Rgb::new(0xFF, 0x63, 0x47)),
    ("Transparent", Rgb::new(0xFF, 0xFF, 0xFF)),
    ("Turquoise", Rgb::new(0x40, 0xE0, 0xD0)),
    ("Violet", Rgb::new(0xEE, 0x82, 0xEE)),
    ("Wheat", Rgb::new(0xF5, 0xDE, 0xB3)),
    ("White", Rgb::new(0xFF, 0xFF, 0xFF)),
    ("WhiteSmoke", Rgb::new(0xF5, 0xF5, 0xF5)),
    ("Yellow", Rgb::new(0xFF, 0xFF, 0x00)),
    ("YellowGreen", Rgb::new(0x9A, 0xCD, 0x32)),
];

/// The colour called `name`, if it is a known colour name.
pub fn lookup(name: &str) -> Option<Rgb> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, rgb)| rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(lookup("Crimson"), Some(Rgb::new(0xDC, 0x14, 0x3C)));
        assert_eq!(lookup("cornflowerblue"), Some(Rgb::new(0x64, 0x95, 0xED)));
        assert_eq!(lookup("NotAColour"), None);
    }

    #[test]
    fn test_names_are_unique_ignoring_case() {
        for (i, (a, _)) in NAMED_COLORS.iter().enumerate() {
            assert!(
                NAMED_COLORS[i + 1..].iter().all(|(b, _)| !a.eq_ignore_ascii_case(b)),
                "{a} listed twice"
            );
        }
    }

    #[test]
    fn test_pink_is_the_named_colour_not_the_preset() {
        // The "Pink" preset is the named colour DeepPink.
        assert_eq!(lookup("Pink"), Some(Rgb::new(0xFF, 0xC0, 0xCB)));
        assert_eq!(lookup("DeepPink"), Some(Rgb::new(0xFF, 0x14, 0x93)));
    }
}
