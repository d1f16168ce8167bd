//! The persisted settings record and its repair rules.
//!
//! `settings.json` holds a single flat object:
//!
//! ```json
//! {
//!   "ThemeColor": "#673AB7",
//!   "AutoStart": false,
//!   "EnableSound": true,
//!   "Volume": 0,
//!   "ThemeType": "Light"
//! }
//! ```
//!
//! # Lenient reading
//!
//! The file is hand-editable, so reading is forgiving.  It goes through a
//! private wire struct (`RawSettings`) that keeps every value as raw JSON
//! until it is converted field by field:
//!
//! - keys match ignoring ASCII case (`themeType` is `ThemeType`); when both
//!   spellings are present the exact PascalCase key wins;
//! - missing or `null` fields take the record's field initialisers
//!   (`EnableSound` defaults to `true`, the others to `false`/`0`/empty);
//! - booleans and integers written as strings (`"true"`, `"40"`) are
//!   converted, as are integral numbers for booleans (non-zero is `true`);
//! - a value that cannot be converted takes the field initialiser and is
//!   reported as [`RepairedField::Unconvertible`];
//! - unknown fields are ignored;
//! - an empty or non-string `ThemeColor` is replaced by [`DEFAULT_THEME_COLOR`];
//! - a `ThemeType` other than exactly `"Light"` or `"Dark"` becomes `Light`.
//!
//! Only a document that is not a JSON object at all is rejected, and the
//! caller then substitutes [`SettingsRecord::default`].

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Accent colour used when none is configured (Material deep purple).
pub const DEFAULT_THEME_COLOR: &str = "#673AB7";

/// Error type for settings document parsing.
#[derive(Debug, Error)]
pub enum SettingsParseError {
    /// The document is empty, whitespace only, or the JSON literal `null`.
    #[error("settings document is empty")]
    Empty,

    /// The document is not a valid settings object.
    #[error("malformed settings JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Base brightness of the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ThemeType {
    #[default]
    Light,
    Dark,
}

impl ThemeType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeType::Light => "Light",
            ThemeType::Dark => "Dark",
        }
    }

    /// Exact, case-sensitive match on `"Light"` / `"Dark"`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Light" => Some(ThemeType::Light),
            "Dark" => Some(ThemeType::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for ThemeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User preferences persisted to `settings.json`.
///
/// Field order matches the on-disk key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SettingsRecord {
    /// Accent colour as a hex string (normally `#RRGGBB`).
    pub theme_color: String,
    /// Whether the app should start with the user session.  Persisted only.
    pub auto_start: bool,
    /// Whether key taps play a click sound.
    pub enable_sound: bool,
    /// Click volume.  No range is enforced on disk.
    pub volume: i32,
    /// Light or dark base theme.
    pub theme_type: ThemeType,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            auto_start: false,
            enable_sound: true,
            volume: 0,
            theme_type: ThemeType::Light,
        }
    }
}

/// A field that was replaced by its default while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairedField {
    ThemeColor,
    ThemeType { found: Option<String> },
    /// A boolean or integer field held a value of another JSON type.
    Unconvertible { field: &'static str, found: String },
}

impl fmt::Display for RepairedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepairedField::ThemeColor => f.write_str("ThemeColor was empty"),
            RepairedField::ThemeType { found: Some(v) } => {
                write!(f, "ThemeType {v:?} is not Light or Dark")
            }
            RepairedField::ThemeType { found: None } => f.write_str("ThemeType was missing"),
            RepairedField::Unconvertible { field, found } => {
                write!(f, "{field} value {found} could not be converted")
            }
        }
    }
}

/// Keys of the settings document, in file order.
const FIELD_NAMES: [&str; 5] = ["ThemeColor", "AutoStart", "EnableSound", "Volume", "ThemeType"];

/// Wire form of the settings file; each field holds the raw JSON value, if any.
#[derive(Debug, Default)]
struct RawSettings {
    theme_color: Option<Value>,
    auto_start: Option<Value>,
    enable_sound: Option<Value>,
    volume: Option<Value>,
    theme_type: Option<Value>,
}

impl RawSettings {
    fn from_object(object: Map<String, Value>) -> Self {
        let mut entries: Vec<(String, Value)> = object.into_iter().collect();
        // Exact keys last so they overwrite other spellings of the same field.
        entries.sort_by_key(|(key, _)| FIELD_NAMES.contains(&key.as_str()));

        let mut raw = Self::default();
        for (key, value) in entries {
            let slot = match key.to_ascii_lowercase().as_str() {
                "themecolor" => &mut raw.theme_color,
                "autostart" => &mut raw.auto_start,
                "enablesound" => &mut raw.enable_sound,
                "volume" => &mut raw.volume,
                "themetype" => &mut raw.theme_type,
                _ => continue,
            };
            *slot = Some(value).filter(|v| !v.is_null());
        }
        raw
    }

    fn into_record(self) -> (SettingsRecord, Vec<RepairedField>) {
        let mut repaired = Vec::new();

        let theme_type = match self.theme_type {
            Some(Value::String(name)) => ThemeType::from_name(&name).unwrap_or_else(|| {
                repaired.push(RepairedField::ThemeType { found: Some(name) });
                ThemeType::Light
            }),
            other => {
                repaired.push(RepairedField::ThemeType {
                    found: other.map(|v| v.to_string()),
                });
                ThemeType::Light
            }
        };

        let theme_color = match self.theme_color {
            Some(Value::String(color)) => color,
            // Anything else is treated as empty and repaired below.
            _ => String::new(),
        };

        let mut record = SettingsRecord {
            theme_color,
            auto_start: convert(self.auto_start, "AutoStart", false, as_bool, &mut repaired),
            enable_sound: convert(self.enable_sound, "EnableSound", true, as_bool, &mut repaired),
            volume: convert(self.volume, "Volume", 0, as_i32, &mut repaired),
            theme_type,
        };
        repaired.extend(validate_and_repair(&mut record));
        (record, repaired)
    }
}

fn convert<T>(
    value: Option<Value>,
    field: &'static str,
    initial: T,
    conversion: fn(&Value) -> Option<T>,
    repaired: &mut Vec<RepairedField>,
) -> T {
    let Some(value) = value else {
        return initial;
    };
    conversion(&value).unwrap_or_else(|| {
        repaired.push(RepairedField::Unconvertible {
            field,
            found: value.to_string(),
        });
        initial
    })
}

fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        Value::String(s) => {
            let s = s.trim();
            if s.eq_ignore_ascii_case("true") {
                Some(true)
            } else if s.eq_ignore_ascii_case("false") {
                Some(false)
            } else {
                None
            }
        }
        _ => None,
    }
}

fn as_i32(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i32::try_from(i).ok(),
            None => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(f))
                .map(|f| f as i32),
        },
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl SettingsRecord {
    /// Parses a settings document, repairing invalid fields.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsParseError::Empty`] for an empty document or `null`,
    /// and [`SettingsParseError::Malformed`] for anything that is not a
    /// settings object.
    pub fn from_json(json: &str) -> Result<Self, SettingsParseError> {
        Self::from_json_with_repairs(json).map(|(record, _)| record)
    }

    /// Like [`SettingsRecord::from_json`], also reporting which fields were
    /// replaced by defaults.
    ///
    /// # Errors
    ///
    /// See [`SettingsRecord::from_json`].
    pub fn from_json_with_repairs(
        json: &str,
    ) -> Result<(Self, Vec<RepairedField>), SettingsParseError> {
        if json.trim().is_empty() {
            return Err(SettingsParseError::Empty);
        }
        let object: Option<Map<String, Value>> = serde_json::from_str(json)?;
        object
            .map(|o| RawSettings::from_object(o).into_record())
            .ok_or(SettingsParseError::Empty)
    }

    /// Serializes to indented JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying serializer error; this does not happen for
    /// records built through this module.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Replaces invalid fields of `record` with their defaults.
///
/// Returns the fields that were changed; an empty list means the record was
/// already valid.
pub fn validate_and_repair(record: &mut SettingsRecord) -> Vec<RepairedField> {
    let mut repaired = Vec::new();
    if record.theme_color.is_empty() {
        record.theme_color = DEFAULT_THEME_COLOR.to_string();
        repaired.push(RepairedField::ThemeColor);
    }
    repaired
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_matches_documented_defaults() {
        let r = SettingsRecord::default();

        assert_eq!(r.theme_color, "#673AB7");
        assert_eq!(r.theme_type, ThemeType::Light);
        assert!(!r.auto_start);
        assert!(r.enable_sound);
        assert_eq!(r.volume, 0);
    }

    #[test]
    fn test_serialized_keys_are_pascal_case_in_file_order() {
        // Act
        let json = SettingsRecord::default().to_json_pretty().expect("serialize");

        // Assert
        let positions: Vec<usize> = ["ThemeColor", "AutoStart", "EnableSound", "Volume", "ThemeType"]
            .iter()
            .map(|k| json.find(&format!("\"{k}\"")).expect("key present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "keys out of order: {json}");
        assert!(json.contains("\"ThemeType\": \"Light\""));
        assert!(json.contains('\n'), "output must be indented");
    }

    #[test]
    fn test_parse_full_document() {
        let json = r##"{
            "ThemeColor": "#FF5722",
            "AutoStart": true,
            "EnableSound": false,
            "Volume": 40,
            "ThemeType": "Dark"
        }"##;

        let r = SettingsRecord::from_json(json).expect("parse");

        assert_eq!(
            r,
            SettingsRecord {
                theme_color: "#FF5722".to_string(),
                auto_start: true,
                enable_sound: false,
                volume: 40,
                theme_type: ThemeType::Dark,
            }
        );
    }

    #[test]
    fn test_invalid_theme_type_is_repaired_to_light() {
        let json = r##"{ "ThemeColor": "#673AB7", "ThemeType": "Purple" }"##;

        let (r, repaired) = SettingsRecord::from_json_with_repairs(json).expect("parse");

        assert_eq!(r.theme_type, ThemeType::Light);
        assert_eq!(
            repaired,
            vec![RepairedField::ThemeType { found: Some("Purple".to_string()) }]
        );
    }

    #[test]
    fn test_non_string_theme_type_is_repaired_and_other_fields_kept() {
        let json = r##"{ "ThemeColor": "#112233", "AutoStart": true, "Volume": 40, "ThemeType": 1 }"##;

        let (r, repaired) = SettingsRecord::from_json_with_repairs(json).expect("parse");

        assert_eq!(r.theme_type, ThemeType::Light);
        assert_eq!(r.theme_color, "#112233");
        assert!(r.auto_start);
        assert_eq!(r.volume, 40);
        assert_eq!(repaired, vec![RepairedField::ThemeType { found: Some("1".to_string()) }]);
    }

    #[test]
    fn test_non_string_theme_color_is_repaired_to_default() {
        for value in ["true", "{}", "[]", "7"] {
            let json = format!(r#"{{ "ThemeColor": {value}, "ThemeType": "Dark", "Volume": 9 }}"#);

            let (r, repaired) = SettingsRecord::from_json_with_repairs(&json).expect("parse");

            assert_eq!(r.theme_color, DEFAULT_THEME_COLOR, "ThemeColor {value}");
            assert_eq!(r.theme_type, ThemeType::Dark);
            assert_eq!(r.volume, 9);
            assert_eq!(repaired, vec![RepairedField::ThemeColor]);
        }
    }

    #[test]
    fn test_keys_match_ignoring_case() {
        let json = r##"{ "themeColor": "#112233", "themeType": "Dark", "volume": 40, "ENABLESOUND": false }"##;

        let r = SettingsRecord::from_json(json).expect("parse");

        assert_eq!(r.theme_color, "#112233");
        assert_eq!(r.theme_type, ThemeType::Dark);
        assert_eq!(r.volume, 40);
        assert!(!r.enable_sound);
    }

    #[test]
    fn test_exact_key_wins_over_other_spelling() {
        let json = r#"{ "volume": 1, "Volume": 2, "VOLUME": 3 }"#;

        let r = SettingsRecord::from_json(json).expect("parse");

        assert_eq!(r.volume, 2);
    }

    #[test]
    fn test_string_scalars_are_converted() {
        let json = r#"{ "AutoStart": "True", "EnableSound": 0, "Volume": " 35 " }"#;

        let r = SettingsRecord::from_json(json).expect("parse");

        assert!(r.auto_start);
        assert!(!r.enable_sound);
        assert_eq!(r.volume, 35);
    }

    #[test]
    fn test_unconvertible_scalars_take_initialisers() {
        let json = r##"{ "ThemeColor": "#008080", "ThemeType": "Dark", "AutoStart": "soon", "Volume": "loud", "EnableSound": [] }"##;

        let (r, repaired) = SettingsRecord::from_json_with_repairs(json).expect("parse");

        assert_eq!(r.theme_color, "#008080");
        assert_eq!(r.theme_type, ThemeType::Dark);
        assert!(!r.auto_start);
        assert!(r.enable_sound);
        assert_eq!(r.volume, 0);
        assert_eq!(
            repaired,
            vec![
                RepairedField::Unconvertible { field: "AutoStart", found: "\"soon\"".to_string() },
                RepairedField::Unconvertible { field: "EnableSound", found: "[]".to_string() },
                RepairedField::Unconvertible { field: "Volume", found: "\"loud\"".to_string() },
            ]
        );
    }

    #[test]
    fn test_volume_outside_i32_is_unconvertible() {
        let (r, repaired) =
            SettingsRecord::from_json_with_repairs(r#"{ "Volume": 4294967296, "ThemeType": "Light", "ThemeColor": "Teal" }"#)
                .expect("parse");

        assert_eq!(r.volume, 0);
        assert_eq!(repaired.len(), 1);
    }

    #[test]
    fn test_theme_type_match_is_case_sensitive() {
        let r = SettingsRecord::from_json(r#"{ "ThemeType": "dark" }"#).expect("parse");
        assert_eq!(r.theme_type, ThemeType::Light);
    }

    #[test]
    fn test_empty_theme_color_is_repaired_to_default() {
        let json = r#"{ "ThemeColor": "", "ThemeType": "Dark" }"#;

        let (r, repaired) = SettingsRecord::from_json_with_repairs(json).expect("parse");

        assert_eq!(r.theme_color, DEFAULT_THEME_COLOR);
        assert_eq!(r.theme_type, ThemeType::Dark);
        assert_eq!(repaired, vec![RepairedField::ThemeColor]);
    }

    #[test]
    fn test_missing_fields_take_field_initialisers() {
        let (r, repaired) = SettingsRecord::from_json_with_repairs("{}").expect("parse");

        assert_eq!(r, SettingsRecord::default());
        assert_eq!(repaired.len(), 2);
    }

    #[test]
    fn test_null_fields_behave_like_missing_ones() {
        let json = r#"{ "ThemeColor": null, "EnableSound": null, "Volume": null, "ThemeType": null }"#;

        let r = SettingsRecord::from_json(json).expect("parse");

        assert_eq!(r, SettingsRecord::default());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r##"{ "$id": "1", "ThemeColor": "#2196F3", "ThemeType": "Light", "Language": "zh-CN" }"##;

        let r = SettingsRecord::from_json(json).expect("parse");

        assert_eq!(r.theme_color, "#2196F3");
    }

    #[test]
    fn test_volume_is_not_range_checked() {
        let r = SettingsRecord::from_json(r#"{ "Volume": -250 }"#).expect("parse");
        assert_eq!(r.volume, -250);
    }

    #[test]
    fn test_empty_and_null_documents_are_empty_errors() {
        for doc in ["", "   \n", "null"] {
            assert!(
                matches!(SettingsRecord::from_json(doc), Err(SettingsParseError::Empty)),
                "{doc:?} must be Empty"
            );
        }
    }

    #[test]
    fn test_malformed_documents_are_rejected() {
        for doc in ["{ not json", "[1, 2]", "42", "\"Light\""] {
            assert!(
                matches!(SettingsRecord::from_json(doc), Err(SettingsParseError::Malformed(_))),
                "{doc:?} must be Malformed"
            );
        }
    }

    #[test]
    fn test_valid_record_survives_serialize_then_parse() {
        let original = SettingsRecord {
            theme_color: "#008080".to_string(),
            auto_start: true,
            enable_sound: false,
            volume: 73,
            theme_type: ThemeType::Dark,
        };

        let json = original.to_json_pretty().expect("serialize");
        let (parsed, repaired) = SettingsRecord::from_json_with_repairs(&json).expect("parse");

        assert_eq!(parsed, original);
        assert!(repaired.is_empty());
    }

    #[test]
    fn test_validate_leaves_valid_record_untouched() {
        let mut r = SettingsRecord::default();
        assert!(validate_and_repair(&mut r).is_empty());
        assert_eq!(r, SettingsRecord::default());
    }
}
