//! Sentinel configuration.
//!
//! A [`Sentinels`] value carries the two replacement values used by the cleaner: one for
//! string columns, one for numeric columns. It can be built in code, loaded from JSON, or
//! taken from [`Sentinels::default`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CleaningResult;

fn default_string_null_value() -> String {
    "DESCONHECIDO".to_string()
}

/// Replacement values substituted for null-like cells.
///
/// Both fields default when missing from a JSON config, so a partial config like
/// `{"numeric_null_value": -1}` is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentinels {
    /// Replacement for null or special-characters-only cells in string columns.
    ///
    /// Used verbatim; may be empty. Note that a sentinel without any alphanumeric character
    /// makes cleaning non-idempotent, since a second pass would replace it again.
    #[serde(default = "default_string_null_value")]
    pub string_null_value: String,

    /// Replacement for null cells in numeric columns, coerced to each column's type.
    #[serde(default)]
    pub numeric_null_value: f64,
}

impl Default for Sentinels {
    fn default() -> Self {
        Self {
            string_null_value: default_string_null_value(),
            numeric_null_value: 0.0,
        }
    }
}

impl Sentinels {
    /// Create a sentinel pair from explicit values.
    pub fn new(string_null_value: impl Into<String>, numeric_null_value: f64) -> Self {
        Self {
            string_null_value: string_null_value.into(),
            numeric_null_value,
        }
    }

    /// Load a sentinel pair from a JSON file.
    ///
    /// Missing fields fall back to the defaults (`"DESCONHECIDO"` / `0`).
    pub fn from_json_path(path: impl AsRef<Path>) -> CleaningResult<Self> {
        let bytes = fs::read(path.as_ref())?;
        let sentinels = serde_json::from_slice(&bytes)?;
        Ok(sentinels)
    }
}

#[cfg(test)]
mod tests {
    use super::Sentinels;

    #[test]
    fn default_sentinels() {
        let s = Sentinels::default();
        assert_eq!(s.string_null_value, "DESCONHECIDO");
        assert_eq!(s.numeric_null_value, 0.0);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let s: Sentinels = serde_json::from_str(r#"{"numeric_null_value": -1}"#).unwrap();
        assert_eq!(s.string_null_value, "DESCONHECIDO");
        assert_eq!(s.numeric_null_value, -1.0);

        let s: Sentinels = serde_json::from_str(r#"{"string_null_value": "N/A"}"#).unwrap();
        assert_eq!(s.string_null_value, "N/A");
        assert_eq!(s.numeric_null_value, 0.0);

        let s: Sentinels = serde_json::from_str("{}").unwrap();
        assert_eq!(s, Sentinels::default());
    }

    #[test]
    fn json_round_trip() {
        let s = Sentinels::new("UNKNOWN", -1.0);
        let json = serde_json::to_string(&s).unwrap();
        let back: Sentinels = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
