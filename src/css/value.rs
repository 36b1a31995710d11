//! Input values: a style property's raw number or string.

use std::fmt;

use serde::Deserialize;

/// A raw property value as written by the application author.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A bare number like `10` or `0.5`. Lengths are read as pixels.
    Number(f32),
    /// A CSS-syntax string like `"50%"` or `"1px 2px"`.
    String(String),
}

/// The base type of a [`StyleValue`], used in type-mismatch errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    String,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Number => f.write_str("number"),
            ValueKind::String => f.write_str("string"),
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{n}"),
            StyleValue::String(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<f32> for StyleValue {
    fn from(n: f32) -> Self {
        StyleValue::Number(n)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n as f32)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(n as f32)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::String(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::String(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display() {
        assert_eq!(ValueKind::Number.to_string(), "number");
        assert_eq!(ValueKind::String.to_string(), "string");
    }

    #[test]
    fn display_quotes_strings() {
        assert_eq!(StyleValue::from("auto").to_string(), "\"auto\"");
        assert_eq!(StyleValue::from(2.5f32).to_string(), "2.5");
    }

    #[test]
    fn deserialize_untagged() {
        let n: StyleValue = serde_json::from_str("12").unwrap();
        assert_eq!(n, StyleValue::Number(12.0));
        let s: StyleValue = serde_json::from_str("\"12px\"").unwrap();
        assert_eq!(s, StyleValue::String("12px".into()));
    }

    #[test]
    fn deserialize_rejects_other_json() {
        assert!(serde_json::from_str::<StyleValue>("true").is_err());
        assert!(serde_json::from_str::<StyleValue>("[1]").is_err());
    }
}
