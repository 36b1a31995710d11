//! Translation errors.

use crate::css::property::Property;
use crate::css::value::{StyleValue, ValueKind};

/// Why a style object could not be translated.
///
/// Every variant names the offending property so the host can point the
/// application author at the declaration to fix.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("unknown style property `{0}`")]
    UnknownProperty(String),

    #[error("`{property}` expects a {expected}, got {actual}")]
    TypeMismatch {
        property: Property,
        expected: ValueKind,
        actual: StyleValue,
    },

    #[error("`{property}` does not accept `{value}`")]
    UnknownEnumValue { property: Property, value: String },

    #[error("`{property}` takes 1 to {max} values, got {count}")]
    ShorthandArity {
        property: Property,
        count: usize,
        max: usize,
    },

    #[error("invalid `{property}` value `{value}`: {reason}")]
    Parse {
        property: Property,
        value: String,
        reason: String,
    },

    #[error("invalid style object: {0}")]
    Json(#[from] serde_json::Error),
}

impl TranslateError {
    /// The property the error refers to, if it is a recognized one.
    pub fn property(&self) -> Option<Property> {
        match self {
            TranslateError::TypeMismatch { property, .. }
            | TranslateError::UnknownEnumValue { property, .. }
            | TranslateError::ShorthandArity { property, .. }
            | TranslateError::Parse { property, .. } => Some(*property),
            TranslateError::UnknownProperty(_) | TranslateError::Json(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_property_and_value() {
        let err = TranslateError::Parse {
            property: Property::Width,
            value: "10em".into(),
            reason: "unsupported unit".into(),
        };
        assert_eq!(err.to_string(), "invalid `width` value `10em`: unsupported unit");

        let err = TranslateError::TypeMismatch {
            property: Property::FlexGrow,
            expected: ValueKind::Number,
            actual: StyleValue::from("1"),
        };
        assert_eq!(err.to_string(), "`flexGrow` expects a number, got \"1\"");
    }

    #[test]
    fn arity_message() {
        let err = TranslateError::ShorthandArity {
            property: Property::Margin,
            count: 5,
            max: 4,
        };
        assert_eq!(err.to_string(), "`margin` takes 1 to 4 values, got 5");
    }

    #[test]
    fn property_accessor() {
        let err = TranslateError::UnknownEnumValue {
            property: Property::Display,
            value: "inline".into(),
        };
        assert_eq!(err.property(), Some(Property::Display));
        assert_eq!(TranslateError::UnknownProperty("color".into()).property(), None);
    }
}
