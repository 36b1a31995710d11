//! Entry points: turn a style object into a [`StyleRecord`].

use std::collections::BTreeMap;
use std::fmt;

use crate::config::{TranslateOptions, UnknownProperties};
use crate::css::properties::apply_declaration;
use crate::css::property::Property;
use crate::css::value::StyleValue;
use crate::error::TranslateError;
use crate::style::StyleRecord;

/// Something the translator ignored instead of failing on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A property name outside the recognized vocabulary.
    UnknownProperty(String),
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnknownProperty(name) => write!(f, "ignored unknown style property `{name}`"),
        }
    }
}

/// The result of [`translate_with`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Translation {
    pub record: StyleRecord,
    /// Empty unless lenient options were used.
    pub warnings: Vec<Warning>,
}

/// Translate with the default, fail-fast options.
///
/// ```
/// use css_taffy::{translate, StyleValue};
/// use css_taffy::style::{LengthPercentageAuto, Size};
///
/// let record = translate([("width", StyleValue::from("50%")), ("height", 20.into())]).unwrap();
/// assert_eq!(
///     record.size,
///     Some(Size::new(LengthPercentageAuto::Percent(0.5), LengthPercentageAuto::Length(20.0)))
/// );
/// ```
pub fn translate<I, K, V>(input: I) -> Result<StyleRecord, TranslateError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<StyleValue>,
{
    translate_with(input, &TranslateOptions::default()).map(|t| t.record)
}

/// Translate `(name, value)` pairs.
///
/// Names are resolved first, so an unknown name fails before any value is
/// parsed. If a name repeats, the later value wins. Shorthands (`gap`, `inset`,
/// `overflow`) are applied before their longhands, so input order never
/// changes the result.
pub fn translate_with<I, K, V>(input: I, options: &TranslateOptions) -> Result<Translation, TranslateError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<StyleValue>,
{
    let mut warnings = Vec::new();
    let mut declarations: Vec<(Property, StyleValue)> = Vec::new();

    for (name, value) in input {
        let name = name.as_ref();
        let Some(property) = Property::from_name(name) else {
            match options.unknown_properties {
                UnknownProperties::Reject => return Err(TranslateError::UnknownProperty(name.to_string())),
                UnknownProperties::Skip => {
                    tracing::warn!(property = name, "skipping unknown style property");
                    warnings.push(Warning::UnknownProperty(name.to_string()));
                    continue;
                }
            }
        };
        let value = value.into();
        match declarations.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value,
            None => declarations.push((property, value)),
        }
    }

    // Stable: declarations of equal precedence keep input order.
    declarations.sort_by_key(|(property, _)| !property.is_shorthand());

    let mut record = StyleRecord::new();
    for (property, value) in &declarations {
        apply_declaration(&mut record, *property, value, options)?;
    }

    tracing::debug!(
        declarations = declarations.len(),
        warnings = warnings.len(),
        "translated style"
    );
    Ok(Translation { record, warnings })
}

/// Translate a JSON object of numbers and strings, with default options.
pub fn translate_json(json: &str) -> Result<StyleRecord, TranslateError> {
    translate_json_with(json, &TranslateOptions::default()).map(|t| t.record)
}

/// Translate a JSON object of numbers and strings.
///
/// Anything other than an object whose values are numbers or strings is a
/// [`TranslateError::Json`]. A repeated key keeps its last value.
pub fn translate_json_with(json: &str, options: &TranslateOptions) -> Result<Translation, TranslateError> {
    let object: BTreeMap<String, StyleValue> = serde_json::from_str(json)?;
    translate_with(object, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BareNumbers;
    use crate::style::{Display, LengthPercentage, LengthPercentageAuto, Size};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input() {
        let record = translate(Vec::<(&str, StyleValue)>::new()).unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn unknown_property_fails_fast() {
        let err = translate([("display", "flex"), ("color", "red")]).unwrap_err();
        assert!(matches!(err, TranslateError::UnknownProperty(ref name) if name == "color"));
    }

    #[test]
    fn unknown_property_checked_before_values() {
        // The malformed width is never reached.
        let err = translate([("width", "bogus"), ("colour", "red")]).unwrap_err();
        assert!(matches!(err, TranslateError::UnknownProperty(_)));
    }

    #[test]
    fn lenient_skips_unknown() {
        let options = TranslateOptions::new().with_unknown_properties(UnknownProperties::Skip);
        let t = translate_with([("display", "none"), ("unknownProp", "x")], &options).unwrap();
        assert_eq!(t.record.display, Some(Display::None));
        assert_eq!(t.warnings, vec![Warning::UnknownProperty("unknownProp".into())]);
        assert_eq!(t.warnings[0].to_string(), "ignored unknown style property `unknownProp`");
    }

    #[test]
    fn lenient_still_rejects_bad_values() {
        let options = TranslateOptions::lenient();
        assert!(translate_with([("display", "inline")], &options).is_err());
    }

    #[test]
    fn shorthand_order_independent() {
        let expected = Some(Size::new(LengthPercentage::Length(10.0), LengthPercentage::Length(4.0)));
        assert_eq!(translate([("gap", "10px"), ("rowGap", "4px")]).unwrap().gap, expected);
        assert_eq!(translate([("rowGap", "4px"), ("gap", "10px")]).unwrap().gap, expected);
    }

    #[test]
    fn repeated_name_keeps_last() {
        let record = translate([("width", "10px"), ("width", "20px")]).unwrap();
        assert_eq!(
            record.size,
            Some(Size::new(LengthPercentageAuto::Length(20.0), LengthPercentageAuto::Auto))
        );
    }

    #[test]
    fn bare_numbers_option() {
        assert!(translate([("width", "42")]).is_err());
        let options = TranslateOptions::new().with_bare_numbers(BareNumbers::Pixels);
        let t = translate_with([("width", "42")], &options).unwrap();
        assert_eq!(t.record.size.map(|s| s.width), Some(LengthPercentageAuto::Length(42.0)));
    }

    #[test]
    fn owned_keys_and_mixed_values() {
        let input = vec![
            (String::from("flexGrow"), StyleValue::from(1)),
            (String::from("flexBasis"), StyleValue::from("auto")),
        ];
        let record = translate(input).unwrap();
        assert_eq!(record.flex_grow, Some(1.0));
        assert_eq!(record.flex_basis, Some(LengthPercentageAuto::Auto));
    }

    // ── JSON ─────────────────────────────────────────────────────────

    #[test]
    fn json_object() {
        let record = translate_json(r#"{"display": "grid", "width": 100, "margin": "1px 2px"}"#).unwrap();
        assert_eq!(record.display, Some(Display::Grid));
        assert_eq!(record.size.map(|s| s.width), Some(LengthPercentageAuto::Length(100.0)));
        assert!(record.margin.is_some());
    }

    #[test]
    fn json_rejects_non_objects_and_bad_values() {
        assert!(matches!(translate_json("[1, 2]").unwrap_err(), TranslateError::Json(_)));
        assert!(matches!(translate_json(r#"{"flexGrow": true}"#).unwrap_err(), TranslateError::Json(_)));
        assert!(matches!(translate_json("{").unwrap_err(), TranslateError::Json(_)));
    }
}
