//! Shorthand expansion: one to two axis values, one to four edge values.

use crate::css::scalar::ParseContext;
use crate::css::value::StyleValue;
use crate::error::TranslateError;
use crate::style::{Point, Rect};

/// Split a shorthand string on whitespace, checking the token count.
fn split<'a>(cx: &ParseContext, text: &'a str, max: usize) -> Result<Vec<&'a str>, TranslateError> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    if parts.is_empty() || parts.len() > max {
        return Err(cx.arity(parts.len(), max));
    }
    Ok(parts)
}

/// Parse 1-2 values into an (x, y) pair.
///
/// - 1 value: both axes
/// - 2 values: x, y
///
/// Size-shaped fields read x as width and y as height.
pub fn parse_pair<T, F>(cx: &ParseContext, value: &StyleValue, parse: F) -> Result<Point<T>, TranslateError>
where
    T: Clone,
    F: Fn(&ParseContext, &StyleValue) -> Result<T, TranslateError>,
{
    let text = match value {
        StyleValue::Number(_) => return parse(cx, value).map(Point::splat),
        StyleValue::String(s) => s,
    };
    let parts = split(cx, text, 2)?;
    let mut values = parts
        .into_iter()
        .map(|part| parse(cx, &StyleValue::from(part)))
        .collect::<Result<Vec<T>, _>>()?;
    match values.len() {
        1 => Ok(Point::splat(values.remove(0))),
        _ => {
            let y = values.remove(1);
            let x = values.remove(0);
            Ok(Point::new(x, y))
        }
    }
}

/// Parse 1-4 values into a [`Rect`] (CSS box shorthand).
///
/// - 1 value: all sides
/// - 2 values: vertical, horizontal
/// - 3 values: top, horizontal, bottom
/// - 4 values: top, right, bottom, left
pub fn parse_box<T, F>(cx: &ParseContext, value: &StyleValue, parse: F) -> Result<Rect<T>, TranslateError>
where
    T: Clone,
    F: Fn(&ParseContext, &StyleValue) -> Result<T, TranslateError>,
{
    let text = match value {
        StyleValue::Number(_) => return parse(cx, value).map(Rect::all),
        StyleValue::String(s) => s,
    };
    let parts = split(cx, text, 4)?;
    let values = parts
        .into_iter()
        .map(|part| parse(cx, &StyleValue::from(part)))
        .collect::<Result<Vec<T>, _>>()?;
    match values.as_slice() {
        [all] => Ok(Rect::all(all.clone())),
        [vertical, horizontal] => Ok(Rect::symmetric(vertical.clone(), horizontal.clone())),
        [top, horizontal, bottom] => Ok(Rect::new(
            top.clone(),
            horizontal.clone(),
            bottom.clone(),
            horizontal.clone(),
        )),
        [top, right, bottom, left] => Ok(Rect::new(top.clone(), right.clone(), bottom.clone(), left.clone())),
        _ => Err(cx.arity(values.len(), 4)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TranslateOptions;
    use crate::css::property::Property;
    use crate::css::scalar::{parse_length_percentage, parse_length_percentage_auto};
    use crate::style::{LengthPercentage, LengthPercentageAuto};

    fn cx(property: Property) -> ParseContext {
        ParseContext::new(property, &TranslateOptions::default())
    }

    fn px(v: f32) -> LengthPercentageAuto {
        LengthPercentageAuto::Length(v)
    }

    // ── Box ──────────────────────────────────────────────────────────

    #[test]
    fn box_one_value() {
        let b = parse_box(&cx(Property::Margin), &"5px".into(), parse_length_percentage_auto).unwrap();
        assert_eq!(b, Rect::all(px(5.0)));
    }

    #[test]
    fn box_two_values() {
        let b = parse_box(&cx(Property::Margin), &"10px 20px".into(), parse_length_percentage_auto).unwrap();
        assert_eq!(b, Rect::new(px(10.0), px(20.0), px(10.0), px(20.0)));
    }

    #[test]
    fn box_three_values() {
        let b = parse_box(&cx(Property::Margin), &"1px 2px 3px".into(), parse_length_percentage_auto).unwrap();
        assert_eq!(b, Rect::new(px(1.0), px(2.0), px(3.0), px(2.0)));
    }

    #[test]
    fn box_four_values() {
        let b =
            parse_box(&cx(Property::Margin), &"1px 2px 3px 4px".into(), parse_length_percentage_auto).unwrap();
        assert_eq!(b.top, px(1.0));
        assert_eq!(b.right, px(2.0));
        assert_eq!(b.bottom, px(3.0));
        assert_eq!(b.left, px(4.0));
    }

    #[test]
    fn box_number_is_uniform() {
        let b = parse_box(&cx(Property::Padding), &StyleValue::from(8), parse_length_percentage).unwrap();
        assert_eq!(b, Rect::all(LengthPercentage::Length(8.0)));
    }

    #[test]
    fn box_mixed_units() {
        let b = parse_box(&cx(Property::Margin), &"auto 50%".into(), parse_length_percentage_auto).unwrap();
        assert_eq!(b.top, LengthPercentageAuto::Auto);
        assert_eq!(b.left, LengthPercentageAuto::Percent(0.5));
    }

    #[test]
    fn box_arity_errors() {
        let err = parse_box(&cx(Property::Margin), &"1px 2px 3px 4px 5px".into(), parse_length_percentage_auto)
            .unwrap_err();
        assert!(matches!(
            err,
            TranslateError::ShorthandArity { property: Property::Margin, count: 5, max: 4 }
        ));
        let err = parse_box(&cx(Property::Margin), &"   ".into(), parse_length_percentage_auto).unwrap_err();
        assert!(matches!(err, TranslateError::ShorthandArity { count: 0, .. }));
    }

    #[test]
    fn box_bad_token_is_parse_error() {
        let err = parse_box(&cx(Property::Padding), &"1px auto".into(), parse_length_percentage).unwrap_err();
        assert!(matches!(err, TranslateError::Parse { ref value, .. } if value == "auto"));
    }

    // ── Pair ─────────────────────────────────────────────────────────

    #[test]
    fn pair_one_and_two() {
        let cx = cx(Property::Gap);
        let p = parse_pair(&cx, &"4px".into(), parse_length_percentage).unwrap();
        assert_eq!(p, Point::splat(LengthPercentage::Length(4.0)));
        let p = parse_pair(&cx, &"4px 10%".into(), parse_length_percentage).unwrap();
        assert_eq!(p, Point::new(LengthPercentage::Length(4.0), LengthPercentage::Percent(0.1)));
    }

    #[test]
    fn pair_arity() {
        let err = parse_pair(&cx(Property::Gap), &"1px 2px 3px".into(), parse_length_percentage).unwrap_err();
        assert!(matches!(err, TranslateError::ShorthandArity { count: 3, max: 2, .. }));
    }
}
