//! Property dispatch: one handler per [`Property`], writing typed fields on a
//! [`StyleRecord`].
//!
//! Longhands of a two-axis field (`rowGap`, `overflowX`, `top`, `width`)
//! merge into whatever the field already holds. Axes nobody has set are filled
//! with the layout engine's default for that field.

use crate::config::TranslateOptions;
use crate::css::grid::{parse_auto_tracks, parse_grid_auto_flow, parse_grid_line, parse_track_list};
use crate::css::keywords::{parse_enum, parse_keyword};
use crate::css::property::Property;
use crate::css::scalar::{
    parse_aspect_ratio, parse_length_percentage, parse_length_percentage_auto, require_number,
    require_string, ParseContext,
};
use crate::css::shorthand::{parse_box, parse_pair};
use crate::css::value::StyleValue;
use crate::error::TranslateError;
use crate::style::{
    Dimension, LengthPercentage, LengthPercentageAuto, Overflow, Point, Rect, Size, StyleRecord,
};

/// Apply one declaration to `record`.
///
/// Fails on the first problem with the value; `record` is left untouched in
/// that case.
pub fn apply_declaration(
    record: &mut StyleRecord,
    property: Property,
    value: &StyleValue,
    options: &TranslateOptions,
) -> Result<(), TranslateError> {
    let cx = ParseContext::new(property, options);
    let cx = &cx;

    match property {
        // ── Box ──────────────────────────────────────────────────────
        Property::Display => record.display = Some(parse_enum(cx, value)?),
        Property::BoxSizing => record.box_sizing = Some(parse_enum(cx, value)?),
        Property::Overflow => record.overflow = Some(parse_pair(cx, value, overflow_keyword)?),
        Property::OverflowX => {
            let x = overflow_keyword(cx, value)?;
            overflow(record).x = x;
        }
        Property::OverflowY => {
            let y = overflow_keyword(cx, value)?;
            overflow(record).y = y;
        }
        Property::ScrollbarWidth => record.scrollbar_width = Some(require_number(cx, value)?),
        Property::Position => record.position = Some(parse_enum(cx, value)?),
        Property::Inset => record.inset = Some(parse_box(cx, value, parse_length_percentage_auto)?),
        Property::Top => {
            let top = parse_length_percentage_auto(cx, value)?;
            inset(record).top = top;
        }
        Property::Right => {
            let right = parse_length_percentage_auto(cx, value)?;
            inset(record).right = right;
        }
        Property::Bottom => {
            let bottom = parse_length_percentage_auto(cx, value)?;
            inset(record).bottom = bottom;
        }
        Property::Left => {
            let left = parse_length_percentage_auto(cx, value)?;
            inset(record).left = left;
        }

        // ── Sizing ───────────────────────────────────────────────────
        Property::Width => {
            let width = parse_length_percentage_auto(cx, value)?;
            size(&mut record.size).width = width;
        }
        Property::Height => {
            let height = parse_length_percentage_auto(cx, value)?;
            size(&mut record.size).height = height;
        }
        Property::MinWidth => {
            let width = parse_length_percentage_auto(cx, value)?;
            size(&mut record.min_size).width = width;
        }
        Property::MinHeight => {
            let height = parse_length_percentage_auto(cx, value)?;
            size(&mut record.min_size).height = height;
        }
        Property::MaxWidth => {
            let width = parse_length_percentage_auto(cx, value)?;
            size(&mut record.max_size).width = width;
        }
        Property::MaxHeight => {
            let height = parse_length_percentage_auto(cx, value)?;
            size(&mut record.max_size).height = height;
        }
        Property::AspectRatio => record.aspect_ratio = Some(parse_aspect_ratio(cx, value)?),

        // ── Spacing ──────────────────────────────────────────────────
        Property::Margin => record.margin = Some(parse_box(cx, value, parse_length_percentage_auto)?),
        Property::Padding => record.padding = Some(parse_box(cx, value, parse_length_percentage)?),
        Property::Border => record.border = Some(parse_box(cx, value, parse_length_percentage)?),

        // ── Alignment ────────────────────────────────────────────────
        Property::AlignItems => record.align_items = Some(parse_enum(cx, value)?),
        Property::AlignSelf => record.align_self = Some(parse_enum(cx, value)?),
        Property::JustifyItems => record.justify_items = Some(parse_enum(cx, value)?),
        Property::JustifySelf => record.justify_self = Some(parse_enum(cx, value)?),
        Property::AlignContent => record.align_content = Some(parse_enum(cx, value)?),
        Property::JustifyContent => record.justify_content = Some(parse_enum(cx, value)?),
        Property::Gap => {
            // First value is the column gap (width), second the row gap (height).
            let pair = parse_pair(cx, value, parse_length_percentage)?;
            record.gap = Some(Size::new(pair.x, pair.y));
        }
        Property::ColumnGap => {
            let width = parse_length_percentage(cx, value)?;
            gap(record).width = width;
        }
        Property::RowGap => {
            let height = parse_length_percentage(cx, value)?;
            gap(record).height = height;
        }

        // ── Block ────────────────────────────────────────────────────
        Property::TextAlign => record.text_align = Some(parse_enum(cx, value)?),

        // ── Flexbox ──────────────────────────────────────────────────
        Property::FlexDirection => record.flex_direction = Some(parse_enum(cx, value)?),
        Property::FlexWrap => record.flex_wrap = Some(parse_enum(cx, value)?),
        Property::FlexBasis => record.flex_basis = Some(parse_length_percentage_auto(cx, value)?),
        Property::FlexGrow => record.flex_grow = Some(require_number(cx, value)?),
        Property::FlexShrink => record.flex_shrink = Some(require_number(cx, value)?),

        // ── Grid ─────────────────────────────────────────────────────
        Property::GridTemplateRows => {
            record.grid_template_rows = Some(parse_track_list(cx, require_string(cx, value)?)?)
        }
        Property::GridTemplateColumns => {
            record.grid_template_columns = Some(parse_track_list(cx, require_string(cx, value)?)?)
        }
        Property::GridAutoRows => {
            record.grid_auto_rows = Some(parse_auto_tracks(cx, require_string(cx, value)?)?)
        }
        Property::GridAutoColumns => {
            record.grid_auto_columns = Some(parse_auto_tracks(cx, require_string(cx, value)?)?)
        }
        Property::GridAutoFlow => record.grid_auto_flow = Some(parse_grid_auto_flow(cx, value)?),
        Property::GridRow => record.grid_row = Some(parse_grid_line(cx, value)?),
        Property::GridColumn => record.grid_column = Some(parse_grid_line(cx, value)?),
    }

    tracing::trace!(%property, %value, "applied declaration");
    Ok(())
}

fn overflow_keyword(cx: &ParseContext, value: &StyleValue) -> Result<Overflow, TranslateError> {
    parse_keyword(cx, require_string(cx, value)?)
}

fn overflow(record: &mut StyleRecord) -> &mut Point<Overflow> {
    record.overflow.get_or_insert_with(|| Point::splat(Overflow::Visible))
}

fn inset(record: &mut StyleRecord) -> &mut Rect<LengthPercentageAuto> {
    record.inset.get_or_insert_with(|| Rect::all(LengthPercentageAuto::AUTO))
}

fn size(field: &mut Option<Size<Dimension>>) -> &mut Size<Dimension> {
    field.get_or_insert_with(|| Size::splat(Dimension::AUTO))
}

fn gap(record: &mut StyleRecord) -> &mut Size<LengthPercentage> {
    record.gap.get_or_insert_with(|| Size::splat(LengthPercentage::ZERO))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::value::ValueKind;
    use crate::style::{
        AlignContent, Display, FlexWrap, GridAutoFlow, GridPlacement, GridTrackRepetition, Line,
        NonRepeatedTrackSizingFunction, TrackSizingFunction,
    };
    use pretty_assertions::assert_eq;

    fn apply(record: &mut StyleRecord, property: Property, value: impl Into<StyleValue>) -> Result<(), TranslateError> {
        apply_declaration(record, property, &value.into(), &TranslateOptions::default())
    }

    fn one(property: Property, value: impl Into<StyleValue>) -> StyleRecord {
        let mut record = StyleRecord::new();
        apply(&mut record, property, value).unwrap();
        record
    }

    fn px(v: f32) -> LengthPercentageAuto {
        LengthPercentageAuto::Length(v)
    }

    // ── Box ──────────────────────────────────────────────────────────

    #[test]
    fn display_none() {
        assert_eq!(one(Property::Display, "none").display, Some(Display::None));
    }

    #[test]
    fn display_invalid() {
        let mut record = StyleRecord::new();
        let err = apply(&mut record, Property::Display, "inline").unwrap_err();
        assert!(matches!(err, TranslateError::UnknownEnumValue { .. }));
        assert!(record.is_empty());
    }

    #[test]
    fn overflow_shorthand_and_longhands() {
        assert_eq!(
            one(Property::Overflow, "hidden scroll").overflow,
            Some(Point::new(Overflow::Hidden, Overflow::Scroll))
        );
        assert_eq!(one(Property::Overflow, "clip").overflow, Some(Point::splat(Overflow::Clip)));
        assert_eq!(
            one(Property::OverflowY, "scroll").overflow,
            Some(Point::new(Overflow::Visible, Overflow::Scroll))
        );
    }

    #[test]
    fn overflow_rejects_numbers() {
        let mut record = StyleRecord::new();
        let err = apply(&mut record, Property::Overflow, 1).unwrap_err();
        assert!(matches!(err, TranslateError::TypeMismatch { expected: ValueKind::String, .. }));
    }

    #[test]
    fn inset_edges_fill_auto() {
        assert_eq!(
            one(Property::Top, "10px").inset,
            Some(Rect::new(px(10.0), LengthPercentageAuto::Auto, LengthPercentageAuto::Auto, LengthPercentageAuto::Auto))
        );
        let mut record = one(Property::Inset, 0);
        apply(&mut record, Property::Left, "25%").unwrap();
        assert_eq!(record.inset, Some(Rect::new(px(0.0), px(0.0), px(0.0), LengthPercentageAuto::Percent(0.25))));
    }

    // ── Sizing ───────────────────────────────────────────────────────

    #[test]
    fn width_alone_fills_height_auto() {
        assert_eq!(
            one(Property::Width, "50%").size,
            Some(Size::new(LengthPercentageAuto::Percent(0.5), LengthPercentageAuto::Auto))
        );
    }

    #[test]
    fn width_and_height_merge() {
        let mut record = one(Property::MaxHeight, 100);
        apply(&mut record, Property::MaxWidth, "auto").unwrap();
        assert_eq!(record.max_size, Some(Size::new(LengthPercentageAuto::Auto, px(100.0))));
        assert_eq!(record.size, None);
        assert_eq!(record.min_size, None);
    }

    #[test]
    fn aspect_ratio() {
        assert_eq!(one(Property::AspectRatio, "16/9").aspect_ratio, Some(16.0 / 9.0));
    }

    // ── Spacing ──────────────────────────────────────────────────────

    #[test]
    fn margin_two_values() {
        assert_eq!(
            one(Property::Margin, "10px 20px").margin,
            Some(Rect::new(px(10.0), px(20.0), px(10.0), px(20.0)))
        );
    }

    #[test]
    fn padding_rejects_auto() {
        let mut record = StyleRecord::new();
        assert!(matches!(
            apply(&mut record, Property::Padding, "auto").unwrap_err(),
            TranslateError::Parse { property: Property::Padding, .. }
        ));
    }

    #[test]
    fn border_number() {
        assert_eq!(one(Property::Border, 1).border, Some(Rect::all(LengthPercentage::Length(1.0))));
    }

    // ── Gap ──────────────────────────────────────────────────────────

    #[test]
    fn gap_first_value_is_width() {
        assert_eq!(
            one(Property::Gap, "10px 20px").gap,
            Some(Size::new(LengthPercentage::Length(10.0), LengthPercentage::Length(20.0)))
        );
    }

    #[test]
    fn row_gap_alone_fills_zero_width() {
        assert_eq!(
            one(Property::RowGap, "4px").gap,
            Some(Size::new(LengthPercentage::ZERO, LengthPercentage::Length(4.0)))
        );
    }

    #[test]
    fn longhand_after_shorthand_overrides_one_axis() {
        let mut record = one(Property::Gap, "10px");
        apply(&mut record, Property::ColumnGap, "5%").unwrap();
        assert_eq!(
            record.gap,
            Some(Size::new(LengthPercentage::Percent(0.05), LengthPercentage::Length(10.0)))
        );
    }

    // ── Enums and numbers ────────────────────────────────────────────

    #[test]
    fn keyword_fields() {
        assert_eq!(
            one(Property::JustifyContent, "space-evenly").justify_content,
            Some(AlignContent::SpaceEvenly)
        );
        assert_eq!(one(Property::FlexWrap, "wrap-reverse").flex_wrap, Some(FlexWrap::WrapReverse));
    }

    #[test]
    fn flex_grow_requires_number() {
        assert_eq!(one(Property::FlexGrow, 2).flex_grow, Some(2.0));
        let mut record = StyleRecord::new();
        let err = apply(&mut record, Property::FlexGrow, "1").unwrap_err();
        assert!(matches!(
            err,
            TranslateError::TypeMismatch { property: Property::FlexGrow, expected: ValueKind::Number, .. }
        ));
    }

    #[test]
    fn flex_basis_auto() {
        assert_eq!(one(Property::FlexBasis, "auto").flex_basis, Some(LengthPercentageAuto::Auto));
    }

    // ── Grid ─────────────────────────────────────────────────────────

    #[test]
    fn grid_template_rows() {
        assert_eq!(
            one(Property::GridTemplateRows, "repeat(2, minmax(auto, 1fr))").grid_template_rows,
            Some(vec![TrackSizingFunction::Repeat(
                GridTrackRepetition::Count(2),
                vec![NonRepeatedTrackSizingFunction::fr(1.0)],
            )])
        );
    }

    #[test]
    fn grid_template_requires_string() {
        let mut record = StyleRecord::new();
        assert!(matches!(
            apply(&mut record, Property::GridTemplateColumns, 3).unwrap_err(),
            TranslateError::TypeMismatch { .. }
        ));
    }

    #[test]
    fn grid_auto_and_placement() {
        assert_eq!(
            one(Property::GridAutoColumns, "min-content").grid_auto_columns,
            Some(vec![NonRepeatedTrackSizingFunction::MIN_CONTENT])
        );
        assert_eq!(one(Property::GridAutoFlow, "column").grid_auto_flow, Some(GridAutoFlow::Column));
        assert_eq!(
            one(Property::GridRow, "2 / 4").grid_row,
            Some(Line::new(GridPlacement::Line(2), GridPlacement::Line(4)))
        );
    }

    #[test]
    fn every_property_has_a_handler() {
        let samples: Vec<StyleValue> = ["auto", "none", "visible", "relative", "border-box", "start", "row", "nowrap"]
            .into_iter()
            .map(StyleValue::from)
            .chain([StyleValue::from(1)])
            .collect();
        for &property in Property::ALL {
            let accepted = samples.iter().any(|value| {
                let mut record = StyleRecord::new();
                apply_declaration(&mut record, property, value, &TranslateOptions::default()).is_ok()
                    && !record.is_empty()
            });
            assert!(accepted, "{property} rejected every sample");
        }
    }
}
