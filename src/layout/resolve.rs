//! StyleRecord -> taffy Style conversion.
//!
//! Maps the translator's output types ([`StyleRecord`], [`LengthPercentage`],
//! [`TrackSizingFunction`], ...) to taffy's layout types. Fields the record
//! leaves unset keep [`taffy::Style::default`].

use taffy::style_helpers::*;

use crate::style::{
    AlignContent, AlignItems, BoxSizing, Display, FlexDirection, FlexWrap, GridAutoFlow, GridPlacement,
    GridTrackRepetition, LengthPercentage, LengthPercentageAuto, MaxTrackSizingFunction,
    MinTrackSizingFunction, NonRepeatedTrackSizingFunction, Overflow, Point, Position, Rect, Size,
    StyleRecord, TextAlign, TrackSizingFunction,
};

// ── Lengths ──────────────────────────────────────────────────────────

impl From<LengthPercentage> for taffy::LengthPercentage {
    fn from(value: LengthPercentage) -> Self {
        match value {
            LengthPercentage::Length(v) => taffy::LengthPercentage::from_length(v),
            LengthPercentage::Percent(p) => taffy::LengthPercentage::from_percent(p),
        }
    }
}

impl From<LengthPercentageAuto> for taffy::LengthPercentageAuto {
    fn from(value: LengthPercentageAuto) -> Self {
        match value {
            LengthPercentageAuto::Length(v) => taffy::LengthPercentageAuto::from_length(v),
            LengthPercentageAuto::Percent(p) => taffy::LengthPercentageAuto::from_percent(p),
            LengthPercentageAuto::Auto => taffy::LengthPercentageAuto::AUTO,
        }
    }
}

/// Sizes use taffy's `Dimension`, which has the same three cases.
fn dimension(value: LengthPercentageAuto) -> taffy::Dimension {
    match value {
        LengthPercentageAuto::Length(v) => taffy::Dimension::from_length(v),
        LengthPercentageAuto::Percent(p) => taffy::Dimension::from_percent(p),
        LengthPercentageAuto::Auto => taffy::Dimension::AUTO,
    }
}

// ── Geometry ─────────────────────────────────────────────────────────

fn rect<T, U>(value: Rect<T>, f: impl FnMut(T) -> U) -> taffy::geometry::Rect<U> {
    let Rect { left, right, top, bottom } = value.map(f);
    taffy::geometry::Rect { left, right, top, bottom }
}

fn size<T, U>(value: Size<T>, f: impl FnMut(T) -> U) -> taffy::geometry::Size<U> {
    let Size { width, height } = value.map(f);
    taffy::geometry::Size { width, height }
}

fn point<T, U>(value: Point<T>, f: impl FnMut(T) -> U) -> taffy::geometry::Point<U> {
    let Point { x, y } = value.map(f);
    taffy::geometry::Point { x, y }
}

// ── Keywords ─────────────────────────────────────────────────────────

impl From<Display> for taffy::Display {
    fn from(value: Display) -> Self {
        match value {
            Display::Block => taffy::Display::Block,
            Display::Flex => taffy::Display::Flex,
            Display::Grid => taffy::Display::Grid,
            Display::None => taffy::Display::None,
        }
    }
}

impl From<BoxSizing> for taffy::BoxSizing {
    fn from(value: BoxSizing) -> Self {
        match value {
            BoxSizing::BorderBox => taffy::BoxSizing::BorderBox,
            BoxSizing::ContentBox => taffy::BoxSizing::ContentBox,
        }
    }
}

impl From<Overflow> for taffy::Overflow {
    fn from(value: Overflow) -> Self {
        match value {
            Overflow::Visible => taffy::Overflow::Visible,
            Overflow::Clip => taffy::Overflow::Clip,
            Overflow::Hidden => taffy::Overflow::Hidden,
            Overflow::Scroll => taffy::Overflow::Scroll,
        }
    }
}

impl From<Position> for taffy::Position {
    fn from(value: Position) -> Self {
        match value {
            Position::Relative => taffy::Position::Relative,
            Position::Absolute => taffy::Position::Absolute,
        }
    }
}

impl From<AlignItems> for taffy::AlignItems {
    fn from(value: AlignItems) -> Self {
        match value {
            AlignItems::Start => taffy::AlignItems::Start,
            AlignItems::End => taffy::AlignItems::End,
            AlignItems::FlexStart => taffy::AlignItems::FlexStart,
            AlignItems::FlexEnd => taffy::AlignItems::FlexEnd,
            AlignItems::Center => taffy::AlignItems::Center,
            AlignItems::Baseline => taffy::AlignItems::Baseline,
            AlignItems::Stretch => taffy::AlignItems::Stretch,
        }
    }
}

impl From<AlignContent> for taffy::AlignContent {
    fn from(value: AlignContent) -> Self {
        match value {
            AlignContent::Start => taffy::AlignContent::Start,
            AlignContent::End => taffy::AlignContent::End,
            AlignContent::FlexStart => taffy::AlignContent::FlexStart,
            AlignContent::FlexEnd => taffy::AlignContent::FlexEnd,
            AlignContent::Center => taffy::AlignContent::Center,
            AlignContent::Stretch => taffy::AlignContent::Stretch,
            AlignContent::SpaceBetween => taffy::AlignContent::SpaceBetween,
            AlignContent::SpaceEvenly => taffy::AlignContent::SpaceEvenly,
            AlignContent::SpaceAround => taffy::AlignContent::SpaceAround,
        }
    }
}

impl From<TextAlign> for taffy::TextAlign {
    fn from(value: TextAlign) -> Self {
        match value {
            TextAlign::Auto => taffy::TextAlign::Auto,
            TextAlign::LegacyLeft => taffy::TextAlign::LegacyLeft,
            TextAlign::LegacyRight => taffy::TextAlign::LegacyRight,
            TextAlign::LegacyCenter => taffy::TextAlign::LegacyCenter,
        }
    }
}

impl From<FlexDirection> for taffy::FlexDirection {
    fn from(value: FlexDirection) -> Self {
        match value {
            FlexDirection::Row => taffy::FlexDirection::Row,
            FlexDirection::Column => taffy::FlexDirection::Column,
            FlexDirection::RowReverse => taffy::FlexDirection::RowReverse,
            FlexDirection::ColumnReverse => taffy::FlexDirection::ColumnReverse,
        }
    }
}

impl From<FlexWrap> for taffy::FlexWrap {
    fn from(value: FlexWrap) -> Self {
        match value {
            FlexWrap::NoWrap => taffy::FlexWrap::NoWrap,
            FlexWrap::Wrap => taffy::FlexWrap::Wrap,
            FlexWrap::WrapReverse => taffy::FlexWrap::WrapReverse,
        }
    }
}

impl From<GridAutoFlow> for taffy::GridAutoFlow {
    fn from(value: GridAutoFlow) -> Self {
        match value {
            GridAutoFlow::Row => taffy::GridAutoFlow::Row,
            GridAutoFlow::Column => taffy::GridAutoFlow::Column,
            GridAutoFlow::RowDense => taffy::GridAutoFlow::RowDense,
            GridAutoFlow::ColumnDense => taffy::GridAutoFlow::ColumnDense,
        }
    }
}

// ── Grid ─────────────────────────────────────────────────────────────

impl From<MinTrackSizingFunction> for taffy::MinTrackSizingFunction {
    fn from(value: MinTrackSizingFunction) -> Self {
        match value {
            MinTrackSizingFunction::Fixed(lp) => taffy::MinTrackSizingFunction::from(taffy::LengthPercentage::from(lp)),
            MinTrackSizingFunction::MinContent => taffy::MinTrackSizingFunction::MIN_CONTENT,
            MinTrackSizingFunction::MaxContent => taffy::MinTrackSizingFunction::MAX_CONTENT,
            MinTrackSizingFunction::Auto => taffy::MinTrackSizingFunction::AUTO,
        }
    }
}

impl From<MaxTrackSizingFunction> for taffy::MaxTrackSizingFunction {
    fn from(value: MaxTrackSizingFunction) -> Self {
        match value {
            MaxTrackSizingFunction::Fixed(lp) => taffy::MaxTrackSizingFunction::from(taffy::LengthPercentage::from(lp)),
            MaxTrackSizingFunction::MinContent => taffy::MaxTrackSizingFunction::MIN_CONTENT,
            MaxTrackSizingFunction::MaxContent => taffy::MaxTrackSizingFunction::MAX_CONTENT,
            MaxTrackSizingFunction::FitContent(lp) => {
                taffy::MaxTrackSizingFunction::fit_content(taffy::LengthPercentage::from(lp))
            }
            MaxTrackSizingFunction::Auto => taffy::MaxTrackSizingFunction::AUTO,
            MaxTrackSizingFunction::Fraction(fr) => taffy::MaxTrackSizingFunction::from_fr(fr),
        }
    }
}

impl From<NonRepeatedTrackSizingFunction> for taffy::TrackSizingFunction {
    fn from(value: NonRepeatedTrackSizingFunction) -> Self {
        taffy::MinMax {
            min: value.min.into(),
            max: value.max.into(),
        }
    }
}

impl From<GridTrackRepetition> for taffy::RepetitionCount {
    fn from(value: GridTrackRepetition) -> Self {
        match value {
            GridTrackRepetition::AutoFill => taffy::RepetitionCount::AutoFill,
            GridTrackRepetition::AutoFit => taffy::RepetitionCount::AutoFit,
            GridTrackRepetition::Count(n) => taffy::RepetitionCount::Count(n),
        }
    }
}

fn auto_tracks(tracks: &[NonRepeatedTrackSizingFunction]) -> Vec<taffy::TrackSizingFunction> {
    tracks.iter().copied().map(Into::into).collect()
}

// ── Style ────────────────────────────────────────────────────────────

/// Convert a [`StyleRecord`] into a [`taffy::Style`].
///
/// Starts from `taffy::Style::default()` and overwrites every field the record
/// sets, so an empty record yields the default style.
pub fn to_taffy_style(record: &StyleRecord) -> taffy::Style {
    let mut style = taffy::Style::default();

    // Grid track and line types are generic over taffy's line-name string;
    // these closures let the field assignments fix it.
    let template = |tracks: &[TrackSizingFunction]| {
        tracks
            .iter()
            .map(|track| match track {
                TrackSizingFunction::Single(single) => taffy::GridTemplateComponent::Single((*single).into()),
                TrackSizingFunction::Repeat(count, tracks) => {
                    taffy::GridTemplateComponent::Repeat(taffy::GridTemplateRepetition {
                        count: (*count).into(),
                        tracks: auto_tracks(tracks),
                        line_names: Vec::new(),
                    })
                }
            })
            .collect::<Vec<_>>()
    };
    let placement = |p: GridPlacement| match p {
        GridPlacement::Auto => taffy::GridPlacement::Auto,
        GridPlacement::Line(n) => line(n),
        GridPlacement::Span(n) => taffy::GridPlacement::Span(n),
    };

    // Box
    if let Some(display) = record.display {
        style.display = display.into();
    }
    if let Some(box_sizing) = record.box_sizing {
        style.box_sizing = box_sizing.into();
    }
    if let Some(overflow) = record.overflow {
        style.overflow = point(overflow, taffy::Overflow::from);
    }
    if let Some(width) = record.scrollbar_width {
        style.scrollbar_width = width;
    }
    if let Some(position) = record.position {
        style.position = position.into();
    }
    if let Some(inset) = record.inset {
        style.inset = rect(inset, taffy::LengthPercentageAuto::from);
    }

    // Sizing
    if let Some(value) = record.size {
        style.size = size(value, dimension);
    }
    if let Some(value) = record.min_size {
        style.min_size = size(value, dimension);
    }
    if let Some(value) = record.max_size {
        style.max_size = size(value, dimension);
    }
    if let Some(ratio) = record.aspect_ratio {
        style.aspect_ratio = Some(ratio);
    }

    // Spacing
    if let Some(margin) = record.margin {
        style.margin = rect(margin, taffy::LengthPercentageAuto::from);
    }
    if let Some(padding) = record.padding {
        style.padding = rect(padding, taffy::LengthPercentage::from);
    }
    if let Some(border) = record.border {
        style.border = rect(border, taffy::LengthPercentage::from);
    }

    // Alignment
    style.align_items = record.align_items.map(Into::into).or(style.align_items);
    style.align_self = record.align_self.map(Into::into).or(style.align_self);
    style.justify_items = record.justify_items.map(Into::into).or(style.justify_items);
    style.justify_self = record.justify_self.map(Into::into).or(style.justify_self);
    style.align_content = record.align_content.map(Into::into).or(style.align_content);
    style.justify_content = record.justify_content.map(Into::into).or(style.justify_content);
    if let Some(gap) = record.gap {
        style.gap = size(gap, taffy::LengthPercentage::from);
    }

    // Block
    if let Some(text_align) = record.text_align {
        style.text_align = text_align.into();
    }

    // Flexbox
    if let Some(direction) = record.flex_direction {
        style.flex_direction = direction.into();
    }
    if let Some(wrap) = record.flex_wrap {
        style.flex_wrap = wrap.into();
    }
    if let Some(basis) = record.flex_basis {
        style.flex_basis = dimension(basis);
    }
    if let Some(grow) = record.flex_grow {
        style.flex_grow = grow;
    }
    if let Some(shrink) = record.flex_shrink {
        style.flex_shrink = shrink;
    }

    // Grid
    if let Some(rows) = &record.grid_template_rows {
        style.grid_template_rows = template(rows.as_slice());
    }
    if let Some(columns) = &record.grid_template_columns {
        style.grid_template_columns = template(columns.as_slice());
    }
    if let Some(rows) = &record.grid_auto_rows {
        style.grid_auto_rows = auto_tracks(rows);
    }
    if let Some(columns) = &record.grid_auto_columns {
        style.grid_auto_columns = auto_tracks(columns);
    }
    if let Some(flow) = record.grid_auto_flow {
        style.grid_auto_flow = flow.into();
    }
    if let Some(row) = record.grid_row {
        style.grid_row = taffy::geometry::Line {
            start: placement(row.start),
            end: placement(row.end),
        };
    }
    if let Some(column) = record.grid_column {
        style.grid_column = taffy::geometry::Line {
            start: placement(column.start),
            end: placement(column.end),
        };
    }

    style
}
