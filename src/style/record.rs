//! StyleRecord: the partial, fully-typed output of a translation.
//!
//! Every canonical layout field is an `Option<T>`. `None` means the input did not
//! mention the property; the layout engine applies its own default.

use serde::Serialize;

use crate::style::enums::*;
use crate::style::geometry::{Line, Point, Rect, Size};
use crate::style::grid::{GridPlacement, NonRepeatedTrackSizingFunction, TrackSizingFunction};
use crate::style::units::{Dimension, LengthPercentage, LengthPercentageAuto};

/// Translated layout style. Field names follow the layout engine's `Style`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyleRecord {
    // Box
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<Display>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_sizing: Option<BoxSizing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<Point<Overflow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrollbar_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inset: Option<Rect<LengthPercentageAuto>>,

    // Sizing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size<Dimension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_size: Option<Size<Dimension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<Size<Dimension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f32>,

    // Spacing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Rect<LengthPercentageAuto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Rect<LengthPercentage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<Rect<LengthPercentage>>,

    // Alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<AlignItems>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_self: Option<AlignSelf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_items: Option<AlignItems>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_self: Option<AlignSelf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_content: Option<AlignContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<JustifyContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<Size<LengthPercentage>>,

    // Block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,

    // Flexbox
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_wrap: Option<FlexWrap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_basis: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_grow: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_shrink: Option<f32>,

    // Grid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_template_rows: Option<Vec<TrackSizingFunction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_template_columns: Option<Vec<TrackSizingFunction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_auto_rows: Option<Vec<NonRepeatedTrackSizingFunction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_auto_columns: Option<Vec<NonRepeatedTrackSizingFunction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_auto_flow: Option<GridAutoFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_row: Option<Line<GridPlacement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_column: Option<Line<GridPlacement>>,
}

impl StyleRecord {
    /// Create a record with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == StyleRecord::default()
    }
}
