//! Closed keyword sets for layout properties.
//!
//! Variant names are the canonical PascalCase tags. The CSS spellings live in
//! [`crate::css::keywords`].

use serde::Serialize;

/// Layout algorithm used for a node's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Display {
    Block,
    Flex,
    Grid,
    None,
}

/// Whether size properties include padding and border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BoxSizing {
    BorderBox,
    ContentBox,
}

/// Overflow behaviour on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Overflow {
    #[default]
    Visible,
    Clip,
    Hidden,
    Scroll,
}

/// Positioning scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Position {
    Relative,
    Absolute,
}

/// Item alignment along the cross axis (`align-items`, `justify-items`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AlignItems {
    Start,
    End,
    FlexStart,
    FlexEnd,
    Center,
    Baseline,
    Stretch,
}

/// Per-item override of [`AlignItems`].
pub type AlignSelf = AlignItems;

/// Distribution of lines or tracks (`align-content`, `justify-content`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AlignContent {
    Start,
    End,
    FlexStart,
    FlexEnd,
    Center,
    Stretch,
    SpaceBetween,
    SpaceEvenly,
    SpaceAround,
}

/// Main-axis distribution; same keyword set as [`AlignContent`].
pub type JustifyContent = AlignContent;

/// Legacy text alignment used by block layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TextAlign {
    Auto,
    LegacyLeft,
    LegacyRight,
    LegacyCenter,
}

/// Main axis of a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FlexDirection {
    Row,
    Column,
    RowReverse,
    ColumnReverse,
}

/// Whether flex items wrap onto multiple lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FlexWrap {
    NoWrap,
    Wrap,
    WrapReverse,
}

/// Auto-placement direction for grid items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GridAutoFlow {
    Row,
    Column,
    RowDense,
    ColumnDense,
}
