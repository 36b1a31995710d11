//! Multi-axis wrappers: Point, Rect, Size, Line.
//!
//! These mirror the layout engine's generic geometry containers so a translated
//! [`StyleRecord`](crate::style::StyleRecord) maps onto [`taffy::Style`] field by field.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A two-axis value, e.g. overflow on the x and y axes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    /// Create a new point.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Apply `f` to both axes.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Point<U> {
        Point { x: f(self.x), y: f(self.y) }
    }
}

impl<T: Clone> Point<T> {
    /// The same value on both axes.
    pub fn splat(value: T) -> Self {
        Self { x: value.clone(), y: value }
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// A four-edge value (inset, margin, padding, border).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Rect<T> {
    pub left: T,
    pub right: T,
    pub top: T,
    pub bottom: T,
}

impl<T> Rect<T> {
    /// Create a rect from edges in CSS order: top, right, bottom, left.
    #[inline]
    pub const fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self { left, right, top, bottom }
    }

    /// Apply `f` to all four edges.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Rect<U> {
        Rect {
            left: f(self.left),
            right: f(self.right),
            top: f(self.top),
            bottom: f(self.bottom),
        }
    }
}

impl<T: Clone> Rect<T> {
    /// The same value on all four edges.
    pub fn all(value: T) -> Self {
        Self {
            left: value.clone(),
            right: value.clone(),
            top: value.clone(),
            bottom: value,
        }
    }

    /// Vertical edges get `vertical`, horizontal edges get `horizontal`.
    pub fn symmetric(vertical: T, horizontal: T) -> Self {
        Self {
            left: horizontal.clone(),
            right: horizontal,
            top: vertical.clone(),
            bottom: vertical,
        }
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A two-dimension value (width, height).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    /// Create a new size.
    #[inline]
    pub const fn new(width: T, height: T) -> Self {
        Self { width, height }
    }

    /// Apply `f` to both dimensions.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Size<U> {
        Size {
            width: f(self.width),
            height: f(self.height),
        }
    }
}

impl<T: Clone> Size<T> {
    /// The same value in both dimensions.
    pub fn splat(value: T) -> Self {
        Self { width: value.clone(), height: value }
    }
}

// ---------------------------------------------------------------------------
// Line
// ---------------------------------------------------------------------------

/// A start/end pair, used for grid placement spans.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Line<T> {
    pub start: T,
    pub end: T,
}

impl<T> Line<T> {
    /// Create a new line.
    #[inline]
    pub const fn new(start: T, end: T) -> Self {
        Self { start, end }
    }
}
