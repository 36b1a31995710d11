//! Length-like values: LengthPercentage, LengthPercentageAuto, Dimension.
//!
//! Percentages are stored as fractions (`0.5` for `50%`), the representation the
//! layout engine expects. Lengths are in pixels.

use std::fmt;

use serde::Serialize;

/// A length or a percentage of the containing box. Used where `auto` is not
/// meaningful (padding, border, gap).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum LengthPercentage {
    /// Absolute length in pixels.
    Length(f32),
    /// Fraction of the containing box, `0.0..=1.0` for `0%..=100%`.
    Percent(f32),
}

impl LengthPercentage {
    /// Zero-length value.
    pub const ZERO: Self = Self::Length(0.0);

    /// Create a length in pixels.
    pub const fn length(value: f32) -> Self {
        Self::Length(value)
    }

    /// Create a percentage from a fraction (`0.5` for `50%`).
    pub const fn percent(fraction: f32) -> Self {
        Self::Percent(fraction)
    }
}

impl Default for LengthPercentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for LengthPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Length(v) => write_number(f, v, "px"),
            Self::Percent(p) => write_number(f, p * 100.0, "%"),
        }
    }
}

/// A length, a percentage, or `auto`. Used for inset, margin and flex-basis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum LengthPercentageAuto {
    /// Absolute length in pixels.
    Length(f32),
    /// Fraction of the containing box.
    Percent(f32),
    /// Resolved by the layout engine.
    Auto,
}

/// Sizing value for width/height and their min/max bounds. Same shape as
/// [`LengthPercentageAuto`].
pub type Dimension = LengthPercentageAuto;

impl LengthPercentageAuto {
    /// The `auto` keyword.
    pub const AUTO: Self = Self::Auto;

    /// Create a length in pixels.
    pub const fn length(value: f32) -> Self {
        Self::Length(value)
    }

    /// Create a percentage from a fraction (`0.5` for `50%`).
    pub const fn percent(fraction: f32) -> Self {
        Self::Percent(fraction)
    }

    /// Returns `true` if this value is `auto`.
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }
}

impl Default for LengthPercentageAuto {
    fn default() -> Self {
        Self::Auto
    }
}

impl From<LengthPercentage> for LengthPercentageAuto {
    fn from(value: LengthPercentage) -> Self {
        match value {
            LengthPercentage::Length(v) => Self::Length(v),
            LengthPercentage::Percent(p) => Self::Percent(p),
        }
    }
}

impl fmt::Display for LengthPercentageAuto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Length(v) => write_number(f, v, "px"),
            Self::Percent(p) => write_number(f, p * 100.0, "%"),
            Self::Auto => f.write_str("auto"),
        }
    }
}

/// Write `value` followed by `suffix`, dropping the fractional part when it is zero.
pub(crate) fn write_number(f: &mut fmt::Formatter<'_>, value: f32, suffix: &str) -> fmt::Result {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f32 {
        write!(f, "{}{suffix}", value as i64)
    } else {
        write!(f, "{value}{suffix}")
    }
}
