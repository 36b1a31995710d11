//! Grid track sizing and placement types.

use std::fmt;

use serde::Serialize;

use crate::style::units::{write_number, LengthPercentage};

/// The lower bound of a track's size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum MinTrackSizingFunction {
    /// A definite length or percentage.
    Fixed(LengthPercentage),
    MinContent,
    MaxContent,
    Auto,
}

impl fmt::Display for MinTrackSizingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(lp) => lp.fmt(f),
            Self::MinContent => f.write_str("min-content"),
            Self::MaxContent => f.write_str("max-content"),
            Self::Auto => f.write_str("auto"),
        }
    }
}

/// The upper bound of a track's size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum MaxTrackSizingFunction {
    /// A definite length or percentage.
    Fixed(LengthPercentage),
    MinContent,
    MaxContent,
    /// `fit-content(limit)`.
    FitContent(LengthPercentage),
    Auto,
    /// Share of the remaining free space (`fr`).
    Fraction(f32),
}

impl fmt::Display for MaxTrackSizingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(lp) => lp.fmt(f),
            Self::MinContent => f.write_str("min-content"),
            Self::MaxContent => f.write_str("max-content"),
            Self::FitContent(lp) => write!(f, "fit-content({lp})"),
            Self::Auto => f.write_str("auto"),
            Self::Fraction(fr) => write_number(f, *fr, "fr"),
        }
    }
}

/// A min/max pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MinMax<Min, Max> {
    pub min: Min,
    pub max: Max,
}

/// A single track's sizing rule.
pub type NonRepeatedTrackSizingFunction = MinMax<MinTrackSizingFunction, MaxTrackSizingFunction>;

impl NonRepeatedTrackSizingFunction {
    /// `auto` on both bounds.
    pub const AUTO: Self = Self {
        min: MinTrackSizingFunction::Auto,
        max: MaxTrackSizingFunction::Auto,
    };

    /// A fixed track: `min` and `max` are both `value`.
    pub const fn fixed(value: LengthPercentage) -> Self {
        Self {
            min: MinTrackSizingFunction::Fixed(value),
            max: MaxTrackSizingFunction::Fixed(value),
        }
    }

    /// `Nfr`, which CSS defines as `minmax(auto, Nfr)`.
    pub const fn fr(value: f32) -> Self {
        Self {
            min: MinTrackSizingFunction::Auto,
            max: MaxTrackSizingFunction::Fraction(value),
        }
    }

    /// `fit-content(limit)`, which CSS defines as `minmax(auto, fit-content(limit))`.
    pub const fn fit_content(limit: LengthPercentage) -> Self {
        Self {
            min: MinTrackSizingFunction::Auto,
            max: MaxTrackSizingFunction::FitContent(limit),
        }
    }

    /// `min-content` on both bounds.
    pub const MIN_CONTENT: Self = Self {
        min: MinTrackSizingFunction::MinContent,
        max: MaxTrackSizingFunction::MinContent,
    };

    /// `max-content` on both bounds.
    pub const MAX_CONTENT: Self = Self {
        min: MinTrackSizingFunction::MaxContent,
        max: MaxTrackSizingFunction::MaxContent,
    };
}

impl fmt::Display for NonRepeatedTrackSizingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use MaxTrackSizingFunction as Max;
        use MinTrackSizingFunction as Min;

        // Print the single-token spelling whenever it parses back to the same pair.
        match (self.min, self.max) {
            (Min::Auto, Max::Auto) => f.write_str("auto"),
            (Min::MinContent, Max::MinContent) => f.write_str("min-content"),
            (Min::MaxContent, Max::MaxContent) => f.write_str("max-content"),
            (Min::Fixed(a), Max::Fixed(b)) if a == b => a.fmt(f),
            (Min::Auto, Max::Fraction(_)) | (Min::Auto, Max::FitContent(_)) => self.max.fmt(f),
            (min, max) => write!(f, "minmax({min}, {max})"),
        }
    }
}

/// How many times a `repeat()` block repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GridTrackRepetition {
    /// As many as fit, keeping empty tracks.
    AutoFill,
    /// As many as fit, collapsing empty tracks.
    AutoFit,
    /// A fixed positive count.
    Count(u16),
}

impl fmt::Display for GridTrackRepetition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AutoFill => f.write_str("auto-fill"),
            Self::AutoFit => f.write_str("auto-fit"),
            Self::Count(n) => write!(f, "{n}"),
        }
    }
}

/// One entry of `grid-template-rows` / `grid-template-columns`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TrackSizingFunction {
    Single(NonRepeatedTrackSizingFunction),
    Repeat(GridTrackRepetition, Vec<NonRepeatedTrackSizingFunction>),
}

impl fmt::Display for TrackSizingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(track) => track.fmt(f),
            Self::Repeat(count, tracks) => {
                write!(f, "repeat({count}, ")?;
                write_track_list(f, tracks)?;
                f.write_str(")")
            }
        }
    }
}

/// Write tracks separated by single spaces.
pub fn write_track_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, tracks: &[T]) -> fmt::Result {
    for (i, track) in tracks.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        track.fmt(f)?;
    }
    Ok(())
}

/// Format a track list the way it would be written in CSS.
pub fn track_list_to_string<T: fmt::Display>(tracks: &[T]) -> String {
    struct List<'a, T>(&'a [T]);
    impl<T: fmt::Display> fmt::Display for List<'_, T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_track_list(f, self.0)
        }
    }
    List(tracks).to_string()
}

/// One side of `grid-row` / `grid-column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum GridPlacement {
    #[default]
    Auto,
    /// A line index; negative values count from the end. Never zero.
    Line(i16),
    /// Span this many tracks. Never zero.
    Span(u16),
}

impl fmt::Display for GridPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Line(n) => write!(f, "{n}"),
            Self::Span(n) => write!(f, "span {n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fr_track_displays_short_form() {
        assert_eq!(NonRepeatedTrackSizingFunction::fr(1.0).to_string(), "1fr");
        assert_eq!(NonRepeatedTrackSizingFunction::fr(1.5).to_string(), "1.5fr");
    }

    #[test]
    fn fixed_track_displays_length() {
        let t = NonRepeatedTrackSizingFunction::fixed(LengthPercentage::Length(250.0));
        assert_eq!(t.to_string(), "250px");
    }

    #[test]
    fn mixed_track_displays_minmax() {
        let t = MinMax {
            min: MinTrackSizingFunction::Fixed(LengthPercentage::Length(100.0)),
            max: MaxTrackSizingFunction::Fraction(2.0),
        };
        assert_eq!(t.to_string(), "minmax(100px, 2fr)");
    }

    #[test]
    fn fit_content_displays_function() {
        let t = NonRepeatedTrackSizingFunction::fit_content(LengthPercentage::Percent(0.5));
        assert_eq!(t.to_string(), "fit-content(50%)");
    }

    #[test]
    fn repeat_displays_nested_list() {
        let t = TrackSizingFunction::Repeat(
            GridTrackRepetition::Count(2),
            vec![
                NonRepeatedTrackSizingFunction::fr(1.0),
                NonRepeatedTrackSizingFunction::AUTO,
            ],
        );
        assert_eq!(t.to_string(), "repeat(2, 1fr auto)");
    }

    #[test]
    fn placement_display() {
        assert_eq!(GridPlacement::Auto.to_string(), "auto");
        assert_eq!(GridPlacement::Line(-1).to_string(), "-1");
        assert_eq!(GridPlacement::Span(3).to_string(), "span 3");
    }

    #[test]
    fn repeat_serializes_as_tuple_variant() {
        let t = TrackSizingFunction::Repeat(
            GridTrackRepetition::Count(1),
            vec![NonRepeatedTrackSizingFunction::fr(1.0)],
        );
        assert_eq!(
            serde_json::to_string(&t).unwrap(),
            r#"{"Repeat":[{"Count":1},[{"min":"Auto","max":{"Fraction":1.0}}]]}"#
        );
    }
}
