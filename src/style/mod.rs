//! Output model: tagged values, geometry wrappers, keyword enums, StyleRecord.

pub mod enums;
pub mod geometry;
pub mod grid;
pub mod record;
pub mod units;

pub use enums::*;
pub use geometry::{Line, Point, Rect, Size};
pub use grid::{
    GridPlacement, GridTrackRepetition, MaxTrackSizingFunction, MinMax, MinTrackSizingFunction,
    NonRepeatedTrackSizingFunction, TrackSizingFunction,
};
pub use record::StyleRecord;
pub use units::{Dimension, LengthPercentage, LengthPercentageAuto};
