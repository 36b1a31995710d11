//! # css-taffy
//!
//! Translate web-style declarative style objects into typed layout styles for
//! [taffy](https://crates.io/crates/taffy).
//!
//! Input is a set of camelCase CSS properties with number or string values
//! (`width: "50%"`, `margin: "10px 20px"`,
//! `gridTemplateRows: "repeat(2, minmax(auto, 1fr))"`). Output is a
//! [`StyleRecord`]: one `Option` per layout field, each holding a closed,
//! tagged value rather than a raw string.
//!
//! ```
//! use css_taffy::{translate, StyleValue};
//! use css_taffy::style::{Display, LengthPercentageAuto, Rect};
//!
//! let record = translate([
//!     ("display", StyleValue::from("flex")),
//!     ("margin", "10px 20px".into()),
//! ])
//! .unwrap();
//!
//! assert_eq!(record.display, Some(Display::Flex));
//! let (v, h) = (LengthPercentageAuto::Length(10.0), LengthPercentageAuto::Length(20.0));
//! assert_eq!(record.margin, Some(Rect::symmetric(v, h)));
//!
//! let style: taffy::Style = css_taffy::to_taffy_style(&record);
//! assert_eq!(style.display, taffy::Display::Flex);
//! ```
//!
//! ## Modules
//!
//! - **[`css`]**: Value tokenizer, value-kind parsers, shorthands, keyword tables, grid parsers, dispatch
//! - **[`style`]**: Output model: lengths, geometry wrappers, grid tracks, enums, [`StyleRecord`]
//! - **[`layout`]**: Conversion to [`taffy::Style`]
//! - **[`config`]**: [`TranslateOptions`]
//! - **[`error`]**: [`TranslateError`]

pub mod config;
pub mod error;

// Core systems
pub mod css;
pub mod layout;
pub mod style;
pub mod translate;

pub use config::{BareNumbers, TranslateOptions, UnknownProperties};
pub use css::property::Property;
pub use css::value::{StyleValue, ValueKind};
pub use error::TranslateError;
pub use layout::to_taffy_style;
pub use style::StyleRecord;
pub use translate::{translate, translate_json, translate_json_with, translate_with, Translation, Warning};

// Proc macros (feature-gated)
#[cfg(feature = "macros")]
pub use css_taffy_macros::style;
