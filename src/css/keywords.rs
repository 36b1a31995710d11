//! Keyword tables: CSS kebab-case spellings for the layout enums.

use std::fmt;

use crate::css::scalar::{require_string, ParseContext};
use crate::css::value::StyleValue;
use crate::error::TranslateError;
use crate::style::{
    AlignContent, AlignItems, BoxSizing, Display, FlexDirection, FlexWrap, GridAutoFlow, Overflow,
    Position, TextAlign,
};

/// An enum with a closed set of CSS keyword spellings.
pub trait Keyword: Sized + Copy + 'static {
    /// Every `(keyword, variant)` pair, in declaration order.
    const TABLE: &'static [(&'static str, Self)];

    /// Exact, case-sensitive lookup.
    fn from_keyword(keyword: &str) -> Option<Self>;

    /// The CSS spelling of this variant.
    fn keyword(self) -> &'static str;
}

macro_rules! keywords {
    ($($ty:ident { $($kw:literal => $variant:ident,)* })*) => {
        $(
            impl Keyword for $ty {
                const TABLE: &'static [(&'static str, Self)] = &[$(($kw, $ty::$variant),)*];

                fn from_keyword(keyword: &str) -> Option<Self> {
                    match keyword {
                        $($kw => Some($ty::$variant),)*
                        _ => None,
                    }
                }

                fn keyword(self) -> &'static str {
                    match self {
                        $($ty::$variant => $kw,)*
                    }
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.keyword())
                }
            }
        )*
    };
}

keywords! {
    Display {
        "block" => Block,
        "flex" => Flex,
        "grid" => Grid,
        "none" => None,
    }
    BoxSizing {
        "border-box" => BorderBox,
        "content-box" => ContentBox,
    }
    Overflow {
        "visible" => Visible,
        "clip" => Clip,
        "hidden" => Hidden,
        "scroll" => Scroll,
    }
    Position {
        "relative" => Relative,
        "absolute" => Absolute,
    }
    AlignItems {
        "start" => Start,
        "end" => End,
        "flex-start" => FlexStart,
        "flex-end" => FlexEnd,
        "center" => Center,
        "baseline" => Baseline,
        "stretch" => Stretch,
    }
    AlignContent {
        "start" => Start,
        "end" => End,
        "flex-start" => FlexStart,
        "flex-end" => FlexEnd,
        "center" => Center,
        "stretch" => Stretch,
        "space-between" => SpaceBetween,
        "space-evenly" => SpaceEvenly,
        "space-around" => SpaceAround,
    }
    TextAlign {
        "auto" => Auto,
        "legacy-left" => LegacyLeft,
        "legacy-right" => LegacyRight,
        "legacy-center" => LegacyCenter,
    }
    FlexDirection {
        "row" => Row,
        "column" => Column,
        "row-reverse" => RowReverse,
        "column-reverse" => ColumnReverse,
    }
    FlexWrap {
        "nowrap" => NoWrap,
        "wrap" => Wrap,
        "wrap-reverse" => WrapReverse,
    }
    GridAutoFlow {
        "row" => Row,
        "column" => Column,
        "row dense" => RowDense,
        "column dense" => ColumnDense,
    }
}

/// Look up a single keyword. Matching is exact: case and whitespace count.
pub fn parse_keyword<K: Keyword>(cx: &ParseContext, text: &str) -> Result<K, TranslateError> {
    K::from_keyword(text).ok_or_else(|| cx.unknown_keyword(text))
}

/// Require a string value holding one keyword.
pub fn parse_enum<K: Keyword>(cx: &ParseContext, value: &StyleValue) -> Result<K, TranslateError> {
    parse_keyword(cx, require_string(cx, value)?)
}
