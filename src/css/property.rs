//! The closed vocabulary of recognized property names.

use std::fmt;

macro_rules! properties {
    ($($variant:ident => $name:literal,)*) => {
        /// A recognized style property, keyed by its camelCase name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Property {
            $($variant,)*
        }

        impl Property {
            /// Every recognized property, in declaration order.
            pub const ALL: &'static [Property] = &[$(Property::$variant,)*];

            /// Look up a property by its camelCase name. Case-sensitive.
            pub fn from_name(name: &str) -> Option<Property> {
                match name {
                    $($name => Some(Property::$variant),)*
                    _ => None,
                }
            }

            /// The camelCase name of this property.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Property::$variant => $name,)*
                }
            }
        }
    };
}

properties! {
    Display => "display",
    BoxSizing => "boxSizing",
    Overflow => "overflow",
    OverflowX => "overflowX",
    OverflowY => "overflowY",
    ScrollbarWidth => "scrollbarWidth",
    Position => "position",
    Inset => "inset",
    Top => "top",
    Right => "right",
    Bottom => "bottom",
    Left => "left",
    Width => "width",
    Height => "height",
    MinWidth => "minWidth",
    MinHeight => "minHeight",
    MaxWidth => "maxWidth",
    MaxHeight => "maxHeight",
    AspectRatio => "aspectRatio",
    Margin => "margin",
    Padding => "padding",
    Border => "border",
    AlignItems => "alignItems",
    AlignSelf => "alignSelf",
    JustifyItems => "justifyItems",
    JustifySelf => "justifySelf",
    AlignContent => "alignContent",
    JustifyContent => "justifyContent",
    Gap => "gap",
    ColumnGap => "columnGap",
    RowGap => "rowGap",
    TextAlign => "textAlign",
    FlexDirection => "flexDirection",
    FlexWrap => "flexWrap",
    FlexBasis => "flexBasis",
    FlexGrow => "flexGrow",
    FlexShrink => "flexShrink",
    GridTemplateRows => "gridTemplateRows",
    GridTemplateColumns => "gridTemplateColumns",
    GridAutoRows => "gridAutoRows",
    GridAutoColumns => "gridAutoColumns",
    GridAutoFlow => "gridAutoFlow",
    GridRow => "gridRow",
    GridColumn => "gridColumn",
}

impl Property {
    /// Returns `true` for properties that set several axes or edges of a field
    /// that also has per-axis longhands (`gap` vs `rowGap`).
    ///
    /// Shorthands are applied before longhands so that input order never
    /// changes the result.
    pub const fn is_shorthand(self) -> bool {
        matches!(self, Property::Overflow | Property::Inset | Property::Gap)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
