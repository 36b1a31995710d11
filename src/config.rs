//! Translation options.

/// What to do with property names outside the recognized vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownProperties {
    /// Fail the whole translation.
    #[default]
    Reject,
    /// Skip the property, log a warning and report it in the result.
    Skip,
}

/// How to read a numeric string with no unit, e.g. `"42"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BareNumbers {
    /// Treat as a parse error; write `"42px"` or the number `42`.
    #[default]
    Reject,
    /// Treat as pixels.
    Pixels,
}

/// Options for [`translate_with`](crate::translate_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TranslateOptions {
    pub unknown_properties: UnknownProperties,
    pub bare_numbers: BareNumbers,
}

impl TranslateOptions {
    /// Create the default (strict) options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail-fast on everything: unknown names and unitless strings are errors.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Skip unknown properties and read unitless strings as pixels.
    pub fn lenient() -> Self {
        Self {
            unknown_properties: UnknownProperties::Skip,
            bare_numbers: BareNumbers::Pixels,
        }
    }

    /// Set the unknown-property policy (builder).
    pub fn with_unknown_properties(mut self, policy: UnknownProperties) -> Self {
        self.unknown_properties = policy;
        self
    }

    /// Set the bare-number policy (builder).
    pub fn with_bare_numbers(mut self, policy: BareNumbers) -> Self {
        self.bare_numbers = policy;
        self
    }
}
