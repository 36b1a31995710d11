//! Value-kind parsers: numbers, lengths, percentages, `auto`, aspect ratios.
//!
//! Every parser takes a [`ParseContext`] naming the property being parsed, so
//! errors carry the property without each call site threading it through.

use crate::config::{BareNumbers, TranslateOptions};
use crate::css::property::Property;
use crate::css::tokenizer::{self, split_dimension, Lexeme, Token};
use crate::css::value::{StyleValue, ValueKind};
use crate::error::TranslateError;
use crate::style::{LengthPercentage, LengthPercentageAuto};

/// The property being parsed plus the options that change how values read.
#[derive(Debug, Clone, Copy)]
pub struct ParseContext {
    pub property: Property,
    pub bare_numbers: BareNumbers,
}

impl ParseContext {
    pub fn new(property: Property, options: &TranslateOptions) -> Self {
        Self {
            property,
            bare_numbers: options.bare_numbers,
        }
    }

    pub(crate) fn invalid(&self, value: impl Into<String>, reason: impl Into<String>) -> TranslateError {
        TranslateError::Parse {
            property: self.property,
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unknown_keyword(&self, value: &str) -> TranslateError {
        TranslateError::UnknownEnumValue {
            property: self.property,
            value: value.to_string(),
        }
    }

    pub(crate) fn arity(&self, count: usize, max: usize) -> TranslateError {
        TranslateError::ShorthandArity {
            property: self.property,
            count,
            max,
        }
    }

    pub(crate) fn type_mismatch(&self, expected: ValueKind, actual: &StyleValue) -> TranslateError {
        TranslateError::TypeMismatch {
            property: self.property,
            expected,
            actual: actual.clone(),
        }
    }
}

/// A numeric token split into magnitude and unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Numeric {
    Px(f32),
    /// Percent as written, not yet divided by 100.
    Percent(f32),
    Fr(f32),
    /// A number with no unit.
    Bare(f32),
}

// ── Numbers ──────────────────────────────────────────────────────────

/// Reject NaN and infinities.
pub fn parse_number(cx: &ParseContext, n: f32) -> Result<f32, TranslateError> {
    if n.is_finite() {
        Ok(n)
    } else {
        Err(cx.invalid(n.to_string(), "number must be finite"))
    }
}

/// Require a number value.
pub fn require_number(cx: &ParseContext, value: &StyleValue) -> Result<f32, TranslateError> {
    match value {
        StyleValue::Number(n) => parse_number(cx, *n),
        StyleValue::String(_) => Err(cx.type_mismatch(ValueKind::Number, value)),
    }
}

/// Require a string value.
pub fn require_string<'a>(cx: &ParseContext, value: &'a StyleValue) -> Result<&'a str, TranslateError> {
    match value {
        StyleValue::String(s) => Ok(s),
        StyleValue::Number(_) => Err(cx.type_mismatch(ValueKind::String, value)),
    }
}

/// Read a `Number` or `Dimension` lexeme.
pub(crate) fn numeric(cx: &ParseContext, lexeme: &Lexeme<'_>) -> Result<Numeric, TranslateError> {
    let text = lexeme.text;
    let (digits, unit) = match lexeme.token {
        Token::Number => (text, ""),
        Token::Dimension => split_dimension(text).ok_or_else(|| cx.invalid(text, "malformed dimension"))?,
        _ => return Err(cx.invalid(text, "expected a number")),
    };
    let n: f32 = digits
        .parse()
        .map_err(|_| cx.invalid(text, "malformed number"))?;
    if !n.is_finite() {
        return Err(cx.invalid(text, "number out of range"));
    }
    match unit {
        "" => Ok(Numeric::Bare(n)),
        "px" => Ok(Numeric::Px(n)),
        "%" => Ok(Numeric::Percent(n)),
        "fr" => Ok(Numeric::Fr(n)),
        other => Err(cx.invalid(text, format!("unsupported unit `{other}`"))),
    }
}

/// Lex `text` and require exactly one token.
///
/// The error distinguishes an unknown unit (`10em` lexes as number + ident
/// with no gap) from stray characters and from several values.
pub(crate) fn single<'a>(cx: &ParseContext, text: &'a str) -> Result<Lexeme<'a>, TranslateError> {
    let mut lexemes = tokenizer::tokenize(text).map_err(|e| cx.invalid(e.text, "unexpected character"))?;
    match lexemes.len() {
        0 => Err(cx.invalid(text, "empty value")),
        1 => Ok(lexemes.remove(0)),
        _ => {
            let (first, second) = (&lexemes[0], &lexemes[1]);
            if lexemes.len() == 2
                && first.token == Token::Number
                && second.token == Token::Ident
                && first.span.end == second.span.start
            {
                Err(cx.invalid(text.trim(), format!("unsupported unit `{}`", second.text)))
            } else {
                Err(cx.invalid(text.trim(), "expected a single value"))
            }
        }
    }
}

// ── Lengths ──────────────────────────────────────────────────────────

/// Parse one lexeme as a length or percentage.
pub(crate) fn length_percentage_token(
    cx: &ParseContext,
    lexeme: &Lexeme<'_>,
) -> Result<LengthPercentage, TranslateError> {
    match lexeme.token {
        Token::Number | Token::Dimension => match numeric(cx, lexeme)? {
            Numeric::Px(n) => Ok(LengthPercentage::length(n)),
            Numeric::Percent(p) => Ok(LengthPercentage::percent(p / 100.0)),
            Numeric::Fr(_) => Err(cx.invalid(lexeme.text, "`fr` is only valid in grid track lists")),
            Numeric::Bare(n) => match cx.bare_numbers {
                BareNumbers::Pixels => Ok(LengthPercentage::length(n)),
                BareNumbers::Reject => Err(cx.invalid(
                    lexeme.text,
                    format!("missing unit; write `{}px` or pass a number", lexeme.text),
                )),
            },
        },
        _ => Err(cx.invalid(lexeme.text, "expected a length or percentage")),
    }
}

/// Parse one lexeme as a length, percentage or `auto`.
pub(crate) fn length_percentage_auto_token(
    cx: &ParseContext,
    lexeme: &Lexeme<'_>,
) -> Result<LengthPercentageAuto, TranslateError> {
    match lexeme.token {
        Token::Ident if lexeme.text == "auto" => Ok(LengthPercentageAuto::AUTO),
        Token::Number | Token::Dimension => length_percentage_token(cx, lexeme).map(Into::into),
        _ => Err(cx.invalid(lexeme.text, "expected a length, percentage or `auto`")),
    }
}

/// Parse a single-token string such as `"10px"` or `"50%"`.
pub fn length_percentage_str(cx: &ParseContext, text: &str) -> Result<LengthPercentage, TranslateError> {
    length_percentage_token(cx, &single(cx, text)?)
}

/// Parse a single-token string such as `"10px"`, `"50%"` or `"auto"`.
pub fn length_percentage_auto_str(
    cx: &ParseContext,
    text: &str,
) -> Result<LengthPercentageAuto, TranslateError> {
    length_percentage_auto_token(cx, &single(cx, text)?)
}

/// A number is pixels; a string is one length or percentage.
pub fn parse_length_percentage(
    cx: &ParseContext,
    value: &StyleValue,
) -> Result<LengthPercentage, TranslateError> {
    match value {
        StyleValue::Number(n) => parse_number(cx, *n).map(LengthPercentage::length),
        StyleValue::String(s) => length_percentage_str(cx, s),
    }
}

/// A number is pixels; a string is one length, percentage or `auto`.
pub fn parse_length_percentage_auto(
    cx: &ParseContext,
    value: &StyleValue,
) -> Result<LengthPercentageAuto, TranslateError> {
    match value {
        StyleValue::Number(n) => parse_number(cx, *n).map(LengthPercentageAuto::length),
        StyleValue::String(s) => length_percentage_auto_str(cx, s),
    }
}

// ── Aspect ratio ─────────────────────────────────────────────────────

/// A positive number, or `"W/H"`.
pub fn parse_aspect_ratio(cx: &ParseContext, value: &StyleValue) -> Result<f32, TranslateError> {
    let ratio = match value {
        StyleValue::Number(n) => parse_number(cx, *n)?,
        StyleValue::String(s) => {
            let (w, h) = s
                .split_once('/')
                .ok_or_else(|| cx.invalid(s.trim(), "expected `W/H`"))?;
            let width = ratio_part(cx, w)?;
            let height = ratio_part(cx, h)?;
            if height == 0.0 {
                return Err(cx.invalid(s.trim(), "zero denominator"));
            }
            width / height
        }
    };
    if ratio.is_finite() && ratio > 0.0 {
        Ok(ratio)
    } else {
        Err(cx.invalid(value_text(value), "ratio must be positive"))
    }
}

fn ratio_part(cx: &ParseContext, text: &str) -> Result<f32, TranslateError> {
    let lexeme = single(cx, text)?;
    match numeric(cx, &lexeme)? {
        Numeric::Bare(n) => Ok(n),
        _ => Err(cx.invalid(lexeme.text, "ratio terms must be unitless numbers")),
    }
}

fn value_text(value: &StyleValue) -> String {
    match value {
        StyleValue::Number(n) => n.to_string(),
        StyleValue::String(s) => s.trim().to_string(),
    }
}
