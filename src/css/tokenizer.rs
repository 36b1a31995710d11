//! logos-based tokenizer for CSS property values.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `10px` as Dimension beats `10` Number + `px` Ident)
//! 2. For equal length matches, earlier-defined variants win
//!
//! Whitespace is skipped; callers that care about token boundaries (shorthand
//! splitting) split on whitespace before lexing.

use std::ops::Range;

use logos::Logos;

/// CSS value token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    // ── Compound tokens (longer matches, defined first) ──────────────

    /// Dimension: number with unit suffix like `10px`, `50%`, `1fr`.
    #[regex(r"-?([0-9]+(\.[0-9]+)?|\.[0-9]+)(px|%|fr)")]
    Dimension,

    /// Number: integer or float, possibly negative.
    #[regex(r"-?([0-9]+(\.[0-9]+)?|\.[0-9]+)")]
    Number,

    /// Identifier: keywords and function names (`auto`, `min-content`, `repeat`).
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    // ── Single-character punctuation ─────────────────────────────────

    /// `(`
    #[token("(")]
    ParenOpen,

    /// `)`
    #[token(")")]
    ParenClose,

    /// `,`
    #[token(",")]
    Comma,

    /// `/`
    #[token("/")]
    Slash,
}

/// A token with its source slice and byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub token: Token,
    pub text: &'a str,
    pub span: Range<usize>,
}

/// Input that contains a character no token accepts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unexpected `{text}` at byte {offset}")]
pub struct LexError {
    pub offset: usize,
    pub text: String,
}

/// Tokenize a CSS value string.
///
/// Unlike a stylesheet lexer this is strict: any unlexable character fails the
/// whole value, since a style value has no recovery point.
pub fn tokenize(input: &str) -> Result<Vec<Lexeme<'_>>, LexError> {
    let mut lexemes = Vec::new();
    for (result, span) in Token::lexer(input).spanned() {
        match result {
            Ok(token) => lexemes.push(Lexeme {
                token,
                text: &input[span.clone()],
                span,
            }),
            Err(()) => {
                return Err(LexError {
                    offset: span.start,
                    text: input[span].to_string(),
                })
            }
        }
    }
    Ok(lexemes)
}

/// Split a dimension string like "50%" or "1fr" into (number_part, unit_part).
pub fn split_dimension(s: &str) -> Option<(&str, &str)> {
    let unit_start = s
        .char_indices()
        .find(|(i, c)| !c.is_ascii_digit() && *c != '.' && !(*c == '-' && *i == 0))
        .map(|(i, _)| i)?;

    if unit_start == 0 || unit_start >= s.len() {
        return None;
    }

    Some((&s[..unit_start], &s[unit_start..]))
}
