//! Grid value parsers: track lists, auto tracks, auto flow, line placement.
//!
//! Track lists are parsed by recursive descent over the lexeme stream, so
//! nested calls such as `repeat(2, minmax(auto, 1fr))` need no whitespace
//! pre-splitting.
//!
//! Grammar:
//!
//! ```text
//! track-list  := track+
//! track       := repeat | leaf
//! repeat      := "repeat" "(" count "," leaf+ ")"
//! count       := "auto-fill" | "auto-fit" | positive-integer
//! leaf        := keyword | length-percentage | flex | fit-content | minmax
//! fit-content := "fit-content" "(" length-percentage ")"
//! minmax      := "minmax" "(" min "," max ")"
//! ```

use crate::css::scalar::{
    length_percentage_token, numeric, parse_number, require_string, Numeric, ParseContext,
};
use crate::css::tokenizer::{tokenize, Lexeme, Token};
use crate::css::value::StyleValue;
use crate::error::TranslateError;
use crate::style::{
    GridAutoFlow, GridPlacement, GridTrackRepetition, Line, LengthPercentage, MaxTrackSizingFunction,
    MinTrackSizingFunction, NonRepeatedTrackSizingFunction, TrackSizingFunction,
};

/// Whether `repeat()` may appear at the top level of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Repeat {
    Allowed,
    Forbidden,
}

struct Parser<'a, 'c> {
    cx: &'c ParseContext,
    source: &'a str,
    lexemes: Vec<Lexeme<'a>>,
    pos: usize,
}

impl<'a, 'c> Parser<'a, 'c> {
    fn new(cx: &'c ParseContext, source: &'a str) -> Result<Self, TranslateError> {
        let lexemes = tokenize(source).map_err(|e| cx.invalid(e.text, "unexpected character"))?;
        Ok(Self {
            cx,
            source,
            lexemes,
            pos: 0,
        })
    }

    fn peek(&self) -> Option<&Lexeme<'a>> {
        self.lexemes.get(self.pos)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.lexemes.len()
    }

    fn next(&mut self) -> Result<Lexeme<'a>, TranslateError> {
        let lexeme = self
            .lexemes
            .get(self.pos)
            .cloned()
            .ok_or_else(|| self.cx.invalid(self.source.trim(), "unexpected end of value"))?;
        self.pos += 1;
        Ok(lexeme)
    }

    fn expect(&mut self, token: Token, what: &str) -> Result<Lexeme<'a>, TranslateError> {
        let lexeme = self.next()?;
        if lexeme.token == token {
            Ok(lexeme)
        } else {
            Err(self.cx.invalid(lexeme.text, format!("expected {what}")))
        }
    }

    /// Consume `(` after a function name.
    fn open_call(&mut self) -> Result<(), TranslateError> {
        self.expect(Token::ParenOpen, "`(`").map(drop)
    }

    fn is_call(&self, lexeme: &Lexeme<'a>) -> bool {
        lexeme.token == Token::Ident
            && self.peek().is_some_and(|next| next.token == Token::ParenOpen)
    }

    /// Require whitespace between the previous track and the next one.
    /// A closing paren may follow a track directly.
    fn separated(&self) -> Result<(), TranslateError> {
        let previous_end = self
            .pos
            .checked_sub(1)
            .and_then(|i| self.lexemes.get(i))
            .map_or(0, |l| l.span.end);
        match self.peek() {
            Some(next) if next.token != Token::ParenClose && next.span.start <= previous_end => {
                Err(self.cx.invalid(next.text, "tracks must be separated by whitespace"))
            }
            _ => Ok(()),
        }
    }

    // ── Lists ────────────────────────────────────────────────────────

    fn track_list(&mut self, repeat: Repeat) -> Result<Vec<TrackSizingFunction>, TranslateError> {
        if self.at_end() {
            return Err(self.cx.invalid(self.source.trim(), "empty track list"));
        }
        let mut tracks = Vec::new();
        while !self.at_end() {
            if !tracks.is_empty() {
                self.separated()?;
            }
            tracks.push(self.track(repeat)?);
        }
        Ok(tracks)
    }

    fn track(&mut self, repeat: Repeat) -> Result<TrackSizingFunction, TranslateError> {
        let lexeme = self.next()?;
        if lexeme.token == Token::Ident && lexeme.text == "repeat" {
            if repeat == Repeat::Forbidden {
                return Err(self.cx.invalid(lexeme.text, "`repeat()` is not allowed here"));
            }
            return self.repeat();
        }
        self.leaf(lexeme).map(TrackSizingFunction::Single)
    }

    fn repeat(&mut self) -> Result<TrackSizingFunction, TranslateError> {
        self.open_call()?;
        let count = self.repetition()?;
        self.expect(Token::Comma, "`,` after the repeat count")?;
        let mut tracks = Vec::new();
        loop {
            if !tracks.is_empty() {
                self.separated()?;
            }
            let lexeme = self.next()?;
            match lexeme.token {
                Token::ParenClose if !tracks.is_empty() => break,
                Token::ParenClose => {
                    return Err(self.cx.invalid(lexeme.text, "`repeat()` needs at least one track"))
                }
                Token::Ident if lexeme.text == "repeat" => {
                    return Err(self.cx.invalid(lexeme.text, "`repeat()` cannot be nested"))
                }
                _ => tracks.push(self.leaf(lexeme)?),
            }
        }
        Ok(TrackSizingFunction::Repeat(count, tracks))
    }

    fn repetition(&mut self) -> Result<GridTrackRepetition, TranslateError> {
        let lexeme = self.next()?;
        match (lexeme.token, lexeme.text) {
            (Token::Ident, "auto-fill") => Ok(GridTrackRepetition::AutoFill),
            (Token::Ident, "auto-fit") => Ok(GridTrackRepetition::AutoFit),
            (Token::Number, text) => match text.parse::<u16>() {
                Ok(n) if n > 0 => Ok(GridTrackRepetition::Count(n)),
                _ => Err(self.cx.invalid(text, "repeat count must be a positive integer")),
            },
            (_, text) => Err(self.cx.invalid(text, "expected `auto-fill`, `auto-fit` or a count")),
        }
    }

    // ── Single tracks ────────────────────────────────────────────────

    fn leaf(&mut self, lexeme: Lexeme<'a>) -> Result<NonRepeatedTrackSizingFunction, TranslateError> {
        match lexeme.token {
            Token::Ident if self.is_call(&lexeme) => match lexeme.text {
                "minmax" => {
                    self.open_call()?;
                    let min = self.min()?;
                    self.expect(Token::Comma, "`,` in `minmax()`")?;
                    let max = self.max()?;
                    self.expect(Token::ParenClose, "`)`")?;
                    Ok(NonRepeatedTrackSizingFunction { min, max })
                }
                "fit-content" => self.fit_content().map(NonRepeatedTrackSizingFunction::fit_content),
                other => Err(self.cx.invalid(other, "unknown track function")),
            },
            Token::Ident => match lexeme.text {
                "auto" => Ok(NonRepeatedTrackSizingFunction::AUTO),
                "min-content" => Ok(NonRepeatedTrackSizingFunction::MIN_CONTENT),
                "max-content" => Ok(NonRepeatedTrackSizingFunction::MAX_CONTENT),
                "minmax" | "fit-content" | "repeat" => Err(self.cx.invalid(lexeme.text, "expected `(`")),
                other => Err(self.cx.invalid(other, "unknown track size")),
            },
            Token::Number | Token::Dimension => match numeric(self.cx, &lexeme)? {
                Numeric::Fr(fr) => self.fraction(&lexeme, fr).map(NonRepeatedTrackSizingFunction::fr),
                _ => length_percentage_token(self.cx, &lexeme).map(NonRepeatedTrackSizingFunction::fixed),
            },
            _ => Err(self.cx.invalid(lexeme.text, "expected a track size")),
        }
    }

    fn fraction(&self, lexeme: &Lexeme<'a>, fr: f32) -> Result<f32, TranslateError> {
        if fr < 0.0 {
            Err(self.cx.invalid(lexeme.text, "`fr` must not be negative"))
        } else {
            Ok(fr)
        }
    }

    /// Parse `(limit)` after `fit-content`.
    fn fit_content(&mut self) -> Result<LengthPercentage, TranslateError> {
        self.open_call()?;
        let lexeme = self.next()?;
        let limit = length_percentage_token(self.cx, &lexeme)?;
        self.expect(Token::ParenClose, "`)`")?;
        Ok(limit)
    }

    fn min(&mut self) -> Result<MinTrackSizingFunction, TranslateError> {
        let lexeme = self.next()?;
        match lexeme.token {
            Token::Ident => match lexeme.text {
                "auto" => Ok(MinTrackSizingFunction::Auto),
                "min-content" => Ok(MinTrackSizingFunction::MinContent),
                "max-content" => Ok(MinTrackSizingFunction::MaxContent),
                "fit-content" => Err(self.cx.invalid(lexeme.text, "`fit-content` is not a valid minimum")),
                other => Err(self.cx.invalid(other, "unknown track size")),
            },
            Token::Number | Token::Dimension => match numeric(self.cx, &lexeme)? {
                Numeric::Fr(_) => Err(self.cx.invalid(lexeme.text, "`fr` is not a valid minimum")),
                _ => length_percentage_token(self.cx, &lexeme).map(MinTrackSizingFunction::Fixed),
            },
            _ => Err(self.cx.invalid(lexeme.text, "expected a track size")),
        }
    }

    fn max(&mut self) -> Result<MaxTrackSizingFunction, TranslateError> {
        let lexeme = self.next()?;
        match lexeme.token {
            Token::Ident if lexeme.text == "fit-content" => {
                self.fit_content().map(MaxTrackSizingFunction::FitContent)
            }
            Token::Ident => match lexeme.text {
                "auto" => Ok(MaxTrackSizingFunction::Auto),
                "min-content" => Ok(MaxTrackSizingFunction::MinContent),
                "max-content" => Ok(MaxTrackSizingFunction::MaxContent),
                other => Err(self.cx.invalid(other, "unknown track size")),
            },
            Token::Number | Token::Dimension => match numeric(self.cx, &lexeme)? {
                Numeric::Fr(fr) => self.fraction(&lexeme, fr).map(MaxTrackSizingFunction::Fraction),
                _ => length_percentage_token(self.cx, &lexeme).map(MaxTrackSizingFunction::Fixed),
            },
            _ => Err(self.cx.invalid(lexeme.text, "expected a track size")),
        }
    }
}

// ── Public entry points ──────────────────────────────────────────────

/// Parse a `gridTemplateRows` / `gridTemplateColumns` track list.
pub fn parse_track_list(cx: &ParseContext, text: &str) -> Result<Vec<TrackSizingFunction>, TranslateError> {
    Parser::new(cx, text)?.track_list(Repeat::Allowed)
}

/// Parse a `gridAutoRows` / `gridAutoColumns` list, which has no `repeat()`.
pub fn parse_auto_tracks(
    cx: &ParseContext,
    text: &str,
) -> Result<Vec<NonRepeatedTrackSizingFunction>, TranslateError> {
    Parser::new(cx, text)?
        .track_list(Repeat::Forbidden)?
        .into_iter()
        .map(|track| match track {
            TrackSizingFunction::Single(single) => Ok(single),
            TrackSizingFunction::Repeat(..) => Err(cx.invalid(text.trim(), "`repeat()` is not allowed here")),
        })
        .collect()
}

/// Parse `gridAutoFlow`: `row`, `column`, `dense`, or a direction plus `dense`
/// in either order.
pub fn parse_grid_auto_flow(cx: &ParseContext, value: &StyleValue) -> Result<GridAutoFlow, TranslateError> {
    let text = require_string(cx, value)?;
    let words: Vec<&str> = text.split_whitespace().collect();
    match words.as_slice() {
        ["row"] => Ok(GridAutoFlow::Row),
        ["column"] => Ok(GridAutoFlow::Column),
        ["dense"] | ["row", "dense"] | ["dense", "row"] => Ok(GridAutoFlow::RowDense),
        ["column", "dense"] | ["dense", "column"] => Ok(GridAutoFlow::ColumnDense),
        _ => Err(cx.unknown_keyword(text.trim())),
    }
}

/// Parse `gridRow` / `gridColumn`.
///
/// A number is a start line. A string is `START` or `START / END`, each side
/// being `auto`, a non-zero line number, or `span N`. A missing end is `auto`.
pub fn parse_grid_line(cx: &ParseContext, value: &StyleValue) -> Result<Line<GridPlacement>, TranslateError> {
    let text = match value {
        StyleValue::Number(n) => {
            let start = line_number(cx, parse_number(cx, *n)?, &n.to_string())?;
            return Ok(Line::new(start, GridPlacement::Auto));
        }
        StyleValue::String(s) => s.as_str(),
    };
    let lexemes = tokenize(text).map_err(|e| cx.invalid(e.text, "unexpected character"))?;
    let mut sides = lexemes.split(|l| l.token == Token::Slash);
    let start = placement(cx, text, sides.next().unwrap_or_default())?;
    let end = match sides.next() {
        Some(side) => placement(cx, text, side)?,
        None => GridPlacement::Auto,
    };
    if sides.next().is_some() {
        return Err(cx.invalid(text.trim(), "expected at most one `/`"));
    }
    Ok(Line::new(start, end))
}

fn placement(cx: &ParseContext, text: &str, side: &[Lexeme<'_>]) -> Result<GridPlacement, TranslateError> {
    match side {
        [] => Err(cx.invalid(text.trim(), "missing grid line")),
        [l] if l.token == Token::Ident && l.text == "auto" => Ok(GridPlacement::Auto),
        [l] if l.token == Token::Number => line_number(cx, integer(cx, l)?, l.text),
        [kw, l] if kw.token == Token::Ident && kw.text == "span" && l.token == Token::Number => {
            let n = integer(cx, l)?;
            if n >= 1.0 && n <= f32::from(u16::MAX) {
                Ok(GridPlacement::Span(n as u16))
            } else {
                Err(cx.invalid(l.text, "span must be a positive integer"))
            }
        }
        [first, ..] => Err(cx.invalid(first.text, "expected `auto`, a line number or `span N`")),
    }
}

fn integer(cx: &ParseContext, lexeme: &Lexeme<'_>) -> Result<f32, TranslateError> {
    match numeric(cx, lexeme)? {
        Numeric::Bare(n) if n.fract() == 0.0 => Ok(n),
        _ => Err(cx.invalid(lexeme.text, "expected an integer")),
    }
}

fn line_number(cx: &ParseContext, n: f32, text: &str) -> Result<GridPlacement, TranslateError> {
    if n.fract() != 0.0 || n == 0.0 || n < f32::from(i16::MIN) || n > f32::from(i16::MAX) {
        return Err(cx.invalid(text, "line must be a non-zero integer"));
    }
    Ok(GridPlacement::Line(n as i16))
}
