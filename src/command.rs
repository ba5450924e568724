//! Textual command codec for particle effects
//!
//! A command names a particle type and its parameters on a single line, e.g.
//! `wispfx:wisp 1.00 0.25 0.50 1.00 1.00 true`. Floats are written with two
//! fraction digits and always a `.` separator, so output stays
//! machine-parsable regardless of host locale. Parsing walks the line with a
//! cursor and fails fast on the first missing delimiter or malformed token.

use thiserror::Error;

use crate::key::ParticleKey;
use crate::models::{ParticleEffect, WispParams};

/// Error type for command parsing failures.
///
/// Positions are byte offsets into the command string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A required character (usually the space delimiter) was missing
    #[error("expected '{expected}' at column {at}")]
    ExpectedChar { expected: char, at: usize },
    /// A float token was expected but the input was exhausted
    #[error("expected a float at column {at}")]
    ExpectedFloat { at: usize },
    /// A float token could not be parsed
    #[error("invalid float '{value}' at column {at}")]
    InvalidFloat { value: String, at: usize },
    /// A bool token was expected but the input was exhausted
    #[error("expected a bool at column {at}")]
    ExpectedBool { at: usize },
    /// A bool token was neither `true` nor `false`
    #[error("invalid bool '{value}' at column {at}")]
    InvalidBool { value: String, at: usize },
}

/// Cursor over a command string.
#[derive(Debug, Clone)]
pub struct StringReader<'a> {
    input: &'a str,
    cursor: usize,
}

impl<'a> StringReader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, cursor: 0 }
    }

    /// Byte offset of the next unread character.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn can_read(&self) -> bool {
        self.cursor < self.input.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.input[self.cursor..].chars().next()
    }

    /// The unread tail of the input.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.cursor..]
    }

    /// Consume one expected character or fail.
    pub fn expect(&mut self, expected: char) -> Result<(), SyntaxError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.cursor += expected.len_utf8();
                Ok(())
            }
            _ => Err(SyntaxError::ExpectedChar { expected, at: self.cursor }),
        }
    }

    fn read_while(&mut self, accept: impl Fn(char) -> bool) -> &'a str {
        let start = self.cursor;
        while let Some(c) = self.peek() {
            if !accept(c) {
                break;
            }
            self.cursor += c.len_utf8();
        }
        &self.input[start..self.cursor]
    }

    /// Read a float token (digits, `-`, and `.`).
    pub fn read_float(&mut self) -> Result<f32, SyntaxError> {
        let at = self.cursor;
        let token = self.read_while(|c| c.is_ascii_digit() || c == '-' || c == '.');
        if token.is_empty() {
            return Err(SyntaxError::ExpectedFloat { at });
        }
        token
            .parse()
            .map_err(|_| SyntaxError::InvalidFloat { value: token.to_string(), at })
    }

    /// Read a `true`/`false` token.
    pub fn read_bool(&mut self) -> Result<bool, SyntaxError> {
        let at = self.cursor;
        match self.read_unquoted() {
            "true" => Ok(true),
            "false" => Ok(false),
            "" => Err(SyntaxError::ExpectedBool { at }),
            other => Err(SyntaxError::InvalidBool { value: other.to_string(), at }),
        }
    }

    /// Read an unquoted token: everything up to the next space.
    pub fn read_unquoted(&mut self) -> &'a str {
        self.read_while(|c| c != ' ')
    }
}

/// Parse a wisp payload from a reader positioned just after the type key.
///
/// The five floats are required. One trailing bool sets `depth_test`
/// (defaults to true when absent). A second trailing bool is accepted but
/// also lands in `depth_test`; `no_clip` is never read from text.
pub fn parse_wisp_payload(reader: &mut StringReader<'_>) -> Result<WispParams, SyntaxError> {
    reader.expect(' ')?;
    let size = reader.read_float()?;
    reader.expect(' ')?;
    let r = reader.read_float()?;
    reader.expect(' ')?;
    let g = reader.read_float()?;
    reader.expect(' ')?;
    let b = reader.read_float()?;
    reader.expect(' ')?;
    let max_age_mul = reader.read_float()?;

    let mut depth_test = true;
    if reader.can_read() {
        reader.expect(' ')?;
        depth_test = reader.read_bool()?;
    }
    if reader.can_read() {
        reader.expect(' ')?;
        depth_test = reader.read_bool()?;
    }

    Ok(WispParams { size, r, g, b, max_age_mul, depth_test, no_clip: false })
}

/// Format an effect as a command line behind the given type key.
///
/// The wisp form writes five floats at two fraction digits followed by the
/// `depth_test` flag; `no_clip` has no textual representation.
pub fn write_command(effect: &ParticleEffect, key: &ParticleKey) -> String {
    match effect {
        ParticleEffect::Wisp(params) => format!(
            "{} {:.2} {:.2} {:.2} {:.2} {:.2} {}",
            key, params.size, params.r, params.g, params.b, params.max_age_mul, params.depth_test
        ),
    }
}
