//! Streaming JSON5 parsing for particle effect definitions
//!
//! Effect files feed the data-driven configuration path: each object is one
//! tagged particle effect in the schema format. Both single-line JSONL and
//! multi-line JSON5 are accepted; JSON5 adds comments, trailing commas, and
//! unquoted keys.

use std::io::Read;

use thiserror::Error;

use crate::models::ParticleEffect;

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
}

/// A warning from lenient stream parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub message: String,
    pub line: usize,
}

/// Result of parsing an effect stream.
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    pub effects: Vec<ParticleEffect>,
    pub warnings: Vec<Warning>,
}

/// Parse a single JSON5 string into a particle effect.
///
/// Returns `Err(ParseError)` tagged with the given line number if the text
/// is not a well-formed effect object.
pub fn parse_line(line: &str, line_number: usize) -> Result<ParticleEffect, ParseError> {
    json5::from_str(line).map_err(|e| ParseError { message: e.to_string(), line: line_number })
}

/// Write an effect as a single schema line (compact JSON, valid JSON5).
pub fn write_line(effect: &ParticleEffect) -> serde_json::Result<String> {
    serde_json::to_string(effect)
}

/// Tracks object boundaries across lines: brace/bracket depth outside of
/// string literals.
#[derive(Default)]
struct Boundary {
    braces: i32,
    brackets: i32,
    in_string: bool,
    escape_next: bool,
}

impl Boundary {
    fn feed(&mut self, line: &str) {
        for ch in line.chars() {
            if self.escape_next {
                self.escape_next = false;
                continue;
            }
            match ch {
                '\\' if self.in_string => self.escape_next = true,
                '"' => self.in_string = !self.in_string,
                '{' if !self.in_string => self.braces += 1,
                '}' if !self.in_string => self.braces -= 1,
                '[' if !self.in_string => self.brackets += 1,
                ']' if !self.in_string => self.brackets -= 1,
                _ => {}
            }
        }
        // Strings do not continue across lines
        self.in_string = false;
        self.escape_next = false;
    }

    fn balanced(&self) -> bool {
        self.braces == 0 && self.brackets == 0
    }
}

/// Parse a stream of JSON5 effect objects.
///
/// Objects may be one per line or span multiple lines; completion is
/// detected by brace balancing. A malformed object is recorded as a
/// line-numbered warning, and parsing stops there: with a syntax fault there
/// is no reliable boundary for the next object.
pub fn parse_stream<R: Read>(reader: R) -> ParseResult {
    use std::io::BufRead;

    let mut result = ParseResult::default();
    let buf_reader = std::io::BufReader::new(reader);
    let mut lines = buf_reader.lines();

    let mut accumulator = String::new();
    let mut boundary = Boundary::default();
    let mut start_line = 1;
    let mut current_line = 1;

    while let Some(Ok(line)) = lines.next() {
        if accumulator.is_empty() && line.trim().is_empty() {
            current_line += 1;
            start_line = current_line;
            continue;
        }

        if !accumulator.is_empty() {
            accumulator.push('\n');
        }
        accumulator.push_str(&line);
        boundary.feed(&line);

        if boundary.balanced() && !accumulator.trim().is_empty() {
            match json5::from_str::<ParticleEffect>(&accumulator) {
                Ok(effect) => result.effects.push(effect),
                Err(e) => {
                    result.warnings.push(Warning { message: e.to_string(), line: start_line });
                    return result;
                }
            }

            accumulator.clear();
            start_line = current_line + 1;
        }

        current_line += 1;
    }

    // Handle any remaining accumulated content
    if !accumulator.trim().is_empty() {
        match json5::from_str::<ParticleEffect>(&accumulator) {
            Ok(effect) => result.effects.push(effect),
            Err(e) => {
                result.warnings.push(Warning { message: e.to_string(), line: start_line });
            }
        }
    }

    result
}
