//! Validated line-oriented input.
//!
//! Every numeric prompt goes through [`Prompter::request`]: it keeps asking
//! until the line parses, so callers only ever see accepted values.

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

use thiserror::Error;

/// Why a line of input was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("line is not valid UTF-8 text")]
    NotText,

    #[error("'{0}' is not a whole number")]
    NotANumber(String),

    #[error("{value} is outside {min}-{max}")]
    OutOfRange { value: i64, min: u32, max: u32 },
}

/// Parse a whole number and check it against an inclusive range.
///
/// # Errors
///
/// Returns [`InputError`] when `raw` is not an integer or falls outside `range`.
pub fn parse_in_range(raw: &str, range: &RangeInclusive<u32>) -> Result<u32, InputError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;

    u32::try_from(value)
        .ok()
        .filter(|candidate| range.contains(candidate))
        .ok_or(InputError::OutOfRange {
            value,
            min: *range.start(),
            max: *range.end(),
        })
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
    line: Vec<u8>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: Vec::new(),
        }
    }

    /// Prompt until `parse` accepts a line.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures on either stream.
    pub fn request<T, F>(&mut self, prompt: &str, mut parse: F) -> io::Result<Option<T>>
    where
        F: FnMut(&str) -> Result<T, InputError>,
    {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            self.line.clear();
            if self.input.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }

            let outcome = std::str::from_utf8(&self.line)
                .map_err(|_| InputError::NotText)
                .and_then(&mut parse);
            match outcome {
                Ok(value) => return Ok(Some(value)),
                Err(error) => {
                    let input = String::from_utf8_lossy(&self.line);
                    tracing::debug!(input = input.trim(), %error, "rejected input");
                    writeln!(self.output, "Invalid input: {error}")?;
                }
            }
        }
    }

    /// # Errors
    ///
    /// Propagates I/O failures on either stream.
    pub fn request_in_range(
        &mut self,
        prompt: &str,
        range: RangeInclusive<u32>,
    ) -> io::Result<Option<u32>> {
        self.request(prompt, |raw| parse_in_range(raw, &range))
    }

    pub const fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
