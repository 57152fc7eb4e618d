//! Line-oriented prompting over any reader/writer pair.
//!
//! [`Console`] wraps a `BufRead` source and a `Write` sink so the entry
//! stages can run against stdin/stdout in the binary and against in-memory
//! buffers in tests.

use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use tracing::debug;

/// Why a line typed at a number prompt was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("Invalid number, try again.")]
    NotANumber,
    #[error("Please enter a non-negative number.")]
    Negative,
}

/// Parses a trimmed line as a finite, non-negative number. Zero is accepted.
pub fn parse_non_negative(line: &str) -> Result<f64, InputError> {
    let value: f64 = line.trim().parse().map_err(|_| InputError::NotANumber)?;
    if !value.is_finite() {
        return Err(InputError::NotANumber);
    }
    if value < 0.0 {
        return Err(InputError::Negative);
    }
    Ok(value)
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one line of text followed by a newline.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Prints `prompt` without a newline and reads one trimmed line.
    ///
    /// Returns `None` once the input is exhausted.
    pub fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!(prompt, "Input closed at prompt");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like [`Console::prompt_line`], but treats end of input as an error.
    pub fn require_line(&mut self, prompt: &str) -> Result<String> {
        match self.prompt_line(prompt)? {
            Some(line) => Ok(line),
            None => bail!("input closed while waiting for: {}", prompt.trim_end()),
        }
    }

    /// Re-prompts until a finite, non-negative number is entered.
    pub fn prompt_non_negative(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let line = self.require_line(prompt)?;
            match parse_non_negative(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(input = %line, reason = ?e, "Rejected numeric input");
                    self.say(&e.to_string())?;
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
