//! Line-oriented input with retry on unparseable numbers.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Context;
use thiserror::Error;

pub const INVALID_NUMBER: &str = "Número inválido, intenta de nuevo.";

/// Input reached end-of-file while an answer was expected.
#[derive(Debug, Error)]
#[error("input closed")]
pub struct InputClosed;

/// Reads answers from `input`, writing prompts and retry messages to `output`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write one line of output.
    pub fn say(&mut self, line: impl AsRef<str>) -> anyhow::Result<()> {
        writeln!(self.output, "{}", line.as_ref()).context("failed to write output")
    }

    /// Print `prompt` (if any) and read one trimmed line.
    ///
    /// Fails with [`InputClosed`] at end of input.
    pub fn line(&mut self, prompt: Option<&str>) -> anyhow::Result<String> {
        if let Some(prompt) = prompt {
            write!(self.output, "{prompt}").context("failed to write prompt")?;
        }
        self.output.flush().context("failed to flush output")?;

        let mut buf = String::new();
        let read = self
            .input
            .read_line(&mut buf)
            .context("failed to read input")?;
        if read == 0 {
            return Err(InputClosed.into());
        }
        Ok(buf.trim().to_string())
    }

    /// Read until the answer parses as `T`, re-prompting on failure.
    pub fn number<T: FromStr>(&mut self, prompt: Option<&str>) -> anyhow::Result<T> {
        loop {
            let answer = self.line(prompt)?;
            match answer.parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.say(INVALID_NUMBER)?,
            }
        }
    }

    /// Print `prompt` once, then read until the answer parses as `T`.
    ///
    /// Retries only print the invalid-number message.
    pub fn number_prompted_once<T: FromStr>(&mut self, prompt: &str) -> anyhow::Result<T> {
        write!(self.output, "{prompt}").context("failed to write prompt")?;
        self.number(None)
    }

    /// Like [`Prompter::number`], but a blank answer yields `None`.
    pub fn optional_number<T: FromStr>(&mut self, prompt: &str) -> anyhow::Result<Option<T>> {
        loop {
            let answer = self.line(Some(prompt))?;
            if answer.is_empty() {
                return Ok(None);
            }
            match answer.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say(INVALID_NUMBER)?,
            }
        }
    }

    /// Read a line; a blank answer yields `None`.
    pub fn optional_text(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        let answer = self.line(Some(prompt))?;
        Ok((!answer.is_empty()).then_some(answer))
    }
}
