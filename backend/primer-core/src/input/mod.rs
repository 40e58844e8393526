//! Reading answers from the console.
//!
//! [`Prompter`] writes a prompt, reads one line, and hands back text. The
//! validated readers ([`Prompter::read_int`], [`Prompter::read_choice`])
//! explain what was wrong and ask again, up to `max_attempts` times.
//!
//! Any `BufRead`/`Write` pair works, so scripted input is as easy as stdin.

use crate::error::InputError;

use common::RedactedSecret;

use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};

use log::debug;

const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Inclusive bounds for [`Prompter::read_int`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntBounds {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl IntBounds {
    pub fn between(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn at_least(min: i64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn check(&self, value: i64) -> Result<i64, String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("Number must be at minimum {min}."));
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(format!("Number must be at maximum {max}."));
            }
        }
        Ok(value)
    }
}

/// Split `text` on `separator` and trim each piece.
pub fn split_fields(text: &str, separator: char) -> Vec<String> {
    text.split(separator)
        .map(|field| field.trim().to_string())
        .collect()
}

pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    terminal: bool,
    max_attempts: u32,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter on the process's stdin/stdout.
    ///
    /// Secrets are read without echo when stdin is a terminal.
    pub fn stdio() -> Self {
        let stdin = io::stdin();
        let terminal = stdin.is_terminal();
        Self {
            reader: stdin.lock(),
            writer: io::stdout(),
            terminal,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl<R, W> Prompter<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            terminal: false,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Prompt and read one line, without its line terminator.
    ///
    /// # Errors
    ///
    /// [`InputError::Eof`] when the input is exhausted.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::eof());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Read one line and split it into trimmed fields.
    pub fn read_fields(&mut self, prompt: &str, separator: char) -> Result<Vec<String>, InputError> {
        let line = self.read_line(prompt)?;
        Ok(split_fields(&line, separator))
    }

    /// Read a secret. On a terminal the input is not echoed.
    pub fn read_secret(&mut self, prompt: &str) -> Result<RedactedSecret, InputError> {
        if self.terminal {
            let secret = rpassword::prompt_password(prompt)?;
            return Ok(RedactedSecret::new(secret));
        }
        self.read_line(prompt).map(RedactedSecret::new)
    }

    /// Keep asking until `validate` accepts the answer.
    ///
    /// The rejection message is written after each bad answer.
    ///
    /// # Errors
    ///
    /// [`InputError::TooManyAttempts`] after `max_attempts` rejections,
    /// [`InputError::Eof`] if input runs out first.
    pub fn read_validated<T, F>(&mut self, prompt: &str, mut validate: F) -> Result<T, InputError>
    where
        F: FnMut(&str) -> Result<T, String>,
    {
        for attempt in 1..=self.max_attempts {
            let answer = self.read_line(prompt)?;
            match validate(answer.trim()) {
                Ok(value) => return Ok(value),
                Err(reason) => {
                    debug!("Rejected answer on attempt {attempt}: {reason}");
                    writeln!(self.writer, "{reason}")?;
                }
            }
        }
        Err(InputError::too_many_attempts(self.max_attempts))
    }

    /// Read an integer within `bounds`.
    pub fn read_int(&mut self, prompt: &str, bounds: IntBounds) -> Result<i64, InputError> {
        self.read_validated(prompt, |answer| {
            let value: i64 = answer
                .parse()
                .map_err(|_| format!("'{answer}' is not an integer."))?;
            bounds.check(value)
        })
    }

    /// Read one of `choices`, case-insensitively. Returns the choice as listed.
    pub fn read_choice(&mut self, prompt: &str, choices: &[&str]) -> Result<String, InputError> {
        self.read_validated(prompt, |answer| {
            choices
                .iter()
                .find(|choice| choice.eq_ignore_ascii_case(answer))
                .map(|choice| choice.to_string())
                .ok_or_else(|| format!("'{answer}' is not a valid choice."))
        })
    }
}
