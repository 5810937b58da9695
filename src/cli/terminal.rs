//! Line-oriented prompting over any reader/writer pair.
//!
//! The session runs against stdin/stdout in the binary and against
//! in-memory buffers in tests.

use anyhow::{bail, Context, Result};
use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Line that ends multi-line input.
pub const END_OF_BLOCK: &str = ".";

/// Prompt and output helper.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    /// Whether secrets can be read with echo disabled.
    hide_secrets: bool,
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// Terminal over the process's stdin and stdout.
    pub fn stdio() -> Self {
        use std::io::IsTerminal;

        let stdin = io::stdin();
        let hide_secrets = stdin.is_terminal();
        Self {
            input: stdin.lock(),
            output: io::stdout(),
            hide_secrets,
        }
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Terminal over arbitrary streams. Secrets are read as plain lines.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            hide_secrets: false,
        }
    }

    /// Consumes the terminal, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Writes an empty line.
    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Writes `prompt` without a newline and flushes.
    pub fn prompt(&mut self, prompt: &str) -> Result<()> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads one line without its terminator. `None` at end of input.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Prompts and returns the trimmed answer.
    ///
    /// End of input is an error so an action never runs on made-up answers.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        self.prompt(prompt)?;
        match self.read_line()? {
            Some(line) => Ok(line.trim().to_string()),
            None => {
                self.blank()?;
                bail!("Input closed")
            }
        }
    }

    /// Prompts with `(yes/no)`. Only `yes` or `y` count as agreement.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.ask(&format!("{prompt} (yes/no): "))?;
        Ok(is_yes(&answer))
    }

    /// Prompts with a `[Y/n]` or `[y/N]` hint; an empty answer picks `default`.
    pub fn confirm_or(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        let answer = self.ask(&format!("{prompt} {hint} "))?.to_lowercase();

        Ok(match answer.as_str() {
            "" => default,
            "y" | "yes" => true,
            "n" | "no" => false,
            _ => default,
        })
    }

    /// Reads a secret, with echo disabled when attached to a terminal.
    pub fn secret(&mut self, prompt: &str) -> Result<String> {
        if !self.hide_secrets {
            return self.ask(prompt);
        }

        self.prompt(prompt)?;
        let value = rpassword::read_password().context("Failed to read secret")?;
        Ok(value.trim().to_string())
    }

    /// Reads lines until a lone `.` or end of input.
    ///
    /// The text is returned verbatim with a trailing newline.
    pub fn read_block(&mut self, prompt: &str) -> Result<String> {
        self.say(prompt)?;
        self.output.flush()?;

        let mut text = String::new();
        while let Some(line) = self.read_line()? {
            if line == END_OF_BLOCK {
                break;
            }
            text.push_str(&line);
            text.push('\n');
        }
        Ok(text)
    }
}

/// True for `yes`/`y` in any case.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}
