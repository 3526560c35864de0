//! Line-oriented prompts over any reader/writer pair.
//!
//! The session never touches stdin or stdout directly; it talks to a
//! [`Prompter`], which the binary builds over the real terminal and tests
//! build over an in-memory script.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::ui::{Color, Palette};

/// Errors from prompting.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Input ended while an answer was still required.
    #[error("input closed before the prompt was answered")]
    InputClosed,

    /// Reading or writing the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Prompts on `writer` and reads answers from `reader`.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    palette: Palette,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given input and output.
    pub fn new(reader: R, writer: W, palette: Palette) -> Self {
        Self {
            reader,
            writer,
            palette,
        }
    }

    /// Palette used for highlighting.
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Consumes the prompter and returns its output.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Writes one line of text.
    pub fn say(&mut self, text: &str) -> Result<(), PromptError> {
        writeln!(self.writer, "{text}")?;
        Ok(())
    }

    /// Writes one highlighted line of text.
    pub fn say_colored(&mut self, color: Color, text: &str) -> Result<(), PromptError> {
        let painted = self.palette.paint(color, text);
        self.say(&painted)
    }

    /// Reads one raw line without its terminator. `None` at end of input.
    fn read_raw(&mut self) -> Result<Option<String>, PromptError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn show_prompt(&mut self, prompt: &str) -> Result<(), PromptError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Asks for a single line and returns it trimmed.
    pub fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.show_prompt(prompt)?;
        match self.read_raw()? {
            Some(line) => Ok(line.trim().to_string()),
            None => Err(PromptError::InputClosed),
        }
    }

    fn default_display(&self, prompt: &str, default: &str) -> String {
        if default.is_empty() {
            prompt.to_string()
        } else {
            format!("{prompt}{} ", self.palette.paint(Color::Dim, default))
        }
    }

    /// Asks for a single line, returning `default` when the answer is empty.
    ///
    /// A non-empty default is shown dimmed after the prompt. End of input is
    /// an error, since the answer is required.
    pub fn ask_with_default(&mut self, prompt: &str, default: &str) -> Result<String, PromptError> {
        let display = self.default_display(prompt, default);
        let answer = self.ask(&display)?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    /// Asks for an optional single line, returning `default` when the answer
    /// is empty or input has ended.
    pub fn ask_optional(&mut self, prompt: &str, default: &str) -> Result<String, PromptError> {
        let display = self.default_display(prompt, default);
        self.show_prompt(&display)?;
        let answer = self.read_raw()?.unwrap_or_default();
        let answer = answer.trim();
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer.to_string())
        }
    }

    /// Collects lines until an empty line or end of input.
    ///
    /// Lines are kept verbatim and joined with `\n`.
    pub fn ask_multiline(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.say(&format!("{prompt} (finish with an empty line):"))?;

        let mut lines = Vec::new();
        while let Some(line) = self.read_raw()? {
            if line.trim().is_empty() {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }

    /// Asks a yes/no question until the answer is recognised.
    ///
    /// `y`/`yes` mean yes; empty, `n`, and `no` mean no (case-insensitive).
    /// End of input means no.
    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool, PromptError> {
        loop {
            self.show_prompt(&format!("{question} (y/N): "))?;
            let Some(answer) = self.read_raw()? else {
                return Ok(false);
            };
            match answer.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "" | "n" | "no" => return Ok(false),
                _ => self.say_colored(Color::Red, "Please answer y or n.")?,
            }
        }
    }

    /// Asks for an explicit confirmation.
    ///
    /// Only `y`/`yes` confirm; any other answer, including end of input,
    /// declines.
    pub fn confirm(&mut self, question: &str) -> Result<bool, PromptError> {
        self.show_prompt(&format!("{question} (y/N): "))?;
        let answer = self.read_raw()?.unwrap_or_default();
        Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}
