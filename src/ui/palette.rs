//! ANSI highlighting for prompts and status lines.

use std::env;
use std::io::IsTerminal;

/// Colors used by the prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Errors and cancellation.
    Red,
    /// Success banners.
    Green,
    /// Step prompts.
    Yellow,
    /// Title banner.
    Cyan,
    /// Default values shown after a prompt.
    Dim,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Cyan => "\x1b[36m",
            Self::Dim => "\x1b[2m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Applies colors when enabled, passes text through otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// A palette that emits ANSI sequences.
    pub fn colored() -> Self {
        Self { enabled: true }
    }

    /// A palette that never emits ANSI sequences.
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    /// Chooses colors for stdout: off when requested, when `NO_COLOR` is
    /// set, or when stdout is not a terminal.
    pub fn detect(no_color: bool) -> Self {
        let enabled = !no_color
            && !env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
            && std::io::stdout().is_terminal();
        Self { enabled }
    }

    /// Wraps `text` in the color's escape sequence.
    pub fn paint(&self, color: Color, text: &str) -> String {
        if self.enabled {
            format!("{}{text}{RESET}", color.code())
        } else {
            text.to_string()
        }
    }
}
