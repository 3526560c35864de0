//! Terminal interaction: prompting and highlighting.

pub mod palette;
pub mod prompter;

pub use palette::{Color, Palette};
pub use prompter::{PromptError, Prompter};
