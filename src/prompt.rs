// src/prompt.rs
use crate::error::{AppError, Result};
use line_report_engine::filesystem::resolve_input;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const DEFAULT_PROMPT: &str = "Enter file path: ";

/// Interactive request for a file path.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub text: String,
    /// Only echo the prompt when a person is typing; piped input keeps stdout clean.
    pub visible: bool,
}

impl Prompt {
    #[must_use]
    pub fn for_terminal(is_terminal: bool) -> Self {
        Self {
            text: DEFAULT_PROMPT.to_string(),
            visible: is_terminal,
        }
    }

    /// Show the prompt (if visible) and read one line as a path.
    ///
    /// # Errors
    /// `AppError::Input` when stdin is closed before a line arrives or cannot be
    /// decoded; `AppError::Output` when the prompt cannot be written.
    pub fn read_path<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<PathBuf> {
        if self.visible {
            out.write_all(self.text.as_bytes())
                .and_then(|()| out.flush())
                .map_err(AppError::Output)?;
        }

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => Err(AppError::Input(None)),
            Ok(_) => Ok(resolve_input(&line)),
            Err(e) => Err(AppError::Input(Some(e))),
        }
    }
}
