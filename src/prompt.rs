//! Operator prompts
//!
//! All questions go through the [`PromptSource`] trait. On a terminal the
//! questions are asked with `inquire`; otherwise answers are read one per
//! line from stdin, which is how lifecycle scripts and tests drive the tool.

use std::io::{self, BufRead, IsTerminal, Write};

use inquire::{Confirm, InquireError, Text};

use crate::error::{Result, SetupError};

pub trait PromptSource {
    /// Ask a free-text question. Blank answers are `None`.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Ask a yes/no question. Only `y` or `yes` (any case) count as yes.
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.ask(prompt)?.as_deref().is_some_and(is_affirmative))
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn normalize(answer: &str) -> Option<String> {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Pick the prompt implementation for the current stdin
pub fn for_stdin() -> Box<dyn PromptSource> {
    if io::stdin().is_terminal() {
        Box::new(InquirePrompt)
    } else {
        log::debug!("stdin is not a terminal, reading answers line by line");
        Box::new(LinePrompt::new(io::stdin().lock(), io::stdout()))
    }
}

/// Interactive prompts for a terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct InquirePrompt;

impl PromptSource for InquirePrompt {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        let answer = Text::new(prompt)
            .with_help_message("Leave blank to skip")
            .prompt_skippable()?;
        Ok(answer.as_deref().and_then(normalize))
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        match Confirm::new(prompt).with_default(false).prompt() {
            Ok(answer) => Ok(answer),
            Err(InquireError::OperationCanceled) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

/// Line-based prompts: writes the question, reads one line as the answer.
///
/// End of input answers every remaining question with a blank.
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> PromptSource for LinePrompt<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{prompt} ").map_err(prompt_error)?;
        self.writer.flush().map_err(prompt_error)?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line).map_err(prompt_error)?;
        if read == 0 {
            writeln!(self.writer).map_err(prompt_error)?;
            return Ok(None);
        }

        Ok(normalize(&line))
    }
}

fn prompt_error(err: io::Error) -> SetupError {
    SetupError::PromptFailed {
        message: err.to_string(),
    }
}

/// Canned answers for tests. Records every question asked.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: std::collections::VecDeque<String>,
    pub asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| (*a).to_string()).collect(),
            asked: Vec::new(),
        }
    }
}

#[cfg(test)]
impl PromptSource for ScriptedPrompt {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.asked.push(prompt.to_string());
        Ok(self.answers.pop_front().as_deref().and_then(normalize))
    }
}
