//! Confirmation prompts
//!
//! Operations never prompt directly; they ask a [`Confirmer`], so the
//! synchronizer runs headless in tests with canned answers and non-interactive
//! with `--yes`.

use std::io::{BufRead, IsTerminal, Write};

use inquire::{Confirm, InquireError};

use crate::error::{DevStudioError, Result};

/// Answers yes/no questions before destructive steps
pub trait Confirmer {
    /// Ask `message`; `Ok(false)` means the user declined.
    ///
    /// An interrupt (Ctrl-C) surfaces as [`DevStudioError::Interrupted`].
    fn confirm(&mut self, message: &str) -> Result<bool>;
}

/// Prompts on the terminal, defaulting to "no".
///
/// Uses an inquire prompt when stdin is a terminal, otherwise reads one line
/// from stdin and accepts only `y` or `yes`.
#[derive(Debug, Default)]
pub struct PromptConfirmer;

impl Confirmer for PromptConfirmer {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        if !std::io::stdin().is_terminal() {
            return confirm_from_reader(message, &mut std::io::stdin().lock());
        }

        match Confirm::new(message)
            .with_default(false)
            .with_help_message("Press 'y' to proceed, Enter or Esc to cancel")
            .prompt()
        {
            Ok(answer) => Ok(answer),
            Err(InquireError::OperationCanceled) => Ok(false),
            Err(InquireError::NotTTY) => {
                confirm_from_reader(message, &mut std::io::stdin().lock())
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Answers every question with "yes" (`--yes`)
#[derive(Debug, Default)]
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        tracing::debug!(%message, "assuming yes");
        Ok(true)
    }
}

/// Replays fixed answers and records the questions asked.
///
/// Declines once the answers run out.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct CannedConfirmer {
    answers: std::collections::VecDeque<bool>,
    pub asked: Vec<String>,
}

#[cfg(test)]
impl CannedConfirmer {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            asked: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Confirmer for CannedConfirmer {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        self.asked.push(message.to_string());
        Ok(self.answers.pop_front().unwrap_or(false))
    }
}

/// Print `message (y/N): ` and read one answer line from `reader`
fn confirm_from_reader(message: &str, reader: &mut dyn BufRead) -> Result<bool> {
    print!("{message} (y/N): ");
    std::io::stdout()
        .flush()
        .map_err(|e| DevStudioError::PromptFailed {
            message: e.to_string(),
        })?;

    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|e| DevStudioError::PromptFailed {
            message: e.to_string(),
        })?;

    if read == 0 {
        println!();
        return Ok(false);
    }

    Ok(is_affirmative(&line))
}

fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
