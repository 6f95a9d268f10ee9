use anyhow::{Context, Result};
use inquire::{Confirm, InquireError};
use std::io::{self, BufRead, IsTerminal, Write};

/// Yes/no questions put to the operator.
pub trait Prompt {
    fn confirm(&mut self, message: &str) -> Result<bool>;
}

/// `y` or `yes`, case-insensitive. Anything else, including an empty answer, declines.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Interactive confirmation on a terminal, falling back to line-based answers
/// read from stdin when it is not a TTY (e.g. `yes | dutip ...`).
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Prompt for TerminalPrompt {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        if !io::stdin().is_terminal() {
            let stdin = io::stdin();
            return LinePrompt::new(stdin.lock(), io::stdout()).confirm(message);
        }

        let (question, details) = split_message(message);
        let mut confirm = Confirm::new(question).with_default(false);
        if let Some(details) = details {
            confirm = confirm.with_help_message(details);
        }

        match confirm.prompt() {
            Ok(answer) => Ok(answer),
            Err(InquireError::OperationCanceled) => Ok(false),
            Err(e) => Err(e).context("Failed to read confirmation"),
        }
    }
}

/// Prints the message and reads one answer line per question.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        writeln!(self.output, "{message}")?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input
            .read_line(&mut answer)
            .context("Failed to read confirmation")?;
        Ok(is_affirmative(&answer))
    }
}

// The first line is the question; anything after it (such as the command
// about to run) is shown as help text.
fn split_message(message: &str) -> (&str, Option<&str>) {
    match message.trim_end().split_once('\n') {
        Some((question, rest)) if !rest.trim().is_empty() => (question, Some(rest.trim())),
        Some((question, _)) => (question, None),
        None => (message.trim_end(), None),
    }
}
