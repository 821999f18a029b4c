use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Asks the operator to approve a destructive action.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self(prompt))
    }
}

/// Only `y` counts as approval, ignoring case and surrounding whitespace.
pub fn is_affirmative(response: &str) -> bool {
    response.trim().eq_ignore_ascii_case("y")
}

/// Writes the prompt to `output` and reads a single line from `input`.
pub struct PromptConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl PromptConfirm<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on stderr so stdout carries only the command's reply.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Confirm for PromptConfirm<R, W> {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(is_affirmative(&line))
    }
}
