//! Interactive console terminal
//!
//! Uses `dialoguer` for prompts so PIN entry is not echoed.

use crate::core::traits::Terminal;
use crate::types::AtmError;
use dialoguer::console::Term;
use dialoguer::{Input, Password};

pub struct ConsoleTerminal {
    term: Term,
}

impl ConsoleTerminal {
    pub fn new() -> Self {
        ConsoleTerminal {
            term: Term::stdout(),
        }
    }
}

impl Default for ConsoleTerminal {
    fn default() -> Self {
        ConsoleTerminal::new()
    }
}

// dialoguer renders its own ": " after the prompt and does not handle
// leading blank lines, so those are written separately.
fn split_leading_newlines(prompt: &str) -> (usize, &str) {
    let text = prompt.trim_start_matches('\n');
    (prompt.len() - text.len(), text)
}

impl ConsoleTerminal {
    fn write_blank_lines(&self, count: usize) -> Result<(), AtmError> {
        for _ in 0..count {
            self.term.write_line("")?;
        }
        Ok(())
    }
}

impl Terminal for ConsoleTerminal {
    fn read_line(&mut self, prompt: &str) -> Result<String, AtmError> {
        let (blank, text) = split_leading_newlines(prompt);
        self.write_blank_lines(blank)?;

        let line = Input::<String>::new()
            .with_prompt(text)
            .allow_empty(true)
            .interact_text_on(&self.term)?;
        Ok(line)
    }

    fn read_secret(&mut self, prompt: &str) -> Result<String, AtmError> {
        let (blank, text) = split_leading_newlines(prompt);
        self.write_blank_lines(blank)?;

        let secret = Password::new()
            .with_prompt(text)
            .allow_empty_password(true)
            .interact_on(&self.term)?;
        Ok(secret)
    }

    fn show(&mut self, message: &str) -> Result<(), AtmError> {
        self.term.write_line(message)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), AtmError> {
        self.term.clear_screen()?;
        Ok(())
    }
}
