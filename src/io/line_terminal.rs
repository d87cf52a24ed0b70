//! Line-oriented terminal over arbitrary streams
//!
//! Reads one line per prompt from any `BufRead` and writes to any `Write`.
//! Used when stdin is not a TTY (piped or scripted sessions) and in tests.
//! Secret input cannot be hidden on a plain stream, so it is read like any
//! other line.

use crate::core::traits::Terminal;
use crate::types::AtmError;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

pub struct LineTerminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineTerminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LineTerminal { input, output }
    }

    /// Consume the terminal, returning the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt_and_read(&mut self, prompt: &str) -> Result<String, AtmError> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AtmError::InputClosed);
        }
        // Echo the newline the user typed so transcripts stay line-aligned
        writeln!(self.output)?;

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}

impl LineTerminal<StdinLock<'static>, Stdout> {
    /// Terminal over the process's stdin and stdout
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        LineTerminal::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal for LineTerminal<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String, AtmError> {
        self.prompt_and_read(prompt)
    }

    fn read_secret(&mut self, prompt: &str) -> Result<String, AtmError> {
        self.prompt_and_read(prompt)
    }

    fn show(&mut self, message: &str) -> Result<(), AtmError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), AtmError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn terminal(input: &str) -> LineTerminal<Cursor<Vec<u8>>, Vec<u8>> {
        LineTerminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_read_line_strips_line_endings() {
        let mut term = terminal("first\r\nsecond\nthird");

        assert_eq!(term.read_line("a").unwrap(), "first");
        assert_eq!(term.read_line("b").unwrap(), "second");
        assert_eq!(term.read_line("c").unwrap(), "third");
    }

    #[test]
    fn test_read_line_keeps_inner_whitespace() {
        let mut term = terminal(" 1234 \n");
        assert_eq!(term.read_secret("PIN").unwrap(), " 1234 ");
    }

    #[test]
    fn test_end_of_input_is_input_closed() {
        let mut term = terminal("only\n");

        term.read_line("a").unwrap();

        assert_eq!(term.read_line("b"), Err(AtmError::InputClosed));
    }

    #[test]
    fn test_output_contains_prompts_and_messages() {
        let mut term = terminal("x\n");

        term.read_line("Enter something").unwrap();
        term.show("hello").unwrap();
        term.clear().unwrap();

        let output = String::from_utf8(term.into_output()).unwrap();
        assert_eq!(output, "Enter something: \nhello\n");
    }

    #[test]
    fn test_pause_consumes_one_line() {
        let mut term = terminal("\nnext\n");

        term.pause("Press Enter").unwrap();

        assert_eq!(term.read_line("again").unwrap(), "next");
    }
}
