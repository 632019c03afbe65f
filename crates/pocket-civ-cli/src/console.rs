//! Line-oriented terminal I/O.
//!
//! All prompting goes through [`Console`], which is generic over its reader
//! and writer so menus can be driven from scripted input in tests.

use crate::error::{CliError, Result};
use std::fmt::Display;
use std::io::{BufRead, Write};

/// A prompt/response terminal over any reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write a line of output.
    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Write text without a newline and flush it.
    pub fn prompt(&mut self, text: impl Display) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line with its line ending removed. End of input is an error.
    pub fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Prompt for an integer. `None` when the reply is not a number.
    pub fn ask_int(&mut self, question: &str) -> Result<Option<i64>> {
        self.prompt(question)?;
        Ok(self.read_line()?.trim().parse().ok())
    }

    /// Prompt until the reply is a number in `min..=max`.
    pub fn choose(&mut self, question: &str, min: i64, max: i64) -> Result<i64> {
        loop {
            match self.ask_int(question)? {
                Some(n) if (min..=max).contains(&n) => return Ok(n),
                _ => self.say(format!("Please enter a number from {} to {}.", min, max))?,
            }
        }
    }

    /// Prompt for two whitespace-separated integers.
    pub fn ask_pair(&mut self, question: &str) -> Result<Option<(i32, i32)>> {
        self.prompt(question)?;
        let line = self.read_line()?;
        let mut parts = line.split_whitespace().map(str::parse::<i32>);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(Ok(a)), Some(Ok(b)), None) => Ok(Some((a, b))),
            _ => Ok(None),
        }
    }

    /// Print a numbered list of options starting at 1.
    pub fn list<T: Display>(&mut self, items: impl IntoIterator<Item = T>) -> Result<()> {
        for (i, item) in items.into_iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, item)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_read_line_strips_endings() {
        let mut c = console("hello\r\nworld\n");
        assert_eq!(c.read_line().unwrap(), "hello");
        assert_eq!(c.read_line().unwrap(), "world");
        assert!(matches!(c.read_line(), Err(CliError::InputClosed)));
    }

    #[test]
    fn test_ask_int() {
        let mut c = console(" 42 \nabc\n");
        assert_eq!(c.ask_int("n? ").unwrap(), Some(42));
        assert_eq!(c.ask_int("n? ").unwrap(), None);
        assert_eq!(output(c), "n? n? ");
    }

    #[test]
    fn test_choose_reprompts() {
        let mut c = console("0\nx\n9\n3\n");
        assert_eq!(c.choose("pick: ", 1, 7).unwrap(), 3);
        let text = output(c);
        assert_eq!(text.matches("pick: ").count(), 4);
        assert_eq!(text.matches("Please enter a number from 1 to 7.").count(), 3);
    }

    #[test]
    fn test_ask_pair() {
        let mut c = console("1 -1\n1\n1 2 3\n");
        assert_eq!(c.ask_pair("dx dy: ").unwrap(), Some((1, -1)));
        assert_eq!(c.ask_pair("dx dy: ").unwrap(), None);
        assert_eq!(c.ask_pair("dx dy: ").unwrap(), None);
    }

    #[test]
    fn test_list_is_one_based() {
        let mut c = console("");
        c.list(["Alpha", "Beta"]).unwrap();
        assert_eq!(output(c), "1. Alpha\n2. Beta\n");
    }
}
