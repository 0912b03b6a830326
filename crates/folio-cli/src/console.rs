//! Console I/O for the menu system.
//!
//! `Console` is generic over its reader and writer so every menu screen
//! can be driven by scripted input in tests.

use std::io::{self, BufRead, Write};

#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// A console wired to the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The output stream, for `writeln!` from menu screens.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Read one line, trimmed. End of input is reported as
    /// `ErrorKind::UnexpectedEof` so the menu loop can wind down.
    pub fn line(&mut self) -> io::Result<String> {
        let mut buf = String::new();
        let n = self.input.read_line(&mut buf)?;
        if n == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        Ok(buf.trim().to_string())
    }

    /// Print a prompt (no newline), flush, and read the reply.
    pub fn prompt(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        self.line()
    }

    /// Prompt repeatedly until the reply is non-empty.
    pub fn prompt_nonempty(&mut self, message: &str, complaint: &str) -> io::Result<String> {
        loop {
            let reply = self.prompt(message)?;
            if !reply.is_empty() {
                return Ok(reply);
            }
            writeln!(self.output, "{complaint}")?;
        }
    }

    /// Print a message and wait for Enter.
    pub fn pause(&mut self, message: &str) -> io::Result<()> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        self.line().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_trims_input() {
        let mut out = Vec::new();
        let mut ui = Console::new("  hello  \n".as_bytes(), &mut out);
        assert_eq!(ui.line().unwrap(), "hello");
    }

    #[test]
    fn test_eof_is_reported() {
        let mut out = Vec::new();
        let mut ui = Console::new("".as_bytes(), &mut out);
        let err = ui.line().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_prompt_writes_message() {
        let mut out = Vec::new();
        let mut ui = Console::new("42\n".as_bytes(), &mut out);
        assert_eq!(ui.prompt("Pick a number: ").unwrap(), "42");
        assert_eq!(String::from_utf8(out).unwrap(), "Pick a number: ");
    }

    #[test]
    fn test_prompt_nonempty_reprompts() {
        let mut out = Vec::new();
        let mut ui = Console::new("\n\nAda\n".as_bytes(), &mut out);
        assert_eq!(
            ui.prompt_nonempty("Name: ", "Name cannot be empty.").unwrap(),
            "Ada"
        );
        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown.matches("Name cannot be empty.").count(), 2);
    }
}
