//! Console abstraction: prompts over an injected reader/writer pair.

use std::io::{self, BufRead, Write};

/// Interactive console over any `BufRead` input and `Write` output.
///
/// The binary uses locked stdin/stdout; tests use `Cursor` and `Vec<u8>`.
/// Numeric prompts retry until the input parses; `max_attempts` caps the
/// retries for tests (the interactive default is unlimited).
pub struct Console<R, W> {
    input: R,
    output: W,
    max_attempts: Option<u32>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            max_attempts: None,
        }
    }

    /// Cap the number of retries a numeric prompt will make.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Consume the console and return the output sink (used by tests to
    /// inspect what a session printed).
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Print a prompt (no trailing newline) and read one trimmed line.
    ///
    /// End of input surfaces as `ErrorKind::UnexpectedEof`; the session
    /// loop treats that as a clean exit.
    pub fn read_trimmed(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Prompt for a decimal number, retrying until the input parses.
    ///
    /// A comma decimal separator is normalized to a period first.
    pub fn prompt_decimal(&mut self, prompt: &str) -> io::Result<f64> {
        let mut attempts = 0u32;
        loop {
            let raw = self.read_trimmed(prompt)?;
            match raw.replace(',', ".").parse::<f64>() {
                Ok(value) if value.is_finite() => return Ok(value),
                _ => self.write_line("Invalid value. Try again using numbers only.")?,
            }
            attempts += 1;
            self.check_attempts(attempts)?;
        }
    }

    /// Prompt for a non-negative integer, retrying until the input parses.
    pub fn prompt_integer(&mut self, prompt: &str) -> io::Result<u32> {
        let mut attempts = 0u32;
        loop {
            let raw = self.read_trimmed(prompt)?;
            match raw.parse::<u32>() {
                Ok(value) => return Ok(value),
                Err(_) => self.write_line("Invalid value. Try again with a whole number.")?,
            }
            attempts += 1;
            self.check_attempts(attempts)?;
        }
    }

    fn check_attempts(&self, attempts: u32) -> io::Result<()> {
        match self.max_attempts {
            Some(max) if attempts >= max => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "too many invalid attempts",
            )),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn read_trimmed_strips_whitespace() {
        let mut c = console("  C001  \n");
        assert_eq!(c.read_trimmed("> ").unwrap(), "C001");
    }

    #[test]
    fn read_trimmed_reports_eof() {
        let mut c = console("");
        let err = c.read_trimmed("> ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn decimal_accepts_comma_separator() {
        let mut c = console("12,50\n");
        assert_eq!(c.prompt_decimal("Price: ").unwrap(), 12.5);
    }

    #[test]
    fn decimal_retries_past_garbage() {
        let mut c = console("abc\n12.5\n");
        assert_eq!(c.prompt_decimal("Price: ").unwrap(), 12.5);
    }

    #[test]
    fn decimal_gives_up_after_max_attempts() {
        let mut c = console("abc\ndef\nghi\n").with_max_attempts(2);
        let err = c.prompt_decimal("Price: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn integer_rejects_negative_then_accepts() {
        let mut c = console("-3\n30\n");
        assert_eq!(c.prompt_integer("Quantity: ").unwrap(), 30);
    }

    #[test]
    fn integer_rejects_decimal_input() {
        let mut c = console("3.5\n3\n");
        assert_eq!(c.prompt_integer("Quantity: ").unwrap(), 3);
    }
}
