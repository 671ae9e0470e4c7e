//! Line-oriented console I/O
//!
//! `Console` pairs an input source with an output sink so the interactive
//! handlers can be driven by in-memory buffers as easily as by a terminal.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use crate::error::{ContactError, ContactResult};

/// An interactive input/output pair
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console over the process's standard input and output
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over any line source and sink
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Output sink for handler messages
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the console, returning its output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write a line of output
    pub fn say(&mut self, message: impl AsRef<str>) -> ContactResult<()> {
        writeln!(self.output, "{}", message.as_ref())?;
        Ok(())
    }

    /// Show `label` and read one trimmed line
    ///
    /// Returns `ContactError::InputClosed` once the input is exhausted.
    pub fn prompt(&mut self, label: &str) -> ContactResult<String> {
        Ok(self.prompt_raw(label)?.trim().to_string())
    }

    /// Show `label` and read one line with only its line ending removed
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
    /// stray byte never ends the session.
    pub fn prompt_raw(&mut self, label: &str) -> ContactResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(self.output)?;
            return Err(ContactError::InputClosed);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Prompt repeatedly until `accept` returns a value
    ///
    /// `rejected` is printed after every refused answer.
    pub fn prompt_until<T>(
        &mut self,
        label: &str,
        rejected: &str,
        mut accept: impl FnMut(&str) -> Option<T>,
    ) -> ContactResult<T> {
        loop {
            let answer = self.prompt(label)?;
            if let Some(value) = accept(&answer) {
                return Ok(value);
            }
            self.say(rejected)?;
        }
    }
}
