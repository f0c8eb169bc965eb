//! Console collaborators: line input and text output.

use std::io::{BufRead, StdinLock, Stdout, Write};
use tictactoe_solo_core::InputError;
use tracing::{instrument, trace};

/// Source of typed lines.
pub trait InputProvider {
    /// Reads one line without its trailing newline.
    ///
    /// Returns [`InputError::Closed`] at end of input.
    fn read_line(&mut self) -> Result<String, InputError>;

    /// Reads one line and parses it as an integer.
    ///
    /// A line that is not a number yields `Ok(None)`; the line is consumed
    /// either way.
    fn read_integer(&mut self) -> Result<Option<i64>, InputError> {
        let line = self.read_line()?;
        Ok(line.trim().parse().ok())
    }
}

/// Destination for prompts, boards and messages.
pub trait OutputSink {
    /// Writes text as-is and flushes it, for prompts awaiting input.
    fn write(&mut self, text: &str) -> Result<(), InputError>;

    /// Writes text followed by a newline.
    fn write_line(&mut self, text: &str) -> Result<(), InputError> {
        self.write(text)?;
        self.write("\n")
    }
}

/// Line-oriented console over any reader/writer pair.
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> Console<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a console over the given reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R, W> InputProvider for Console<R, W>
where
    R: BufRead,
    W: Write,
{
    #[instrument(skip(self))]
    fn read_line(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        let line = line.trim_end_matches(['\r', '\n']).to_string();
        trace!(%line, "Read input line");
        Ok(line)
    }
}

impl<R, W> OutputSink for Console<R, W>
where
    R: BufRead,
    W: Write,
{
    fn write(&mut self, text: &str) -> Result<(), InputError> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
