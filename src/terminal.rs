//! Line-based terminal I/O.
//!
//! The game never touches stdin/stdout directly. It talks to a [`Terminal`],
//! which tests replace with in-memory buffers.

use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use tracing::{debug, instrument, trace};

/// What went wrong talking to the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConsoleErrorKind {
    /// Input reached end of file.
    #[display("input closed")]
    Closed,
    /// Underlying read or write failed.
    #[display("I/O failure: {}", _0)]
    Io(String),
}

/// Terminal error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Console error: {} at {}:{}", kind, file, line)]
pub struct ConsoleError {
    /// Error kind.
    #[error(not(source))]
    pub kind: ConsoleErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConsoleError {
    /// Creates a new console error with caller location tracking.
    #[track_caller]
    pub fn new(kind: ConsoleErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns true if the error is end of input.
    pub fn is_closed(&self) -> bool {
        self.kind == ConsoleErrorKind::Closed
    }
}

impl From<std::io::Error> for ConsoleError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(ConsoleErrorKind::Io(err.to_string()))
    }
}

/// A line input source paired with a text output sink.
pub trait Terminal {
    /// Writes `text` without a newline, then reads one line.
    ///
    /// The returned line has its terminator stripped.
    fn prompt(&mut self, text: &str) -> Result<String, ConsoleError>;

    /// Writes `text` followed by a newline.
    fn say(&mut self, text: &str) -> Result<(), ConsoleError>;
}

/// [`Terminal`] over any buffered reader and writer.
#[derive(Debug)]
pub struct Console<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Console<I, O> {
    /// Creates a console over the given input and output.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the output sink.
    pub fn into_output(self) -> O {
        self.output
    }
}

impl Console<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Console attached to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<I: BufRead, O: Write> Terminal for Console<I, O> {
    #[instrument(skip(self))]
    fn prompt(&mut self, text: &str) -> Result<String, ConsoleError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;

        // Raw bytes: a line that isn't UTF-8 is bad input, not a broken terminal.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            debug!("Input closed");
            return Err(ConsoleError::new(ConsoleErrorKind::Closed));
        }
        let line = String::from_utf8_lossy(&buf)
            .trim_end_matches(['\n', '\r'])
            .to_string();
        trace!(%line, "Read line");
        Ok(line)
    }

    fn say(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }
}
