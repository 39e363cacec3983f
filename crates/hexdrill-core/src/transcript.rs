//! Output duplication between the terminal and an optional log file.

use std::fs::File;
use std::io::{self, Write};

/// Writes every piece of drill output to `out` and, when present, to `log`.
///
/// The log receives byte-identical copies of everything sent to `out`, plus
/// the raw reply lines that only the terminal already shows.
pub struct Transcript<O: Write, L: Write = File> {
    out: O,
    log: Option<L>,
}

impl<O: Write, L: Write> Transcript<O, L> {
    pub fn new(out: O, log: Option<L>) -> Self {
        Self { out, log }
    }

    /// Whether a log sink is attached.
    pub fn is_logging(&self) -> bool {
        self.log.is_some()
    }

    /// Write `text` to the output and the log, flushing both.
    ///
    /// Prompts carry no newline, so the flush is what makes them visible.
    pub fn emit(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        if let Some(log) = self.log.as_mut() {
            log.write_all(text.as_bytes())?;
            log.flush()?;
        }
        Ok(())
    }

    /// Write a raw reply line to the log only, byte for byte.
    pub fn echo(&mut self, raw: &[u8]) -> io::Result<()> {
        if let Some(log) = self.log.as_mut() {
            log.write_all(raw)?;
            log.flush()?;
        }
        Ok(())
    }

    /// Give back the underlying sinks.
    pub fn into_parts(self) -> (O, Option<L>) {
        (self.out, self.log)
    }
}
