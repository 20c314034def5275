//! Clipboard adapters.

use std::io::Write;

use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::port::Clipboard;

/// Writes copied text to standard output.
///
/// Used by the CLI, where the caller's terminal or a pipe stands in for
/// the system clipboard.
#[derive(Debug, Default)]
pub struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}").map_err(|e| Error::Clipboard(e.to_string()))?;
        stdout.flush().map_err(|e| Error::Clipboard(e.to_string()))
    }
}

/// Keeps the last copied text in memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    text: Mutex<Option<String>>,
}

impl MemoryClipboard {
    /// Create an empty clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last copied text, if any.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        self.text.lock().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        *self.text.lock() = Some(text.to_string());
        Ok(())
    }
}
