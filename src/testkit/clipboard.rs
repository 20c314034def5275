//! Clipboard test double.

use parking_lot::Mutex;

use crate::error::Result;
use crate::port::Clipboard;

/// Clipboard that keeps every copied text in order.
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    copies: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent copy.
    pub fn text(&self) -> Option<String> {
        self.copies.lock().last().cloned()
    }

    /// Every copy so far.
    pub fn copies(&self) -> Vec<String> {
        self.copies.lock().clone()
    }
}

impl Clipboard for RecordingClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        self.copies.lock().push(text.to_string());
        Ok(())
    }
}
