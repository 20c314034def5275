//! Clipboard port for sharing the referral link.

use crate::error::Result;

/// Copy target for text the user wants to share.
pub trait Clipboard {
    /// Place `text` on the clipboard.
    fn set_text(&self, text: &str) -> Result<()>;
}
