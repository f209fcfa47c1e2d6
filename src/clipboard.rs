//! System clipboard access.
//!
//! Thin wrapper around `arboard`. Construction can fail on headless
//! terminals (no display server), so the app holds an `Option<Clipboard>`
//! and degrades to a notification when copying is unavailable.

use crate::error::{Error, Result};

/// Handle to the system clipboard.
pub struct Clipboard {
    inner: arboard::Clipboard,
}

impl Clipboard {
    /// Connect to the system clipboard.
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new().map_err(|e| Error::clipboard(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Write text to the clipboard. Best-effort, no retry.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<()> {
        self.inner
            .set_text(text.into())
            .map_err(|e| Error::clipboard(e.to_string()))
    }
}
