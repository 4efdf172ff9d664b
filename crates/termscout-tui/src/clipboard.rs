//! System clipboard access for the copy action

use anyhow::Result;

/// Destination for copied text
///
/// Behind a trait so the app logic can be exercised without a real
/// clipboard, which CI boxes rarely have.
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The real clipboard, backed by arboard
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// None when the host exposes no clipboard (headless session, no display)
    pub fn new() -> Option<Self> {
        arboard::Clipboard::new().ok().map(|inner| Self { inner })
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner.set_text(text)?;
        Ok(())
    }
}
