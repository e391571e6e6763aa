//! Platform abstraction for the host-side effects of a result.
//!
//! The only effect this extension has is writing to the clipboard. The
//! system clipboard lives behind the `clipboard` feature so the library
//! builds on headless machines.

#[cfg(feature = "clipboard")]
mod shared;

use std::sync::Mutex;

use crate::error::{TimestampError, TimestampResult};

#[cfg(feature = "clipboard")]
pub use shared::ArboardClipboard;

/// Read/write clipboard
pub trait ClipboardAccess: Send + Sync {
    fn get_text(&self) -> TimestampResult<String>;
    fn set_text(&self, content: &str) -> TimestampResult<()>;
}

/// In-process clipboard, for hosts without a display server
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    content: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardAccess for MemoryClipboard {
    fn get_text(&self) -> TimestampResult<String> {
        self.content
            .lock()
            .map_err(|e| TimestampError::Clipboard(e.to_string()))?
            .clone()
            .ok_or_else(|| TimestampError::Clipboard("clipboard is empty".to_string()))
    }

    fn set_text(&self, content: &str) -> TimestampResult<()> {
        *self
            .content
            .lock()
            .map_err(|e| TimestampError::Clipboard(e.to_string()))? = Some(content.to_string());
        Ok(())
    }
}

/// The system clipboard, when this build has one
pub fn system_clipboard() -> TimestampResult<Box<dyn ClipboardAccess>> {
    #[cfg(feature = "clipboard")]
    {
        Ok(Box::new(ArboardClipboard::new()?))
    }
    #[cfg(not(feature = "clipboard"))]
    {
        Err(TimestampError::Clipboard(
            "built without the `clipboard` feature".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_starts_empty() {
        let clipboard = MemoryClipboard::new();
        assert!(clipboard.get_text().is_err());
    }

    #[test]
    fn test_memory_clipboard_overwrites() {
        let clipboard = MemoryClipboard::new();
        clipboard.set_text("first").unwrap();
        clipboard.set_text("second").unwrap();
        assert_eq!(clipboard.get_text().unwrap(), "second");
    }

    #[test]
    fn test_memory_clipboard_handles_unicode() {
        let clipboard = MemoryClipboard::new();
        clipboard.set_text("2023-01-01 🕛").unwrap();
        assert_eq!(clipboard.get_text().unwrap(), "2023-01-01 🕛");
    }

    #[cfg(not(feature = "clipboard"))]
    #[test]
    fn test_system_clipboard_requires_feature() {
        assert!(system_clipboard().is_err());
    }
}
