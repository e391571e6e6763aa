use crate::error::{TimestampError, TimestampResult};

use super::ClipboardAccess;

/// Cross-platform clipboard using arboard
pub struct ArboardClipboard {
    clipboard: std::sync::Mutex<arboard::Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> TimestampResult<Self> {
        let clipboard =
            arboard::Clipboard::new().map_err(|e| TimestampError::Clipboard(e.to_string()))?;
        Ok(Self {
            clipboard: std::sync::Mutex::new(clipboard),
        })
    }
}

impl ClipboardAccess for ArboardClipboard {
    fn get_text(&self) -> TimestampResult<String> {
        self.clipboard
            .lock()
            .map_err(|e| TimestampError::Clipboard(e.to_string()))?
            .get_text()
            .map_err(|e| TimestampError::Clipboard(e.to_string()))
    }

    fn set_text(&self, content: &str) -> TimestampResult<()> {
        self.clipboard
            .lock()
            .map_err(|e| TimestampError::Clipboard(e.to_string()))?
            .set_text(content)
            .map_err(|e| TimestampError::Clipboard(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Needs a display server
    #[test]
    #[ignore]
    fn test_clipboard_write_and_read() {
        let clipboard = ArboardClipboard::new().unwrap();
        clipboard.set_text("1700000000").unwrap();
        assert_eq!(clipboard.get_text().unwrap(), "1700000000");
    }
}
