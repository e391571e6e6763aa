//! Result execution module - carries out the action attached to a result

use serde::{Deserialize, Serialize};

use crate::error::TimestampResult;
use crate::platform::ClipboardAccess;

/// The action to perform when a result is activated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ExecutionAction {
    /// Copy text to clipboard with notification
    CopyToClipboard {
        content: String,
        notification: String,
    },
}

impl ExecutionAction {
    pub fn copy(content: impl Into<String>) -> Self {
        let content = content.into();
        let notification = format!("Copied {}", content);
        ExecutionAction::CopyToClipboard {
            content,
            notification,
        }
    }
}

/// Run an action against the given clipboard
pub fn execute(action: &ExecutionAction, clipboard: &dyn ClipboardAccess) -> TimestampResult<()> {
    match action {
        ExecutionAction::CopyToClipboard {
            content,
            notification,
        } => {
            clipboard.set_text(content)?;
            tracing::info!("{}", notification);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryClipboard;

    #[test]
    fn test_copy_notification() {
        let action = ExecutionAction::copy("1700000000");
        assert_eq!(
            action,
            ExecutionAction::CopyToClipboard {
                content: "1700000000".to_string(),
                notification: "Copied 1700000000".to_string(),
            }
        );
    }

    #[test]
    fn test_execute_copies_content() {
        let clipboard = MemoryClipboard::new();
        execute(&ExecutionAction::copy("2023-01-01 12:00:00"), &clipboard).unwrap();
        assert_eq!(clipboard.get_text().unwrap(), "2023-01-01 12:00:00");
    }

    #[test]
    fn test_action_serialize() {
        let json = serde_json::to_string(&ExecutionAction::copy("42")).unwrap();
        assert!(json.contains("\"type\":\"copyToClipboard\""));
        assert!(json.contains("\"content\":\"42\""));
    }
}
