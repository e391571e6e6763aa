//! Result items handed back to the host for rendering.

use serde::{Deserialize, Serialize};

use crate::error::TimestampResult;
use crate::executor::ExecutionAction;
use crate::services::Conversion;

/// A single row in the host's result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultItem {
    /// Icon path relative to the extension root
    pub icon: String,

    /// Primary text
    pub title: String,

    /// Secondary text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Whether the host should highlight query matches in the title
    #[serde(default)]
    pub highlightable: bool,

    /// What happens when the row is activated
    pub on_enter: ExecutionAction,
}

impl ResultItem {
    /// Wrap a conversion in a row that copies its value
    pub fn copy(icon: impl Into<String>, conversion: Conversion) -> Self {
        Self {
            icon: icon.into(),
            title: conversion.title,
            subtitle: conversion.subtitle,
            highlightable: false,
            on_enter: ExecutionAction::copy(conversion.value),
        }
    }

    /// The text this row copies
    pub fn copy_value(&self) -> &str {
        match &self.on_enter {
            ExecutionAction::CopyToClipboard { content, .. } => content,
        }
    }
}

/// Render the given items as the extension's result list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderAction {
    pub items: Vec<ResultItem>,
}

impl RenderAction {
    pub fn new(items: Vec<ResultItem>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Item by 1-based position, as shown to the user
    pub fn item(&self, position: usize) -> Option<&ResultItem> {
        position.checked_sub(1).and_then(|i| self.items.get(i))
    }

    pub fn to_json(&self) -> TimestampResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
