//! The timestamp extension: answers keyword queries with conversions.
//!
//! A host routes queries whose keyword matches [`QueryHandler::keyword`] to
//! [`QueryHandler::on_event`] and renders the returned list.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

use crate::config::Config;
use crate::core::{KeywordQueryEvent, Preferences, RenderAction, ResultItem};
use crate::services::{self, Conversion};

/// Something that can answer keyword queries
pub trait QueryHandler {
    /// Keyword this handler is registered under (e.g., "ts")
    fn keyword(&self) -> &str;

    /// Check if this handler should answer the given event
    fn should_handle(&self, event: &KeywordQueryEvent) -> bool {
        event.keyword.eq_ignore_ascii_case(self.keyword())
    }

    /// Build the result list for an event
    fn on_event(&self, event: &KeywordQueryEvent, preferences: &Preferences) -> RenderAction;
}

/// Converts between epoch values and readable timestamps
#[derive(Debug, Clone, Default)]
pub struct TimestampExtension {
    config: Config,
}

impl TimestampExtension {
    pub fn new(config: Config) -> Self {
        tracing::info!(keyword = %config.extension.keyword, "init timestamp extension");
        Self { config }
    }

    /// Create the extension from the config file on disk
    pub fn load() -> Self {
        Self::new(Config::load())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Preferences as configured, for hosts that don't keep their own
    pub fn preferences(&self) -> Preferences {
        Preferences::from(&self.config)
    }

    /// Answer an event against an explicit clock and "local" zone
    pub fn on_event_at<Tz>(
        &self,
        event: &KeywordQueryEvent,
        preferences: &Preferences,
        now: DateTime<Utc>,
        local: &Tz,
    ) -> RenderAction
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let conversions =
            services::interpret_at(event.get_argument(), preferences.unit(), now, local);
        self.render(conversions)
    }

    fn render(&self, conversions: Vec<Conversion>) -> RenderAction {
        tracing::trace!(count = conversions.len(), "rendering results");
        RenderAction::new(
            conversions
                .into_iter()
                .map(|c| ResultItem::copy(self.config.extension.icon.as_str(), c))
                .collect(),
        )
    }
}

impl QueryHandler for TimestampExtension {
    fn keyword(&self) -> &str {
        &self.config.extension.keyword
    }

    fn on_event(&self, event: &KeywordQueryEvent, preferences: &Preferences) -> RenderAction {
        tracing::debug!(argument = ?event.get_argument(), "keyword query");
        let unit = preferences.unit();
        self.render(services::interpret(event.get_argument(), unit))
    }
}
