//! Query-side types a launcher host hands to the extension.

use std::collections::HashMap;

use crate::config::Config;
use crate::services::Unit;

/// Preference key holding the epoch unit
pub const UNIT_PREFERENCE: &str = "unit";

/// A keyword query dispatched by the host: `ts 2023-01-01`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordQueryEvent {
    /// The keyword that routed the query here
    pub keyword: String,
    /// Text after the keyword (if any)
    pub argument: Option<String>,
}

impl KeywordQueryEvent {
    pub fn new(keyword: impl Into<String>, argument: Option<String>) -> Self {
        Self {
            keyword: keyword.into(),
            argument,
        }
    }

    /// Split a raw query line into keyword and argument.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start();
        let parts: Vec<&str> = query.splitn(2, ' ').collect();
        let keyword = parts[0].to_string();
        let argument = parts
            .get(1)
            .map(|s| s.to_string())
            .filter(|s| !s.is_empty());

        Self { keyword, argument }
    }

    pub fn get_argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }
}

/// Extension preferences as the host stores them: plain strings by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    values: HashMap<String, String>,
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// The unit preference, read once per query. Missing means seconds.
    pub fn unit(&self) -> Unit {
        self.get(UNIT_PREFERENCE)
            .map(Unit::from_preference)
            .unwrap_or_default()
    }
}

impl From<&Config> for Preferences {
    fn from(config: &Config) -> Self {
        let mut prefs = Self::new();
        prefs.set(UNIT_PREFERENCE, config.preferences.unit.clone());
        prefs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query_with_argument() {
        let event = KeywordQueryEvent::from_query("ts 2023-01-01 12:00:00");
        assert_eq!(event.keyword, "ts");
        assert_eq!(event.get_argument(), Some("2023-01-01 12:00:00"));
    }

    #[test]
    fn test_from_query_without_argument() {
        assert_eq!(KeywordQueryEvent::from_query("ts").get_argument(), None);
        assert_eq!(KeywordQueryEvent::from_query("ts ").get_argument(), None);
    }

    #[test]
    fn test_new() {
        let event = KeywordQueryEvent::new("ts", Some("1700000000".to_string()));
        assert_eq!(event.get_argument(), Some("1700000000"));
    }

    #[test]
    fn test_preferences_unit() {
        let mut prefs = Preferences::new();
        assert_eq!(prefs.unit(), Unit::Seconds);

        prefs.set(UNIT_PREFERENCE, "ms");
        assert_eq!(prefs.unit(), Unit::Milliseconds);
        assert_eq!(prefs.get(UNIT_PREFERENCE), Some("ms"));
    }

    #[test]
    fn test_preferences_from_config() {
        let mut config = Config::default();
        config.preferences.unit = "ms".to_string();

        let prefs = Preferences::from(&config);
        assert_eq!(prefs.unit(), Unit::Milliseconds);
    }
}
