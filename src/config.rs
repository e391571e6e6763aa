use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TimestampResult;
use crate::services::Unit;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extension: ExtensionConfig,
    pub preferences: PreferencesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionConfig {
    /// Keyword that routes a query to this extension
    pub keyword: String,
    /// Icon shown next to every result
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesConfig {
    /// "s" or "ms"
    pub unit: String,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            keyword: "ts".to_string(),
            icon: "images/icon.png".to_string(),
        }
    }
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            unit: Unit::Seconds.as_str().to_string(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config"))
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
            })
            .join("nova-timestamp")
            .join("config.toml")
    }

    /// Load config from the default path, or return defaults if not found
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`. Read and parse failures are logged and fall
    /// back to defaults.
    pub fn load_from(path: &Path) -> Self {
        let mut config = if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => config,
                    Err(e) => {
                        tracing::warn!(path = %path.display(), "failed to parse config: {}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    tracing::warn!(path = %path.display(), "failed to read config: {}", e);
                    Self::default()
                }
            }
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Self::default()
        };

        config.validate();
        config
    }

    /// Normalize values a hand-edited file may get wrong
    fn validate(&mut self) {
        self.preferences.unit = self.unit().as_str().to_string();

        let keyword = self.extension.keyword.trim();
        self.extension.keyword = if keyword.is_empty() {
            ExtensionConfig::default().keyword
        } else {
            keyword.to_string()
        };
    }

    /// The configured unit
    pub fn unit(&self) -> Unit {
        Unit::from_preference(&self.preferences.unit)
    }

    /// Save config to the default path
    pub fn save(&self) -> TimestampResult<PathBuf> {
        let path = Self::config_path();
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> TimestampResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.extension.keyword, "ts");
        assert_eq!(config.extension.icon, "images/icon.png");
        assert_eq!(config.unit(), Unit::Seconds);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("missing.toml"));
        assert_eq!(config.extension.keyword, "ts");
        assert_eq!(config.preferences.unit, "s");
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[preferences]\nunit = \"ms\"\n").unwrap();

        let config = Config::load_from(&path);
        assert_eq!(config.unit(), Unit::Milliseconds);
        assert_eq!(config.extension.keyword, "ts");
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[preferences\nunit = ").unwrap();

        let config = Config::load_from(&path);
        assert_eq!(config.unit(), Unit::Seconds);
    }

    #[test]
    fn test_validate_normalizes_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[extension]\nkeyword = \"  \"\n[preferences]\nunit = \"hours\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path);
        assert_eq!(config.extension.keyword, "ts");
        assert_eq!(config.preferences.unit, "s");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.extension.keyword = "epoch".to_string();
        config.preferences.unit = "ms".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path);
        assert_eq!(loaded.extension.keyword, "epoch");
        assert_eq!(loaded.unit(), Unit::Milliseconds);
    }
}
