use factcheck_ai_adapters::HttpPlatformConfig;
use factcheck_core::FactCheckConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "factcheck";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// On-disk configuration: `[core]` and `[platform]` tables, both optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub core: FactCheckConfig,
    pub platform: HttpPlatformConfig,
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

impl CliConfig {
    /// Loads `path`, or the default location when `None`. A missing default
    /// file yields defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::read(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::read(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty("FACTCHECK_API_KEY") {
            self.platform.api_key = Some(key);
        }
        if let Some(url) = non_empty("FACTCHECK_BASE_URL") {
            self.platform.base_url = url;
        }
        if let Some(model) = non_empty("FACTCHECK_MODEL") {
            self.core.model = model;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn partial_tables_keep_defaults() {
        let config = CliConfig::parse(
            r#"
            [core]
            request_timeout_ms = 30000

            [platform]
            base_url = "http://localhost:11434/v1"
            "#,
        )
        .unwrap();

        assert_eq!(config.core.request_timeout_ms, 30_000);
        assert_eq!(config.core.model, FactCheckConfig::default().model);
        assert_eq!(config.platform.base_url, "http://localhost:11434/v1");
        assert_eq!(config.platform.api_key, None);
    }

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(CliConfig::parse("").unwrap(), CliConfig::default());
    }

    #[test]
    fn env_overrides_replace_file_values() {
        let env: HashMap<&str, &str> = [
            ("FACTCHECK_API_KEY", "sk-env"),
            ("FACTCHECK_MODEL", "gpt-env"),
            ("FACTCHECK_BASE_URL", "  "),
        ]
        .into_iter()
        .collect();
        let mut config = CliConfig::default();

        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.platform.api_key.as_deref(), Some("sk-env"));
        assert_eq!(config.core.model, "gpt-env");
        assert_eq!(config.platform.base_url, HttpPlatformConfig::default().base_url);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/factcheck.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
