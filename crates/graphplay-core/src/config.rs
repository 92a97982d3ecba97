//! Engine configuration for graphplay
//!
//! Configuration is stored in `graphplay.toml`.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{GraphError, Result};

pub use types::{EngineConfig, LoggingConfig, CONFIG_FILE_NAME};

impl EngineConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content)?;

        // Shortest paths assume non-negative weights
        if config.default_weight < 0 {
            bail_invalid!("default_weight", config.default_weight);
        }

        Ok(config)
    }

    /// Load `graphplay.toml` from `dir` if it exists, defaults otherwise
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::OutputFormat;
    use crate::graph::DEFAULT_WEIGHT;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.default_weight, DEFAULT_WEIGHT);
        assert_eq!(config.format, OutputFormat::Human);
        assert!(config.logging.level.is_none());
        assert!(!config.logging.json);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graphplay.toml");

        let config = EngineConfig {
            default_weight: 9,
            format: OutputFormat::Json,
            logging: LoggingConfig {
                level: Some("debug".to_string()),
                json: true,
            },
        };
        config.save(&path).unwrap();

        let loaded = EngineConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graphplay.toml");
        fs::write(&path, "format = \"json\"\n").unwrap();

        let loaded = EngineConfig::load(&path).unwrap();
        assert_eq!(loaded.default_weight, DEFAULT_WEIGHT);
        assert_eq!(loaded.format, OutputFormat::Json);
    }

    #[test]
    fn test_discover_without_file() {
        let dir = tempdir().unwrap();
        let config = EngineConfig::discover(dir.path()).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_discover_with_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "default_weight = 2\n").unwrap();
        let config = EngineConfig::discover(dir.path()).unwrap();
        assert_eq!(config.default_weight, 2);
    }

    #[test]
    fn test_negative_default_weight_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graphplay.toml");
        fs::write(&path, "default_weight = -1\n").unwrap();
        assert!(matches!(
            EngineConfig::load(&path),
            Err(GraphError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graphplay.toml");
        fs::write(&path, "default_weight = \"heavy\"\n").unwrap();
        assert!(matches!(
            EngineConfig::load(&path),
            Err(GraphError::Toml(_))
        ));
    }
}
