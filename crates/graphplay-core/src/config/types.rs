//! Configuration type definitions

use crate::format::OutputFormat;
use crate::graph::{Weight, DEFAULT_WEIGHT};
use serde::{Deserialize, Serialize};

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "graphplay.toml";

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Weight given to weighted-graph edges added without an explicit weight
    #[serde(default = "default_weight")]
    pub default_weight: Weight,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or filter directive (e.g. "debug", "graphplay_core=trace")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub json: bool,
}

fn default_weight() -> Weight {
    DEFAULT_WEIGHT
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            default_weight: default_weight(),
            format: OutputFormat::default(),
            logging: LoggingConfig::default(),
        }
    }
}
