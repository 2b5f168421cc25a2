//! Machine configuration
//!
//! Settings can be built in code or loaded from a TOML document:
//!
//! ```toml
//! coverage = "warn"
//! record_history = true
//! history_limit = 100
//! ```

use crate::coverage::CoveragePolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid machine configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Options applied when a machine is built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// What to do when the table and handlers disagree
    #[serde(default)]
    pub coverage: CoveragePolicy,

    /// Record committed transitions in the machine's history
    #[serde(default = "default_record_history")]
    pub record_history: bool,

    /// Keep only the most recent N history entries
    #[serde(default)]
    pub history_limit: Option<usize>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            coverage: CoveragePolicy::default(),
            record_history: default_record_history(),
            history_limit: None,
        }
    }
}

fn default_record_history() -> bool {
    true
}

impl MachineConfig {
    /// Parse configuration from TOML text; missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}
