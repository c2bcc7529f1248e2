//! Bridge configuration types and defaults.
//!
//! This module defines the options shared by every host surface: the origin
//! label printed in greetings, how negative square root inputs are handled,
//! and whether debug logging is enabled.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default origin label printed after "from" in greetings
pub const DEFAULT_ORIGIN: &str = "Rust";

/// Environment variable naming a JSON configuration file
pub const CONFIG_ENV_VAR: &str = "HELLO_BRIDGE_CONFIG";

/// What `int_sqrt` does with a negative input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegativeInputPolicy {
    /// Return an `InvalidArgument` error
    #[default]
    Reject,
    /// Return 0, the value a saturating cast gives for the NaN root
    Zero,
}

impl std::str::FromStr for NegativeInputPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reject" => Ok(NegativeInputPolicy::Reject),
            "zero" => Ok(NegativeInputPolicy::Zero),
            other => Err(ConfigError::InvalidValue {
                field: "negative_input".into(),
                reason: format!("unknown policy '{}', expected 'reject' or 'zero'", other),
            }),
        }
    }
}

/// Configuration for the bridge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeConfig {
    /// Label printed after "from" in greetings (default: "Rust")
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Negative square root input handling (default: reject)
    #[serde(default)]
    pub negative_input: NegativeInputPolicy,

    /// Enable debug logging (default: false)
    #[serde(default)]
    pub debug: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            negative_input: NegativeInputPolicy::Reject,
            debug: false,
        }
    }
}

impl BridgeConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the greeting origin label
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Set the negative input policy
    pub fn with_negative_input(mut self, policy: NegativeInputPolicy) -> Self {
        self.negative_input = policy;
        self
    }

    /// Enable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.origin.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "origin".into(),
                reason: "must not be empty".into(),
            });
        }

        if self.origin.contains(['\n', '\r']) {
            return Err(ConfigError::InvalidValue {
                field: "origin".into(),
                reason: "must fit on a single line".into(),
            });
        }

        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: BridgeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load the file named by `HELLO_BRIDGE_CONFIG`, or defaults when unset
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::from_json_file(path),
            _ => Ok(Self::default()),
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidValue {
        /// The field name
        field: String,
        /// The reason it's invalid
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Default value functions for serde
fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}
