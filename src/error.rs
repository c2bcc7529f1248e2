//! Error types for the bridge.
//!
//! This module defines error codes, the serializable error handed to hosts,
//! and the main error type used throughout the crate.

use serde::{Deserialize, Serialize};

/// Error codes for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input outside the domain of the operation
    InvalidArgument,
    /// Configuration failed validation or could not be loaded
    InvalidConfig,
    /// Writing output or reading a file failed
    Io,
    /// Serialization/deserialization error
    Serialization,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::InvalidArgument => write!(f, "INVALID_ARGUMENT"),
            ErrorCode::InvalidConfig => write!(f, "INVALID_CONFIG"),
            ErrorCode::Io => write!(f, "IO"),
            ErrorCode::Serialization => write!(f, "SERIALIZATION"),
        }
    }
}

/// Error details returned across the host boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeError {
    /// Error code
    pub code: ErrorCode,

    /// Human-readable message
    pub message: String,

    /// Additional context for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
}

impl BridgeError {
    /// Create a new bridge error
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
        }
    }

    /// Create an error for a negative square root input
    pub fn negative_sqrt(x: i32) -> Self {
        Self::new(
            ErrorCode::InvalidArgument,
            format!("Cannot take the integer square root of negative value {}", x),
        )
        .with_context(serde_json::json!({ "operation": "int_sqrt", "input": x }))
    }

    /// Add context
    pub fn with_context(mut self, context: serde_json::Value) -> Self {
        self.context = Some(context);
        self
    }
}

impl std::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for BridgeError {}

/// Main error type for the bridge
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// Operation rejected its input
    #[error("Bridge error: {0}")]
    Bridge(#[from] BridgeError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RuntimeError {
    /// Convert to BridgeError for returning to the host
    pub fn to_bridge_error(&self) -> BridgeError {
        match self {
            RuntimeError::Bridge(e) => e.clone(),
            RuntimeError::Config(e) => BridgeError::new(ErrorCode::InvalidConfig, e.to_string()),
            RuntimeError::Io(e) => BridgeError::new(ErrorCode::Io, e.to_string()),
            RuntimeError::Serialization(msg) => {
                BridgeError::new(ErrorCode::Serialization, msg.clone())
            }
        }
    }

    /// Integer status for the exported C ABI
    pub fn status_code(&self) -> i32 {
        match self.to_bridge_error().code {
            ErrorCode::InvalidArgument => error_codes::INVALID_ARGUMENT,
            ErrorCode::InvalidConfig => error_codes::INVALID_CONFIG,
            ErrorCode::Io | ErrorCode::Serialization => error_codes::INTERNAL_ERROR,
        }
    }
}

impl From<serde_json::Error> for RuntimeError {
    fn from(e: serde_json::Error) -> Self {
        RuntimeError::Serialization(e.to_string())
    }
}

/// Result type alias for bridge operations
pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Status codes returned by exported functions.
///
/// Valid square roots are never negative, so every code below is
/// distinguishable from a result.
pub mod error_codes {
    /// Invalid argument
    pub const INVALID_ARGUMENT: i32 = -3;
    /// Invalid configuration
    pub const INVALID_CONFIG: i32 = -4;
    /// Internal error
    pub const INTERNAL_ERROR: i32 = -5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::InvalidArgument.to_string(), "INVALID_ARGUMENT");
        assert_eq!(ErrorCode::InvalidConfig.to_string(), "INVALID_CONFIG");
    }

    #[test]
    fn test_negative_sqrt_error() {
        let err = BridgeError::negative_sqrt(-9);
        assert_eq!(err.code, ErrorCode::InvalidArgument);
        assert!(err.message.contains("-9"));
        assert_eq!(err.context.unwrap()["input"], -9);
    }

    #[test]
    fn test_bridge_error_serialization() {
        let err = BridgeError::negative_sqrt(-1);
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("INVALID_ARGUMENT"));
        assert!(json.contains("\"operation\":\"int_sqrt\""));

        let plain =
            serde_json::to_string(&BridgeError::new(ErrorCode::Io, "closed")).unwrap();
        assert!(!plain.contains("context"));
    }

    #[test]
    fn test_runtime_error_conversion() {
        let runtime_err = RuntimeError::from(BridgeError::negative_sqrt(-4));
        let converted = runtime_err.to_bridge_error();
        assert_eq!(converted.code, ErrorCode::InvalidArgument);
        assert_eq!(runtime_err.status_code(), error_codes::INVALID_ARGUMENT);
    }

    #[test]
    fn test_io_error_maps_to_internal_status() {
        let err = RuntimeError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(err.to_bridge_error().code, ErrorCode::Io);
        assert_eq!(err.status_code(), error_codes::INTERNAL_ERROR);
    }
}
