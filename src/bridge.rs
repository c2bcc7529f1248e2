//! The bridge combining configuration with the exported operations.
//!
//! Every host surface (the C ABI in [`crate::exports`] and the optional
//! N-API bindings) goes through a [`Bridge`] so that greeting and square
//! root behavior is configured and logged in one place.

use crate::config::BridgeConfig;
use crate::error::Result;
use crate::greeting;
use crate::sqrt;
use std::io::Write;
use tracing::{debug, info, instrument, warn};

/// Stateless facade over the greeting and square root operations
#[derive(Debug, Clone, Default)]
pub struct Bridge {
    /// Bridge configuration
    config: BridgeConfig,
}

impl Bridge {
    /// Create a new bridge after validating `config`
    pub fn new(config: BridgeConfig) -> Result<Self> {
        config.validate()?;

        info!(
            origin = %config.origin,
            negative_input = ?config.negative_input,
            "Initializing bridge"
        );

        Ok(Self { config })
    }

    /// The configuration this bridge was built with
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// The greeting line for `name`, without a trailing newline
    pub fn greeting(&self, name: Option<&str>) -> String {
        greeting::format_greeting(name, &self.config.origin)
    }

    /// Print one greeting line to standard output
    pub fn hello(&self, name: Option<&str>) -> Result<()> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.hello_to(&mut lock, name)
    }

    /// Write one greeting line to `out`
    #[instrument(skip(self, out))]
    pub fn hello_to<W: Write>(&self, out: &mut W, name: Option<&str>) -> Result<()> {
        let anonymous = name.map_or(true, str::is_empty);
        debug!(anonymous, "Greeting");
        greeting::write_greeting(out, name, &self.config.origin)?;
        Ok(())
    }

    /// Integer square root of `x` under the configured negative input policy
    #[instrument(skip(self))]
    pub fn int_sqrt(&self, x: i32) -> Result<i32> {
        match sqrt::int_sqrt(x, self.config.negative_input) {
            Ok(root) => {
                debug!(root, "Computed integer square root");
                Ok(root)
            }
            Err(e) => {
                warn!(error = %e, "Rejected square root input");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NegativeInputPolicy;
    use crate::error::{ErrorCode, RuntimeError};

    fn output(bridge: &Bridge, name: Option<&str>) -> String {
        let mut out = Vec::new();
        bridge.hello_to(&mut out, name).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_bridge_rejects_invalid_config() {
        let result = Bridge::new(BridgeConfig::new().with_origin(""));
        assert!(matches!(result, Err(RuntimeError::Config(_))));
    }

    #[test]
    fn test_hello_default_once() {
        let out = output(&Bridge::default(), None);
        assert_eq!(out.matches("Hello World from Rust!").count(), 1);
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_hello_named() {
        let bridge = Bridge::new(BridgeConfig::new().with_origin("C Language")).unwrap();
        assert_eq!(output(&bridge, Some("X")), "Hello X from C Language!\n");
        assert_eq!(bridge.greeting(Some("X")), "Hello X from C Language!");
    }

    #[test]
    fn test_hello_to_stdout() {
        assert!(Bridge::default().hello(Some("stdout")).is_ok());
    }

    #[test]
    fn test_int_sqrt() {
        let bridge = Bridge::default();
        assert_eq!(bridge.int_sqrt(16).unwrap(), 4);
        assert_eq!(bridge.int_sqrt(2).unwrap(), 1);
        assert_eq!(bridge.int_sqrt(0).unwrap(), 0);
    }

    #[test]
    fn test_int_sqrt_negative_follows_policy() {
        let strict = Bridge::default();
        let err = strict.int_sqrt(-16).unwrap_err();
        assert_eq!(err.to_bridge_error().code, ErrorCode::InvalidArgument);

        let lenient =
            Bridge::new(BridgeConfig::new().with_negative_input(NegativeInputPolicy::Zero)).unwrap();
        assert_eq!(lenient.int_sqrt(-16).unwrap(), 0);
    }

    #[test]
    fn test_repeated_calls_match() {
        let bridge = Bridge::default();
        let first = (output(&bridge, Some("Y")), bridge.int_sqrt(99).unwrap());
        for _ in 0..5 {
            assert_eq!((output(&bridge, Some("Y")), bridge.int_sqrt(99).unwrap()), first);
        }
    }
}
