//! N-API bindings for Node.js integration.
//!
//! This module exposes the same operations as the WebAssembly exports to a
//! Node.js host. It is compiled only with the `napi` feature.

use crate::bridge::Bridge;
use crate::config::BridgeConfig;
use crate::logging;
use napi::bindgen_prelude::*;
use napi_derive::napi;

/// JavaScript-friendly configuration
#[napi(object)]
pub struct JsBridgeConfig {
    /// Label printed after "from" in greetings
    pub origin: Option<String>,
    /// Negative square root handling: "reject" or "zero"
    pub negative_input: Option<String>,
    /// Enable debug logging
    pub debug: Option<bool>,
}

impl TryFrom<JsBridgeConfig> for BridgeConfig {
    type Error = napi::Error;

    fn try_from(js: JsBridgeConfig) -> Result<Self> {
        let mut config = BridgeConfig::default();

        if let Some(origin) = js.origin {
            config.origin = origin;
        }

        if let Some(policy) = js.negative_input {
            config.negative_input = policy
                .parse()
                .map_err(|e| napi::Error::from_reason(format!("Invalid config: {}", e)))?;
        }

        config.debug = js.debug.unwrap_or(false);

        Ok(config)
    }
}

/// The bridge wrapper exposed to Node.js
#[napi]
pub struct HelloBridge {
    inner: Bridge,
}

#[napi]
impl HelloBridge {
    /// Create a new bridge with the given configuration
    #[napi(constructor)]
    pub fn new(config: Option<JsBridgeConfig>) -> Result<Self> {
        let config = match config {
            Some(js) => BridgeConfig::try_from(js)?,
            None => BridgeConfig::default(),
        };

        logging::init(config.debug);

        let inner = Bridge::new(config)
            .map_err(|e| napi::Error::from_reason(format!("Failed to create bridge: {}", e)))?;

        Ok(Self { inner })
    }

    /// Print a greeting to standard output
    #[napi]
    pub fn hello(&self, name: Option<String>) -> Result<()> {
        say_hello(&self.inner, name)
    }

    /// Return the greeting line without printing it
    #[napi]
    pub fn greeting(&self, name: Option<String>) -> String {
        self.inner.greeting(name.as_deref())
    }

    /// Integer square root, truncated toward zero
    #[napi]
    pub fn int_sqrt(&self, x: i32) -> Result<i32> {
        root(&self.inner, x)
    }
}

/// Print a greeting using the default configuration
#[napi(js_name = "hello")]
pub fn js_hello(name: Option<String>) -> Result<()> {
    say_hello(&Bridge::default(), name)
}

/// Integer square root using the default configuration
#[napi(js_name = "intSqrt")]
pub fn js_int_sqrt(x: i32) -> Result<i32> {
    root(&Bridge::default(), x)
}

/// Initialize the module
#[napi]
pub fn init(debug: Option<bool>) {
    logging::init(debug.unwrap_or(false));
}

fn say_hello(bridge: &Bridge, name: Option<String>) -> Result<()> {
    bridge
        .hello(name.as_deref())
        .map_err(|e| napi::Error::from_reason(format!("Greeting failed: {}", e)))
}

fn root(bridge: &Bridge, x: i32) -> Result<i32> {
    bridge.int_sqrt(x).map_err(|e| {
        let detail = e.to_bridge_error();
        napi::Error::new(napi::Status::InvalidArg, detail.to_string())
    })
}
