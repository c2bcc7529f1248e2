//! # Hello WASM Bridge
//!
//! Two native functions exported to a host runtime: `hello`, which prints a
//! greeting, and `int_sqrt`, which computes a truncating integer square root.
//!
//! ## Architecture
//!
//! ```text
//! Host (JavaScript engine / WebAssembly runtime / Node.js)
//!     │
//!     │ extern "C" exports (wasm32)  or  N-API (feature "napi")
//!     ▼
//! Bridge (config + logging)
//!     │
//!     ▼
//! greeting / sqrt
//! ```

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod bridge;
pub mod config;
pub mod error;
pub mod exports;
pub mod greeting;
pub mod logging;
#[cfg(feature = "napi")]
pub mod napi;
pub mod sqrt;

// Re-export commonly used types
pub use bridge::Bridge;
pub use config::{BridgeConfig, NegativeInputPolicy};
pub use error::{BridgeError, ErrorCode, RuntimeError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
