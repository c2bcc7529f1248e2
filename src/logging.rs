//! Tracing subscriber setup for hosts that want bridge logs.

use tracing::Subscriber;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive
pub const DEFAULT_DIRECTIVE: &str = "hello_wasm_bridge=info";

/// Filter directive used in debug mode
pub const DEBUG_DIRECTIVE: &str = "hello_wasm_bridge=debug";

/// Directive selected by the `debug` config flag
pub fn directive(debug: bool) -> &'static str {
    if debug {
        DEBUG_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    }
}

/// Build the env filter, preferring `RUST_LOG` when it is set
pub fn env_filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(debug)))
}

/// Compact stderr subscriber filtered by `filter`
pub fn subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact(),
    )
}

/// Install the global subscriber.
///
/// Returns `false` when a subscriber was already installed, which happens
/// when a host initializes logging more than once.
pub fn init(debug: bool) -> bool {
    subscriber(env_filter(debug)).try_init().is_ok()
}
