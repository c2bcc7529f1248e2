//! Symbols exported to the WebAssembly host.
//!
//! Every exported function must be `#[no_mangle]` and `pub extern "C"`.
//! Build for the host with
//! `cargo build --release --target wasm32-unknown-unknown`.
//!
//! That target has no usable stdout, so the module imports
//! `env.print(ptr: *const u8, len: usize)` from the host and hands it each
//! greeting line. On every other target (`wasm32-wasip1`, native) greetings
//! go to the process stdout.
//!
//! Strings cross the boundary as NUL-terminated bytes in linear memory. The
//! host reserves them with [`alloc`], writes the bytes, passes the pointer,
//! and releases them with [`dealloc`].

use crate::bridge::Bridge;
use crate::config::BridgeConfig;
use crate::config::ConfigError;
use crate::logging;
use once_cell::sync::Lazy;
use std::alloc::Layout;
use std::borrow::Cow;
use std::ffi::{c_char, CStr};
use std::io::Write;
use tracing::{error, warn};

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
extern "C" {
    fn print(ptr: *const u8, len: usize);
}

/// Bridge shared by every export, configured from `HELLO_BRIDGE_CONFIG`
static BRIDGE: Lazy<Bridge> = Lazy::new(|| shared_bridge(BridgeConfig::from_env()));

/// Install logging for `config` and build the bridge the exports use
fn shared_bridge(config: Result<BridgeConfig, ConfigError>) -> Bridge {
    let config = match config {
        Ok(config) => {
            logging::init(config.debug);
            config
        }
        Err(e) => {
            logging::init(false);
            warn!(error = %e, "Falling back to default bridge configuration");
            BridgeConfig::default()
        }
    };

    Bridge::new(config).unwrap_or_default()
}

/// Greeting sink that buffers output and hands each flushed line to `emit`
///
/// Used on `wasm32-unknown-unknown`, where `emit` is the host's `print`.
#[cfg_attr(not(all(target_arch = "wasm32", target_os = "unknown")), allow(dead_code))]
struct LineSink<F: FnMut(&[u8])> {
    buf: Vec<u8>,
    emit: F,
}

impl<F: FnMut(&[u8])> LineSink<F> {
    #[cfg_attr(not(all(target_arch = "wasm32", target_os = "unknown")), allow(dead_code))]
    fn new(emit: F) -> Self {
        Self {
            buf: Vec::new(),
            emit,
        }
    }
}

impl<F: FnMut(&[u8])> Write for LineSink<F> {
    fn write(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        if !self.buf.is_empty() {
            (self.emit)(&self.buf);
            self.buf.clear();
        }
        Ok(())
    }
}

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
fn host_print(bytes: &[u8]) {
    // SAFETY: the host reads `len` bytes starting at `ptr` during the call.
    unsafe { print(bytes.as_ptr(), bytes.len()) };
}

/// Decode a nullable NUL-terminated name
///
/// # Safety
///
/// `name` must be null or point to a NUL-terminated string.
unsafe fn read_name<'a>(name: *const c_char) -> Option<Cow<'a, str>> {
    if name.is_null() {
        None
    } else {
        // SAFETY: non-null and NUL-terminated per the function contract.
        Some(unsafe { CStr::from_ptr(name) }.to_string_lossy())
    }
}

/// Write the greeting for a raw `name` to `out`, logging write failures
///
/// # Safety
///
/// Same contract as [`hello`].
unsafe fn greet_raw<W: Write>(bridge: &Bridge, out: &mut W, name: *const c_char) {
    // SAFETY: forwarded from the caller.
    let name = unsafe { read_name(name) };

    if let Err(e) = bridge.hello_to(out, name.as_deref()) {
        error!(error = %e, "Failed to write greeting");
    }
}

/// Root of `x`, or an `error_codes` status on rejection
fn sqrt_status(bridge: &Bridge, x: i32) -> i32 {
    match bridge.int_sqrt(x) {
        Ok(root) => root,
        Err(e) => e.status_code(),
    }
}

/// Print a greeting for the NUL-terminated `name`, or the default greeting
/// when `name` is null or empty.
///
/// # Safety
///
/// `name` must be null or point to a NUL-terminated string that stays valid
/// for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn hello(name: *const c_char) {
    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    let mut out = LineSink::new(host_print);
    #[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
    let mut out = std::io::stdout().lock();

    // SAFETY: forwarded from the caller.
    unsafe { greet_raw(&BRIDGE, &mut out, name) };
}

/// Integer square root of `x`, truncated toward zero.
///
/// Returns [`crate::error::error_codes::INVALID_ARGUMENT`] when `x` is
/// negative and the configured policy rejects it.
#[no_mangle]
pub extern "C" fn int_sqrt(x: i32) -> i32 {
    sqrt_status(&BRIDGE, x)
}

/// Reserve `len` bytes of linear memory for the host to write into.
///
/// Returns null when `len` is zero or the allocation fails.
#[no_mangle]
pub extern "C" fn alloc(len: usize) -> *mut u8 {
    if len == 0 {
        return std::ptr::null_mut();
    }

    match Layout::array::<u8>(len) {
        // SAFETY: the layout has a non-zero size.
        Ok(layout) => unsafe { std::alloc::alloc(layout) },
        Err(_) => std::ptr::null_mut(),
    }
}

/// Release memory obtained from [`alloc`].
///
/// # Safety
///
/// `ptr` must come from `alloc(len)` with the same `len`, and must not be
/// used afterwards. A null `ptr` is ignored.
#[no_mangle]
pub unsafe extern "C" fn dealloc(ptr: *mut u8, len: usize) {
    if ptr.is_null() || len == 0 {
        return;
    }

    if let Ok(layout) = Layout::array::<u8>(len) {
        // SAFETY: `ptr` was returned by `alloc` for this same layout.
        unsafe { std::alloc::dealloc(ptr, layout) };
    }
}
