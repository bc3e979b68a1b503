#![forbid(unsafe_code)]

//! Logging support.
//!
//! Glide logs through [`tracing`] when the `tracing` feature is enabled and
//! compiles every call site away otherwise. Event names are dotted
//! (`carousel.change`, `gesture.release`) and carry structured fields so a
//! subscriber can filter on them without parsing message text.
//!
//! Hosts that just want readable output can enable `tracing-json` and call
//! [`init_json_logging`] once at startup.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, error, info, trace, warn};

/// Default filter used when `RUST_LOG` is unset.
#[cfg(feature = "tracing-json")]
pub const DEFAULT_FILTER: &str = "glide=info,glide_core=info";

/// Install a global JSON subscriber honoring `RUST_LOG`.
///
/// Returns `false` when a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_logging() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
