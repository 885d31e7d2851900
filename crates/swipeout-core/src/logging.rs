#![forbid(unsafe_code)]

//! Structured logging for swipe rows.
//!
//! The library crates emit events through [`tracing`] with these targets:
//!
//! | Target | Content |
//! |--------|---------|
//! | `swipeout.gesture` | dropped out-of-order lifecycle events (trace) |
//! | `swipeout.machine` | state transitions and CTA firings (debug) |
//! | `swipeout.config` | normalized misconfiguration (warn) |
//! | `swipeout.widget` | timer and lifecycle bookkeeping (debug) |
//!
//! Installing a subscriber is left to the application. With the
//! `tracing-json` feature, [`init_json_subscriber`] installs a JSON
//! formatter filtered by `RUST_LOG`.

pub use tracing::{debug, debug_span, error, info, trace, warn};

/// Default filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "swipeout=info";

/// Install a global JSON subscriber honoring `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_subscriber() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(all(test, feature = "tracing-json"))]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_refused() {
        let _ = init_json_subscriber();
        assert!(!init_json_subscriber());
        info!(target: "swipeout.widget", "json subscriber active");
    }
}
