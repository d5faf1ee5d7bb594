//! Logging setup shared by the desktop app and tools.
//!
//! Console output through `tracing-subscriber`, filtered by `RUST_LOG`
//! when set and by the supplied default directive otherwise.
//!
//! ```ignore
//! valentine_core::logging::init("valentine=info,valentine_core=debug");
//! tracing::info!("ready");
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Default filter when neither `RUST_LOG` nor `--log` says otherwise.
pub const DEFAULT_FILTER: &str = "valentine=info,valentine_core=info";

/// Build the filter, preferring `RUST_LOG` over `default_directive`.
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// Returns false if a subscriber was already installed (tests, embedding).
pub fn init(default_directive: &str) -> bool {
    tracing_subscriber::registry()
        .with(env_filter(default_directive))
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .is_ok()
}
