// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! Debug builds log at `debug`, release builds at `info`. `RUST_LOG` overrides
//! both. Iced and wgpu internals are kept at `warn` so swipe cycle events stay
//! readable.

use crate::error::{Error, Result};
use tracing_subscriber::{fmt, EnvFilter};

fn build_filter_directives(is_dev: bool) -> Vec<&'static str> {
    vec![
        if is_dev { "debug" } else { "info" },
        "iced=warn",
        "iced_wgpu=warn",
        "wgpu=warn",
        "naga=warn",
        "cosmic_text=warn",
    ]
}

/// Installs the global fmt subscriber.
///
/// Returns an error if a global subscriber is already set.
pub fn init() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(build_filter_directives(cfg!(debug_assertions)).join(","))
    });

    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .map_err(|err| Error::Logging(err.to_string()))
}
