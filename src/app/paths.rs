// SPDX-License-Identifier: MPL-2.0
//! Where the swipe card looks for `settings.toml`.
//!
//! The first source that yields a directory wins:
//! 1. a directory passed to [`config_dir`] (tests, portable setups)
//! 2. `--config-dir`, recorded once by [`set_cli_config_dir`]
//! 3. the `SWIPE_CARD_CONFIG_DIR` environment variable, when non-empty
//! 4. `SwipeCard/` under the platform config directory

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DIR_NAME: &str = "SwipeCard";

/// Environment variable naming the settings directory.
pub const ENV_CONFIG_DIR: &str = "SWIPE_CARD_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` flag. Only the first call counts.
pub fn set_cli_config_dir(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("--config-dir already recorded, ignoring");
    }
}

/// Settings directory, or `None` when the platform has no config directory
/// and nothing overrides it.
pub fn config_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        explicit,
        CLI_CONFIG_DIR.get().cloned().flatten(),
        std::env::var(ENV_CONFIG_DIR).ok(),
        platform_dir,
    )
}

fn platform_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_DIR_NAME))
}

fn resolve(
    explicit: Option<PathBuf>,
    cli: Option<PathBuf>,
    env: Option<String>,
    platform: impl FnOnce() -> Option<PathBuf>,
) -> Option<PathBuf> {
    explicit
        .or(cli)
        .or_else(|| env.filter(|dir| !dir.is_empty()).map(PathBuf::from))
        .or_else(platform)
}
