// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::swipe_card;
use iced::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    SwipeCard(swipe_card::Message),
    /// Animation frame while the card is moving.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SWIPE_CARD_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Images to swipe through, in order.
    pub images: Vec<String>,
}
