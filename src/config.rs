// src/config.rs

//! Configuration loading utilities.
//!
//! Loads the TOML config file and applies environment-variable overrides
//! for the Telegram credentials, so secrets can stay out of the file.

use std::path::Path;

use crate::models::Config;

/// Environment variable holding the Telegram bot token.
pub const ENV_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";

/// Environment variable holding the target chat ID.
pub const ENV_TARGET_CHAT: &str = "TELEGRAM_TARGET_CHAT";

/// Load configuration from `{storage_dir}/config.toml`, falling back to
/// defaults, then apply environment overrides.
pub fn load(storage_dir: &Path) -> Config {
    let mut config = Config::load_or_default(storage_dir.join("config.toml"));
    apply_env_overrides(&mut config);
    config
}

/// Overlay Telegram credentials from the environment when present.
///
/// A set-but-empty variable is treated as unset.
pub fn apply_env_overrides(config: &mut Config) {
    if let Some(token) = non_empty_env(ENV_BOT_TOKEN) {
        config.telegram.bot_token = Some(token);
    }
    if let Some(chat) = non_empty_env(ENV_TARGET_CHAT) {
        config.telegram.chat_id = Some(chat);
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
