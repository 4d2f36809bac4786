//! Site configuration schema.

use eris_common::ErisError;
use serde::{Deserialize, Serialize};

/// Site configuration, the Rust shape of `siteconfig.json`.
///
/// Every field carries a default, so a partial document merges over the
/// built-in values rather than failing to parse. Field names follow the
/// camelCase keys the front-end reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    /// Display name of the bot.
    pub bot_name: String,

    /// Path to the bot logo image.
    pub bot_logo: String,

    /// Path to the favicon.
    pub favicon: String,

    /// Tagline shown on the landing page.
    pub tagline: String,

    /// OAuth2 URL for inviting the bot to a server.
    pub invite_link: String,

    /// Invite URL for the bot's support Discord server; target of the
    /// `/discord` redirect.
    pub discord_server_invite: String,
}

impl SiteConfig {
    /// Validates an explicitly loaded configuration.
    pub fn validate(&self) -> Result<(), ErisError> {
        if self.bot_name.trim().is_empty() {
            return Err(ErisError::config("bot name cannot be empty"));
        }

        if self.invite_link.trim().is_empty() {
            return Err(ErisError::config("invite link cannot be empty"));
        }

        Ok(())
    }
}
