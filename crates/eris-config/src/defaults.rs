//! Built-in configuration values used when `siteconfig.json` is absent or
//! unreadable.

use crate::schema::SiteConfig;

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bot_name: "Eris Bot".to_string(),
            bot_logo: "/eris-logo.png".to_string(),
            favicon: "/favicon.png".to_string(),
            tagline: "Systematically does it all".to_string(),
            invite_link: "https://discord.com/oauth2/authorize?client_id=1426601112584323232"
                .to_string(),
            discord_server_invite: "https://discord.gg/erisbot".to_string(),
        }
    }
}
