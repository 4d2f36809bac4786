//! Thread-safe configuration holder with arc-swap for lock-free reads.

use crate::schema::SiteConfig;
use arc_swap::ArcSwap;
use std::sync::Arc;

/// Explicitly constructed configuration holder.
///
/// Built once at startup from a loaded [`SiteConfig`] and shared with the
/// HTTP layer; `get` is lock-free and `update` swaps the value atomically.
pub struct ConfigCache {
    config: ArcSwap<SiteConfig>,
}

impl ConfigCache {
    /// Creates a new cache holding the given configuration.
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config: ArcSwap::from_pointee(config),
        }
    }

    /// Gets the current configuration.
    pub fn get(&self) -> Arc<SiteConfig> {
        self.config.load_full()
    }

    /// Replaces the configuration atomically.
    pub fn update(&self, config: SiteConfig) {
        self.config.store(Arc::new(config));
    }
}

impl Default for ConfigCache {
    fn default() -> Self {
        Self::new(SiteConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_update() {
        let cache = ConfigCache::default();
        assert_eq!(cache.get().bot_name, "Eris Bot");

        let mut updated = SiteConfig::default();
        updated.bot_name = "Renamed Bot".to_string();
        cache.update(updated);

        assert_eq!(cache.get().bot_name, "Renamed Bot");
    }
}
