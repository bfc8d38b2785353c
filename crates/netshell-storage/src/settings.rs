//! Shell settings
//!
//! Homepage and search engine template, persisted on every mutation.

use serde::{Deserialize, Serialize};

use crate::store::{JsonStore, SETTINGS_FILE};
use crate::Result;

pub const DEFAULT_HOMEPAGE: &str = "https://www.google.com";
pub const DEFAULT_SEARCH_ENGINE: &str = "https://www.google.com/search?q={query}";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Homepage URL
    pub homepage: String,
    /// Search engine URL template containing the literal `{query}` placeholder
    pub search_engine: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            homepage: DEFAULT_HOMEPAGE.to_string(),
            search_engine: DEFAULT_SEARCH_ENGINE.to_string(),
        }
    }
}

/// Partial settings change; `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub homepage: Option<String>,
    pub search_engine: Option<String>,
}

pub struct SettingsStore {
    store: JsonStore,
    settings: Settings,
}

impl SettingsStore {
    pub fn load(store: JsonStore) -> Self {
        let settings = store.load(SETTINGS_FILE, Settings::default);
        Self { store, settings }
    }

    pub fn get(&self) -> &Settings {
        &self.settings
    }

    /// Merge the supplied fields over the current settings and persist.
    /// The merge is applied before the save, so a failed write leaves the
    /// in-memory value authoritative for the running session.
    pub fn update(&mut self, update: SettingsUpdate) -> Result<&Settings> {
        if let Some(homepage) = update.homepage {
            self.settings.homepage = homepage;
        }
        if let Some(search_engine) = update.search_engine {
            self.settings.search_engine = search_engine;
        }

        tracing::info!(
            homepage = %self.settings.homepage,
            search_engine = %self.settings.search_engine,
            "Updated settings"
        );

        self.store.save(SETTINGS_FILE, &self.settings)?;
        Ok(&self.settings)
    }
}
