//! netshell Core
//!
//! Browser shell state layer: tabs, address bar resolution, persisted
//! settings/bookmarks/history and download coordination. Rendering,
//! networking and page execution belong to the external engine behind the
//! collaborator traits.

mod config;
mod error;

pub use config::Config;
pub use error::CoreError;

// Re-export core components
pub use netshell_download::{
    Download, DownloadCoordinator, DownloadHandle, DownloadState, SavePathPicker, StatusSink,
};
pub use netshell_navigation::{resolve, InputResolution, QUERY_PLACEHOLDER};
pub use netshell_session::{EngineEvent, EventQueue, SessionController};
pub use netshell_storage::{
    BookmarkSet, HistoryLog, JsonStore, Settings, SettingsStore, SettingsUpdate, StorageError,
    DEFAULT_HOMEPAGE, DEFAULT_SEARCH_ENGINE,
};
pub use netshell_tabs::{ContentSurface, SurfaceFactory, Tab, TabError, TabManager, TabState};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}

/// Wire a session controller from persisted state under `config.data_dir`
/// and the three external collaborators. Creates the data directory on
/// first run; each store loads its own file with crash-safe defaults.
pub fn build_session(
    config: &Config,
    surfaces: Box<dyn SurfaceFactory>,
    picker: Box<dyn SavePathPicker>,
    status: Box<dyn StatusSink>,
) -> Result<SessionController> {
    std::fs::create_dir_all(&config.data_dir)?;

    let store = JsonStore::new(&config.data_dir);
    let settings = SettingsStore::load(store.clone());
    let bookmarks = BookmarkSet::load(store.clone());
    let history = HistoryLog::load(store);
    let tabs = TabManager::new(surfaces);

    tracing::info!(data_dir = %config.data_dir.display(), "Opening session");

    Ok(SessionController::new(
        settings, bookmarks, history, tabs, picker, status,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    struct NullSurface;

    impl ContentSurface for NullSurface {
        fn navigate(&mut self, _url: &str) {}
        fn back(&mut self) {}
        fn forward(&mut self) {}
        fn reload(&mut self) {}
        fn current_url(&self) -> String {
            String::new()
        }
        fn title(&self) -> String {
            String::new()
        }
    }

    struct NullFactory;

    impl SurfaceFactory for NullFactory {
        fn create_surface(&mut self) -> Box<dyn ContentSurface> {
            Box::new(NullSurface)
        }
    }

    struct NullPicker;

    impl SavePathPicker for NullPicker {
        fn choose_path(&mut self, _suggested: &Path) -> Option<PathBuf> {
            None
        }
    }

    struct NullStatus;

    impl StatusSink for NullStatus {
        fn show_message(&mut self, _text: &str) {}
    }

    #[test]
    fn test_build_session_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path().join("nested").join("data"));

        let session = build_session(
            &config,
            Box::new(NullFactory),
            Box::new(NullPicker),
            Box::new(NullStatus),
        )
        .unwrap();

        assert!(config.data_dir.is_dir());
        assert_eq!(session.tabs().len(), 1);
        assert_eq!(session.settings().get().homepage, DEFAULT_HOMEPAGE);
    }
}
