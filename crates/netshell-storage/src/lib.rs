//! netshell Storage Layer
//!
//! One human-readable JSON file per store. A missing or corrupt file is
//! never fatal: loads fall back to defaults so the shell always opens.

mod bookmarks;
mod error;
mod history;
mod settings;
mod store;

pub use bookmarks::BookmarkSet;
pub use error::StorageError;
pub use history::HistoryLog;
pub use settings::{Settings, SettingsStore, SettingsUpdate, DEFAULT_HOMEPAGE, DEFAULT_SEARCH_ENGINE};
pub use store::{JsonStore, BOOKMARKS_FILE, HISTORY_FILE, SETTINGS_FILE};

pub type Result<T> = std::result::Result<T, StorageError>;
