//! JSON file store
//!
//! All persisted state lives in independent files under one data directory,
//! so corruption of one store never takes down another.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::Result;

pub const SETTINGS_FILE: &str = "settings.json";
pub const BOOKMARKS_FILE: &str = "bookmarks.json";
pub const HISTORY_FILE: &str = "history.json";

#[derive(Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load a value from `file`, falling back to `default` when the file is
    /// missing, unreadable, or does not parse. Parse failure is a recovery
    /// path, not an error: the corrupt file is overwritten on the next save.
    pub fn load<T, F>(&self, file: &str, default: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        let path = self.dir.join(file);

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return default(),
            Err(err) => {
                tracing::warn!(file = %file, error = %err, "Failed to read store file, using defaults");
                return default();
            }
        };

        match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(file = %file, error = %err, "Corrupt store file, using defaults");
                default()
            }
        }
    }

    /// Save a value to `file`. Written via a sibling temp file and renamed
    /// into place so a reader never observes a half-written document.
    pub fn save<T: Serialize>(&self, file: &str, value: &T) -> Result<()> {
        let path = self.dir.join(file);
        let tmp = self.dir.join(format!("{file}.tmp"));

        let json = serde_json::to_string_pretty(value)?;
        fs::write(&tmp, json)?;
        if let Err(err) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }

        tracing::debug!(file = %file, "Saved store file");

        Ok(())
    }
}
