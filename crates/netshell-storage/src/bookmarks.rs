//! Bookmark store
//!
//! Unique URLs in insertion order. Add-only: removal is out of scope.

use crate::store::{JsonStore, BOOKMARKS_FILE};
use crate::Result;

pub struct BookmarkSet {
    store: JsonStore,
    urls: Vec<String>,
}

impl BookmarkSet {
    pub fn load(store: JsonStore) -> Self {
        let urls = store.load(BOOKMARKS_FILE, Vec::new);
        Self { store, urls }
    }

    /// Add a URL. Returns Ok(false) without persisting when the URL is
    /// already bookmarked; a duplicate is a no-op, not an error.
    pub fn add(&mut self, url: &str) -> Result<bool> {
        if self.contains(url) {
            return Ok(false);
        }

        self.urls.push(url.to_string());
        self.store.save(BOOKMARKS_FILE, &self.urls)?;

        tracing::info!(url = %url, "Added bookmark");

        Ok(true)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.iter().any(|u| u == url)
    }

    pub fn list(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
