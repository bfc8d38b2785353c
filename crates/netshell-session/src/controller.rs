//! Session controller
//!
//! Top-level orchestrator. All shell state is owned here and injected at
//! construction; there are no process-wide singletons. Every mutation runs
//! on this controller's sequence — user actions call in directly, engine
//! callbacks arrive through the event queue.

use std::collections::HashMap;

use netshell_download::{DownloadCoordinator, SavePathPicker, StatusSink};
use netshell_navigation::resolve;
use netshell_storage::{
    BookmarkSet, HistoryLog, SettingsStore, SettingsUpdate, StorageError,
};
use netshell_tabs::{TabError, TabManager};

use crate::event::EngineEvent;
use crate::queue::EventQueue;

pub struct SessionController {
    settings: SettingsStore,
    bookmarks: BookmarkSet,
    history: HistoryLog,
    tabs: TabManager,
    /// Pending downloads keyed by id — the explicit continuation for
    /// transfers still in flight
    downloads: HashMap<String, DownloadCoordinator>,
    picker: Box<dyn SavePathPicker>,
    status: Box<dyn StatusSink>,
    /// Visible address bar contents, synchronized to the active tab only
    address_bar: String,
    events: EventQueue,
}

impl SessionController {
    /// Wire up the shell. Opens the first tab at the homepage so the tab
    /// collection is never empty.
    pub fn new(
        settings: SettingsStore,
        bookmarks: BookmarkSet,
        history: HistoryLog,
        mut tabs: TabManager,
        picker: Box<dyn SavePathPicker>,
        status: Box<dyn StatusSink>,
    ) -> Self {
        let homepage = settings.get().homepage.clone();
        tabs.open_tab(&homepage);

        let mut controller = Self {
            settings,
            bookmarks,
            history,
            tabs,
            downloads: HashMap::new(),
            picker,
            status,
            address_bar: String::new(),
            events: EventQueue::new(),
        };
        controller.sync_active_tab();

        tracing::info!("Session initialized");

        controller
    }

    /// Handle for engine threads to deliver callbacks; processed by
    /// [`process_events`](Self::process_events) on this sequence.
    pub fn event_queue(&self) -> EventQueue {
        self.events.clone()
    }

    /// Drain and apply everything queued so far, one event at a time.
    pub fn process_events(&mut self) {
        for event in self.events.drain() {
            self.handle_event(event);
        }
    }

    pub fn handle_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::UrlChanged { tab_id, url } => self.on_url_changed(&tab_id, url),
            EngineEvent::LoadFinished { tab_id } => {
                // Stale ids are fine: the tab may have closed already
                self.tabs.refresh_title(&tab_id);
            }
            EngineEvent::DownloadRequested {
                download_id,
                handle,
            } => {
                let coordinator =
                    DownloadCoordinator::begin(download_id.clone(), handle, self.picker.as_mut());
                // Cancelled is terminal; only live downloads stay pending
                if !coordinator.is_terminal() {
                    self.downloads.insert(download_id, coordinator);
                }
            }
            EngineEvent::DownloadProgress {
                download_id,
                received,
                total,
            } => {
                if let Some(coordinator) = self.downloads.get_mut(&download_id) {
                    coordinator.on_progress(received, total, self.status.as_mut());
                }
            }
            EngineEvent::DownloadFinished { download_id } => {
                if let Some(mut coordinator) = self.downloads.remove(&download_id) {
                    coordinator.on_finished(self.status.as_mut());
                }
            }
        }
    }

    // === Navigation ===

    /// Resolve free-text address bar input and drive the active tab there.
    pub fn navigate(&mut self, input: &str) {
        let url = resolve(input, self.settings.get()).into_url();
        self.tabs.navigate_active(&url);
    }

    pub fn navigate_home(&mut self) {
        let homepage = self.settings.get().homepage.clone();
        self.tabs.navigate_active(&homepage);
    }

    pub fn back(&mut self) {
        self.tabs.back();
    }

    pub fn forward(&mut self) {
        self.tabs.forward();
    }

    pub fn reload(&mut self) {
        self.tabs.reload();
    }

    // === Tabs ===

    /// Open a new tab at `url`, or at the homepage when omitted.
    pub fn new_tab(&mut self, url: Option<&str>) -> String {
        let url = match url {
            Some(url) => url.to_string(),
            None => self.settings.get().homepage.clone(),
        };

        let id = self.tabs.open_tab(&url);
        self.sync_active_tab();

        id
    }

    /// Close a tab. Closing the last tab is refused and degrades to a
    /// logged no-op, never an error to the caller.
    pub fn close_tab(&mut self, id: &str) {
        match self.tabs.close_tab(id) {
            Ok(()) => self.sync_active_tab(),
            Err(TabError::LastTab) => {
                tracing::debug!(tab_id = %id, "Refused to close the last tab");
            }
            Err(err) => {
                tracing::debug!(tab_id = %id, error = %err, "Ignored close for unknown tab");
            }
        }
    }

    pub fn select_tab(&mut self, id: &str) {
        if self.tabs.activate(id).is_ok() {
            self.sync_active_tab();
        }
    }

    // === Bookmarks / history ===

    /// Bookmark `url`, or the active tab's URL when omitted. Duplicates are
    /// silent no-ops.
    pub fn add_bookmark(&mut self, url: Option<&str>) {
        let url = match url {
            Some(url) => url.to_string(),
            None => match self.tabs.active() {
                Some(tab) => tab.url.clone(),
                None => return,
            },
        };

        if url.is_empty() {
            return;
        }

        match self.bookmarks.add(&url) {
            Ok(true) => self.status.show_message(&format!("Bookmarked: {url}")),
            Ok(false) => {}
            Err(err) => self.report_write_failure("bookmarks", &err),
        }
    }

    pub fn clear_history(&mut self) {
        if let Err(err) = self.history.clear() {
            self.report_write_failure("history", &err);
        }
    }

    // === Settings ===

    pub fn update_settings(&mut self, update: SettingsUpdate) {
        match self.settings.update(update) {
            Ok(_) => self.status.show_message("Settings updated"),
            Err(err) => self.report_write_failure("settings", &err),
        }
    }

    // === Accessors ===

    pub fn address_bar(&self) -> &str {
        &self.address_bar
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn bookmarks(&self) -> &BookmarkSet {
        &self.bookmarks
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn tabs(&self) -> &TabManager {
        &self.tabs
    }

    pub fn pending_downloads(&self) -> usize {
        self.downloads.len()
    }

    // === Internal ===

    /// A URL change always updates the owning tab's internal state, but only
    /// an Active tab may touch the address bar or the history log. Getting
    /// this wrong leaks background navigation into the visible shell.
    fn on_url_changed(&mut self, tab_id: &str, url: String) {
        self.tabs.set_url(tab_id, url.clone());

        if !self.tabs.is_active(tab_id) {
            return;
        }

        self.address_bar = url.clone();
        self.record_history(&url);
    }

    /// Align the address bar (and history, as the original shell does on tab
    /// switches) with whichever tab is now active.
    fn sync_active_tab(&mut self) {
        let url = match self.tabs.active() {
            Some(tab) => tab.url.clone(),
            None => return,
        };

        self.address_bar = url.clone();
        self.record_history(&url);
    }

    fn record_history(&mut self, url: &str) {
        if url.is_empty() {
            return;
        }

        if let Err(err) = self.history.record(url) {
            self.report_write_failure("history", &err);
        }
    }

    /// A failed write is non-fatal: in-memory state stays authoritative for
    /// the running session, the user gets a best-effort notification.
    fn report_write_failure(&mut self, store: &str, err: &StorageError) {
        tracing::warn!(store = %store, error = %err, "Failed to persist store");
        self.status
            .show_message(&format!("Could not save {store}: {err}"));
    }
}
