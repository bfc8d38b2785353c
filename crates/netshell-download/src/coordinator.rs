//! Download coordinator
//!
//! One coordinator per download. It owns the engine-side handle for the
//! lifetime of the transfer and walks the protocol: placement decision,
//! accept or cancel, progress relay, single completion notice.

use std::path::{Path, PathBuf};

use crate::download::{Download, DownloadState};

/// Engine-side download object. `Send` because the engine may hand it over
/// from its own threads before it is marshalled onto the control sequence.
pub trait DownloadHandle: Send {
    fn suggested_path(&self) -> PathBuf;
    fn set_target_path(&mut self, path: &Path);
    fn accept(&mut self);
    fn cancel(&mut self);
}

/// Save-location picker collaborator.
pub trait SavePathPicker {
    /// Ask the user where to place the file, with the engine's suggestion as
    /// a hint. `None` means the user cancelled.
    fn choose_path(&mut self, suggested: &Path) -> Option<PathBuf>;
}

/// Fire-and-forget status line; no acknowledgement.
pub trait StatusSink {
    fn show_message(&mut self, text: &str);
}

pub struct DownloadCoordinator {
    download: Download,
    handle: Box<dyn DownloadHandle>,
}

impl DownloadCoordinator {
    /// Run the placement decision for a freshly requested download. The
    /// returned coordinator is either Accepted (path set, engine told to
    /// proceed) or Cancelled (terminal, engine told to reject).
    pub fn begin(
        id: String,
        handle: Box<dyn DownloadHandle>,
        picker: &mut dyn SavePathPicker,
    ) -> Self {
        let suggested = handle.suggested_path();
        let download = Download::new(id, suggested.clone());
        let mut coordinator = Self { download, handle };

        match picker.choose_path(&suggested) {
            Some(path) => {
                coordinator.handle.set_target_path(&path);
                coordinator.handle.accept();
                coordinator.download.target_path = Some(path);
                coordinator.download.state = DownloadState::Accepted;

                tracing::info!(
                    download_id = %coordinator.download.id,
                    target = ?coordinator.download.target_path,
                    "Accepted download"
                );
            }
            None => {
                coordinator.handle.cancel();
                coordinator.download.state = DownloadState::Cancelled;

                tracing::info!(download_id = %coordinator.download.id, "Download cancelled by user");
            }
        }

        coordinator
    }

    /// Relay a progress event to the status surface. The first event moves
    /// the download into InProgress. Events after a terminal state are stale
    /// and ignored.
    pub fn on_progress(&mut self, received: u64, total: u64, status: &mut dyn StatusSink) {
        if self.download.state.is_terminal() {
            return;
        }

        self.download.state = DownloadState::InProgress;
        self.download.received_bytes = received;
        self.download.total_bytes = total;

        match self.download.progress() {
            Some(percent) => status.show_message(&format!("Downloading {percent:.2}%")),
            // Unknown content length: report indeterminate rather than fault
            None => status.show_message("Downloading..."),
        }
    }

    /// Mark the download finished and notify the status surface once.
    /// Ignored when already terminal.
    pub fn on_finished(&mut self, status: &mut dyn StatusSink) {
        if self.download.state.is_terminal() {
            return;
        }

        self.download.state = DownloadState::Finished;
        status.show_message("Download finished");

        tracing::info!(download_id = %self.download.id, "Download finished");
    }

    pub fn state(&self) -> DownloadState {
        self.download.state
    }

    pub fn is_terminal(&self) -> bool {
        self.download.state.is_terminal()
    }

    pub fn download(&self) -> &Download {
        &self.download
    }
}
