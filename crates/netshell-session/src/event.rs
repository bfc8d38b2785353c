//! Engine-emitted events
//!
//! Every event names its target by id rather than capturing a reference, so
//! a close racing a delayed signal resolves to a harmless stale lookup.

use netshell_download::DownloadHandle;

pub enum EngineEvent {
    /// A tab's surface moved to a new URL
    UrlChanged { tab_id: String, url: String },
    /// A tab's surface finished loading; its title is ready
    LoadFinished { tab_id: String },
    /// The engine wants a placement decision for a new download
    DownloadRequested {
        download_id: String,
        handle: Box<dyn DownloadHandle>,
    },
    /// Periodic transfer progress
    DownloadProgress {
        download_id: String,
        received: u64,
        total: u64,
    },
    /// Transfer completed
    DownloadFinished { download_id: String },
}

impl std::fmt::Debug for EngineEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineEvent::UrlChanged { tab_id, url } => f
                .debug_struct("UrlChanged")
                .field("tab_id", tab_id)
                .field("url", url)
                .finish(),
            EngineEvent::LoadFinished { tab_id } => f
                .debug_struct("LoadFinished")
                .field("tab_id", tab_id)
                .finish(),
            EngineEvent::DownloadRequested { download_id, .. } => f
                .debug_struct("DownloadRequested")
                .field("download_id", download_id)
                .finish_non_exhaustive(),
            EngineEvent::DownloadProgress {
                download_id,
                received,
                total,
            } => f
                .debug_struct("DownloadProgress")
                .field("download_id", download_id)
                .field("received", received)
                .field("total", total)
                .finish(),
            EngineEvent::DownloadFinished { download_id } => f
                .debug_struct("DownloadFinished")
                .field("download_id", download_id)
                .finish(),
        }
    }
}
