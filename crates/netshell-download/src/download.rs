//! Download data structure

use std::path::PathBuf;

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadState {
    /// Engine asked for a placement decision
    Requested,
    /// User chose a target path; engine told to proceed
    Accepted,
    /// Transfer running, progress events arriving
    InProgress,
    /// Transfer completed
    Finished,
    /// User declined a save location
    Cancelled,
}

impl DownloadState {
    /// Finished and Cancelled are terminal; later events for this download
    /// are stale and must be ignored.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DownloadState::Finished | DownloadState::Cancelled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DownloadState::Requested => "requested",
            DownloadState::Accepted => "accepted",
            DownloadState::InProgress => "in_progress",
            DownloadState::Finished => "finished",
            DownloadState::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for DownloadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transient record of one download; never persisted.
#[derive(Debug, Clone)]
pub struct Download {
    pub id: String,
    /// Path suggested by the engine
    pub suggested_path: PathBuf,
    /// Path chosen by the user, once accepted
    pub target_path: Option<PathBuf>,
    pub received_bytes: u64,
    pub total_bytes: u64,
    pub state: DownloadState,
    pub created_at: DateTime<Utc>,
}

impl Download {
    pub fn new(id: String, suggested_path: PathBuf) -> Self {
        Self {
            id,
            suggested_path,
            target_path: None,
            received_bytes: 0,
            total_bytes: 0,
            state: DownloadState::Requested,
            created_at: Utc::now(),
        }
    }

    /// Progress as a percentage (0-100), or `None` when the total is unknown
    /// (content length 0) and the progress is indeterminate.
    pub fn progress(&self) -> Option<f64> {
        if self.total_bytes == 0 {
            return None;
        }

        Some((self.received_bytes as f64 / self.total_bytes as f64 * 100.0).min(100.0))
    }
}
