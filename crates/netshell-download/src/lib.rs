//! netshell Download Coordination
//!
//! Mediates one download's lifecycle between the rendering engine and the
//! user's file-placement decision. The engine owns the transfer itself; the
//! coordinator only accepts or cancels and relays progress. No retries: a
//! failed or cancelled download stays down by design.

mod coordinator;
mod download;

pub use coordinator::{DownloadCoordinator, DownloadHandle, SavePathPicker, StatusSink};
pub use download::{Download, DownloadState};
