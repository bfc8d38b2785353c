//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] netshell_storage::StorageError),

    #[error("Tab error: {0}")]
    Tab(#[from] netshell_tabs::TabError),
}
