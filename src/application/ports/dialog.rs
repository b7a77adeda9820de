//! Alert dialog port interface

use async_trait::async_trait;
use thiserror::Error;

/// Dialog errors
#[derive(Debug, Clone, Error)]
pub enum DialogError {
    #[error("{0} not found")]
    ToolNotFound(String),

    #[error("Failed to show dialog: {0}")]
    Failed(String),
}

/// Port for a blocking, modal text dialog
#[async_trait]
pub trait AlertDialog: Send + Sync {
    /// Show `text` and wait until the user dismisses it
    async fn alert(&self, text: &str) -> Result<(), DialogError>;
}
