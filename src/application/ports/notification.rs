//! Notification platform port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::notification::{Notification, NotificationHandle};
use crate::domain::permission::Permission;

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("Notifications are not supported on this platform")]
    Unsupported,

    #[error("notify-send not found")]
    NotifySendNotFound,

    #[error("Permission request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to show notification: {0}")]
    SendFailed(String),
}

/// Port for the host's native notification capability
#[async_trait]
pub trait NotificationPlatform: Send + Sync {
    /// Whether the host exposes notifications at all
    fn is_supported(&self) -> bool;

    /// Current permission flag as reported by the host
    fn permission(&self) -> Permission;

    /// Ask the host (and possibly the user) for permission.
    async fn request_permission(&self) -> Result<Permission, NotificationError>;

    /// Display a notification.
    ///
    /// Implementations fire the `show` hook once the notification is up and
    /// may fire `click` / `close` later.
    async fn show(&self, notification: Notification)
        -> Result<NotificationHandle, NotificationError>;
}

/// Blanket implementation for boxed platform types
#[async_trait]
impl NotificationPlatform for Box<dyn NotificationPlatform> {
    fn is_supported(&self) -> bool {
        self.as_ref().is_supported()
    }

    fn permission(&self) -> Permission {
        self.as_ref().permission()
    }

    async fn request_permission(&self) -> Result<Permission, NotificationError> {
        self.as_ref().request_permission().await
    }

    async fn show(
        &self,
        notification: Notification,
    ) -> Result<NotificationHandle, NotificationError> {
        self.as_ref().show(notification).await
    }
}
