//! Notification infrastructure module
//!
//! Provides cross-platform notification support using notify-rust (primary)
//! or the notify-send tool as an alternative.

mod icon_cache;
mod notify_rust;
mod notify_send;

pub use icon_cache::{default_icon_dir, desktop_icon};
pub use notify_rust::NotifyRustPlatform;
pub use notify_send::NotifySendPlatform;

use std::sync::Arc;

use crate::application::ports::NotificationPlatform;

/// Create the notification platform for a backend name
///
/// Unknown names use notify-rust (cross-platform).
pub fn create_platform(backend: &str, app_name: &str) -> Arc<dyn NotificationPlatform> {
    match backend {
        "notify-send" => Arc::new(NotifySendPlatform::with_app_name(app_name)),
        _ => Arc::new(NotifyRustPlatform::with_app_name(app_name)),
    }
}
