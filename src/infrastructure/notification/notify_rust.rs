//! Cross-platform notification adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux. On freedesktop systems the
//! permission request queries the notification server over D-Bus.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{NotificationError, NotificationPlatform};
use crate::domain::notification::{
    Notification, NotificationEventKind, NotificationHandle, NotificationHooks,
};
use crate::domain::permission::Permission;

use super::icon_cache::{default_icon_dir, desktop_icon};

/// Cross-platform notifier using notify-rust
pub struct NotifyRustPlatform {
    /// Application name for notifications
    app_name: String,
    /// Where inline icons are materialized
    icon_dir: PathBuf,
    permission: Arc<Mutex<Permission>>,
}

impl NotifyRustPlatform {
    /// Create a new notify-rust platform
    pub fn new() -> Self {
        Self::with_app_name("Nudge")
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            icon_dir: default_icon_dir(),
            permission: Arc::new(Mutex::new(initial_permission())),
        }
    }
}

impl Default for NotifyRustPlatform {
    fn default() -> Self {
        Self::new()
    }
}

/// Freedesktop servers may be absent, so the answer is unknown until queried
#[cfg(all(unix, not(target_os = "macos")))]
fn initial_permission() -> Permission {
    Permission::Default
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn initial_permission() -> Permission {
    Permission::Granted
}

#[cfg(all(unix, not(target_os = "macos")))]
fn query_server() -> Permission {
    match notify_rust::get_server_information() {
        Ok(info) => {
            debug!(server = %info.name, version = %info.version, "Notification server found");
            Permission::Granted
        }
        Err(e) => {
            debug!("No notification server: {}", e);
            Permission::Denied
        }
    }
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn query_server() -> Permission {
    Permission::Granted
}

#[async_trait]
impl NotificationPlatform for NotifyRustPlatform {
    fn is_supported(&self) -> bool {
        true
    }

    fn permission(&self) -> Permission {
        *self.permission.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn request_permission(&self) -> Result<Permission, NotificationError> {
        // D-Bus calls block, so run in spawn_blocking
        let permission = tokio::task::spawn_blocking(query_server)
            .await
            .map_err(|e| NotificationError::RequestFailed(format!("Task join error: {}", e)))?;

        *self.permission.lock().unwrap_or_else(PoisonError::into_inner) = permission;
        Ok(permission)
    }

    async fn show(
        &self,
        notification: Notification,
    ) -> Result<NotificationHandle, NotificationError> {
        let app_name = self.app_name.clone();
        let icon_dir = self.icon_dir.clone();
        let tag = notification.tag.clone();
        let title = notification.title.clone();
        let hooks = notification.hooks.clone();

        // notify-rust operations can block, so run in spawn_blocking
        let platform_id = tokio::task::spawn_blocking(move || {
            let icon = notification
                .icon
                .as_deref()
                .and_then(|icon| desktop_icon(icon, &icon_dir));
            show_blocking(&app_name, &notification, icon.as_deref())
        })
        .await
        .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))??;

        hooks.fire(NotificationEventKind::Show, &tag);

        Ok(NotificationHandle {
            tag,
            title,
            platform_id,
        })
    }
}

fn build_toast(
    app_name: &str,
    notification: &Notification,
    icon: Option<&str>,
) -> notify_rust::Notification {
    let mut toast = notify_rust::Notification::new();
    toast.appname(app_name).summary(&notification.title);

    if let Some(body) = notification.body.as_deref() {
        toast.body(body);
    }
    if let Some(icon) = icon {
        toast.icon(icon);
    }
    if notification.require_interaction == Some(true) {
        toast.timeout(notify_rust::Timeout::Never);
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        use notify_rust::Hint;

        toast.hint(Hint::Custom(
            "x-dunst-stack-tag".to_string(),
            notification.tag.clone(),
        ));
        if let Some(image) = notification.image.as_deref() {
            toast.image_path(image.strip_prefix("file://").unwrap_or(image));
        }
        if notification.silent == Some(true) {
            toast.hint(Hint::SuppressSound(true));
        }
        if notification.hooks.on_click.is_some() {
            toast.action("default", "Open");
        }
    }

    toast
}

#[cfg(all(unix, not(target_os = "macos")))]
fn show_blocking(
    app_name: &str,
    notification: &Notification,
    icon: Option<&str>,
) -> Result<Option<u32>, NotificationError> {
    let handle = build_toast(app_name, notification, icon)
        .show()
        .map_err(|e| NotificationError::SendFailed(e.to_string()))?;
    let id = handle.id();

    let hooks = notification.hooks.clone();
    if hooks.on_click.is_some() || hooks.on_close.is_some() {
        let tag = notification.tag.clone();
        // Waiting for the action blocks until the notification closes
        std::thread::spawn(move || watch_actions(handle, hooks, tag));
    }

    Ok(Some(id))
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn show_blocking(
    app_name: &str,
    notification: &Notification,
    icon: Option<&str>,
) -> Result<Option<u32>, NotificationError> {
    build_toast(app_name, notification, icon)
        .show()
        .map(|_| None)
        .map_err(|e| NotificationError::SendFailed(e.to_string()))
}

#[cfg(all(unix, not(target_os = "macos")))]
fn watch_actions(handle: notify_rust::NotificationHandle, hooks: NotificationHooks, tag: String) {
    handle.wait_for_action(|action| match action {
        "default" => {
            hooks.fire(NotificationEventKind::Click, &tag);
            hooks.fire(NotificationEventKind::Close, &tag);
        }
        "__closed" => hooks.fire(NotificationEventKind::Close, &tag),
        other => debug!(action = other, "Ignoring notification action"),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::NotificationOptions;

    fn notification(options: NotificationOptions) -> Notification {
        Notification::build("Title", options, None, "nudge-1".to_string())
    }

    #[test]
    fn platform_creates_successfully() {
        let platform = NotifyRustPlatform::new();
        assert!(platform.is_supported());
        assert_eq!(platform.app_name, "Nudge");
    }

    #[test]
    fn platform_with_custom_app_name() {
        let platform = NotifyRustPlatform::with_app_name("TestApp");
        assert_eq!(platform.app_name, "TestApp");
    }

    #[test]
    #[cfg(all(unix, not(target_os = "macos")))]
    fn freedesktop_permission_starts_undecided() {
        assert_eq!(NotifyRustPlatform::new().permission(), Permission::Default);
    }

    #[test]
    fn toast_carries_title_and_body() {
        let toast = build_toast(
            "Nudge",
            &notification(NotificationOptions::with_body("Body")),
            Some("dialog-information"),
        );
        assert_eq!(toast.summary, "Title");
        assert_eq!(toast.body, "Body");
        assert_eq!(toast.icon, "dialog-information");
        assert_eq!(toast.appname, "Nudge");
    }

    #[test]
    fn require_interaction_never_expires() {
        let toast = build_toast(
            "Nudge",
            &notification(NotificationOptions {
                require_interaction: Some(true),
                ..Default::default()
            }),
            None,
        );
        assert_eq!(toast.timeout, notify_rust::Timeout::Never);
    }

    #[tokio::test]
    #[ignore = "Requires a notification server"]
    async fn can_show_notification() {
        let platform = NotifyRustPlatform::new();
        assert_eq!(
            platform.request_permission().await.unwrap(),
            Permission::Granted
        );
        let handle = platform
            .show(notification(NotificationOptions::with_body("Hello")))
            .await
            .unwrap();
        assert_eq!(handle.tag, "nudge-1");
    }
}
