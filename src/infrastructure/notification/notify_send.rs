//! notify-send notification adapter

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{NotificationError, NotificationPlatform};
use crate::domain::notification::{Notification, NotificationEventKind, NotificationHandle};
use crate::domain::permission::Permission;

use super::icon_cache::{default_icon_dir, desktop_icon};

/// notify-send notification adapter
pub struct NotifySendPlatform {
    /// Application name for notifications
    app_name: String,
    /// notify-send executable, looked up on PATH unless absolute
    program: PathBuf,
    icon_dir: PathBuf,
    permission: Arc<Mutex<Permission>>,
}

impl NotifySendPlatform {
    /// Create a new notify-send platform
    pub fn new() -> Self {
        Self::with_app_name("Nudge")
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            program: PathBuf::from("notify-send"),
            icon_dir: default_icon_dir(),
            permission: Arc::new(Mutex::new(Permission::Default)),
        }
    }

    /// Use a specific notify-send executable
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Command-line arguments for a notification
    fn args(&self, notification: &Notification, icon: Option<&str>) -> Vec<String> {
        let mut args = vec![
            "--app-name".to_string(),
            self.app_name.clone(),
            format!("--hint=string:x-dunst-stack-tag:{}", notification.tag),
        ];

        if let Some(icon) = icon {
            args.push("--icon".to_string());
            args.push(icon.to_string());
        }
        if notification.require_interaction == Some(true) {
            args.push("--expire-time=0".to_string());
        }
        if notification.silent == Some(true) {
            args.push("--hint=boolean:suppress-sound:true".to_string());
        }
        if let Some(image) = notification.image.as_deref() {
            args.push(format!(
                "--hint=string:image-path:{}",
                image.strip_prefix("file://").unwrap_or(image)
            ));
        }

        args.push(notification.title.clone());
        if let Some(body) = notification.body.as_deref() {
            args.push(body.to_string());
        }
        args
    }
}

impl Default for NotifySendPlatform {
    fn default() -> Self {
        Self::new()
    }
}

fn map_spawn_error(e: std::io::Error) -> NotificationError {
    if e.kind() == std::io::ErrorKind::NotFound {
        NotificationError::NotifySendNotFound
    } else {
        NotificationError::SendFailed(e.to_string())
    }
}

#[async_trait]
impl NotificationPlatform for NotifySendPlatform {
    fn is_supported(&self) -> bool {
        which::which(&self.program).is_ok()
    }

    fn permission(&self) -> Permission {
        *self.permission.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn request_permission(&self) -> Result<Permission, NotificationError> {
        let status = Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(map_spawn_error)?;

        let permission = if status.success() {
            Permission::Granted
        } else {
            Permission::Denied
        };
        *self.permission.lock().unwrap_or_else(PoisonError::into_inner) = permission;
        Ok(permission)
    }

    async fn show(
        &self,
        notification: Notification,
    ) -> Result<NotificationHandle, NotificationError> {
        let icon = notification
            .icon
            .as_deref()
            .and_then(|icon| desktop_icon(icon, &self.icon_dir));

        let status = Command::new(&self.program)
            .args(self.args(&notification, icon.as_deref()))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(map_spawn_error)?;

        if !status.success() {
            return Err(NotificationError::SendFailed(format!(
                "notify-send exited with status: {}",
                status
            )));
        }

        notification
            .hooks
            .fire(NotificationEventKind::Show, &notification.tag);

        Ok(NotificationHandle {
            tag: notification.tag,
            title: notification.title,
            platform_id: None,
        })
    }
}
