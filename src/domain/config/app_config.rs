//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::notification::IconOverrides;

use super::notifier_config::NotifierSettings;

/// Notification backends
pub const VALID_BACKENDS: &[&str] = &["notify-rust", "notify-send"];

/// Alert dialog tools
pub const VALID_DIALOGS: &[&str] = &["auto", "zenity", "terminal"];

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: Option<String>,
    pub backend: Option<String>,
    pub dialog: Option<String>,
    pub use_alert_fallback: Option<bool>,
    pub alert_sound: Option<String>,
    pub show_on_source_tab: Option<bool>,
    pub icons: Option<IconOverrides>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            app_name: Some("Nudge".to_string()),
            backend: Some("notify-rust".to_string()),
            dialog: Some("auto".to_string()),
            use_alert_fallback: Some(true),
            alert_sound: None,
            show_on_source_tab: Some(false),
            icons: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            app_name: other.app_name.or(self.app_name),
            backend: other.backend.or(self.backend),
            dialog: other.dialog.or(self.dialog),
            use_alert_fallback: other.use_alert_fallback.or(self.use_alert_fallback),
            alert_sound: other.alert_sound.or(self.alert_sound),
            show_on_source_tab: other.show_on_source_tab.or(self.show_on_source_tab),
            icons: Self::merge_icons(self.icons, other.icons),
        }
    }

    /// Merge icon sections
    fn merge_icons(
        base: Option<IconOverrides>,
        other: Option<IconOverrides>,
    ) -> Option<IconOverrides> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(IconOverrides {
                success: o.success.or(b.success),
                error: o.error.or(b.error),
                info: o.info.or(b.info),
                warning: o.warning.or(b.warning),
            }),
        }
    }

    /// Get app name, or "Nudge" if not set
    pub fn app_name_or_default(&self) -> &str {
        self.app_name.as_deref().unwrap_or("Nudge")
    }

    /// Get backend name, or "notify-rust" if not set
    pub fn backend_or_default(&self) -> &str {
        self.backend.as_deref().unwrap_or("notify-rust")
    }

    /// Get dialog tool, or "auto" if not set
    pub fn dialog_or_default(&self) -> &str {
        self.dialog.as_deref().unwrap_or("auto")
    }

    /// Build the coordinator settings from this config
    pub fn notifier_settings(&self) -> NotifierSettings {
        NotifierSettings {
            use_alert_fallback: self.use_alert_fallback,
            alert_sound: self
                .alert_sound
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            show_on_source_tab: self.show_on_source_tab,
            icons: self.icons.clone().unwrap_or_default(),
        }
    }
}
