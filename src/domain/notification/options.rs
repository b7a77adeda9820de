//! Per-call notification options and the resolved notification payload

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::error::{InvalidDirectionError, VibratePatternError};

/// Text direction of the notification content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Auto,
    Ltr,
    Rtl,
}

impl Direction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl FromStr for Direction {
    type Err = InvalidDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "ltr" => Ok(Self::Ltr),
            "rtl" => Ok(Self::Rtl),
            _ => Err(InvalidDirectionError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Vibration pattern in milliseconds (on, off, on, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VibratePattern(pub Vec<u32>);

impl FromStr for VibratePattern {
    type Err = VibratePatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || VibratePatternError {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(err());
        }
        trimmed
            .split(',')
            .map(|part| part.trim().parse::<u32>().map_err(|_| err()))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// Lifecycle events reported to notification hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationEventKind {
    Show,
    Click,
    Close,
    Error,
}

/// Event passed to a notification hook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    pub kind: NotificationEventKind,
    pub tag: String,
}

/// Callback invoked for a notification lifecycle event
pub type NotificationHook = Arc<dyn Fn(&NotificationEvent) + Send + Sync>;

/// Optional lifecycle callbacks
#[derive(Clone, Default)]
pub struct NotificationHooks {
    pub on_click: Option<NotificationHook>,
    pub on_close: Option<NotificationHook>,
    pub on_error: Option<NotificationHook>,
    pub on_show: Option<NotificationHook>,
}

impl NotificationHooks {
    /// Invoke the hook registered for `kind`, if any
    pub fn fire(&self, kind: NotificationEventKind, tag: &str) {
        let hook = match kind {
            NotificationEventKind::Show => &self.on_show,
            NotificationEventKind::Click => &self.on_click,
            NotificationEventKind::Close => &self.on_close,
            NotificationEventKind::Error => &self.on_error,
        };
        if let Some(hook) = hook {
            hook(&NotificationEvent {
                kind,
                tag: tag.to_string(),
            });
        }
    }
}

impl fmt::Debug for NotificationHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationHooks")
            .field("on_click", &self.on_click.is_some())
            .field("on_close", &self.on_close.is_some())
            .field("on_error", &self.on_error.is_some())
            .field("on_show", &self.on_show.is_some())
            .finish()
    }
}

/// Options accepted by every trigger. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct NotificationOptions {
    pub badge: Option<String>,
    pub body: Option<String>,
    pub data: Option<serde_json::Value>,
    pub dir: Option<Direction>,
    /// Explicit icon; takes precedence over category icon and favicon
    pub icon: Option<String>,
    pub image: Option<String>,
    pub lang: Option<String>,
    pub hooks: NotificationHooks,
    pub renotify: Option<bool>,
    pub require_interaction: Option<bool>,
    /// Show even while the source is active; falls back to the configured default
    pub show_on_source_tab: Option<bool>,
    pub silent: Option<bool>,
    /// Ignored: every notification gets a generated tag
    pub tag: Option<String>,
    /// Milliseconds since the Unix epoch
    pub timestamp: Option<u64>,
    pub vibrate: Option<VibratePattern>,
}

impl NotificationOptions {
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            ..Default::default()
        }
    }

    pub fn is_silent(&self) -> bool {
        self.silent.unwrap_or(false)
    }
}

/// Resolved notification handed to the platform.
/// `None` fields are omitted so the platform applies its own defaults.
#[derive(Debug, Clone)]
pub struct Notification {
    pub title: String,
    pub tag: String,
    pub body: Option<String>,
    pub icon: Option<String>,
    pub badge: Option<String>,
    pub image: Option<String>,
    pub data: Option<serde_json::Value>,
    pub dir: Option<Direction>,
    pub lang: Option<String>,
    pub renotify: Option<bool>,
    pub require_interaction: Option<bool>,
    pub silent: Option<bool>,
    pub timestamp: Option<u64>,
    pub vibrate: Option<VibratePattern>,
    pub hooks: NotificationHooks,
}

impl Notification {
    /// Copy the options field by field, replacing the tag and icon.
    pub fn build(title: &str, options: NotificationOptions, icon: Option<String>, tag: String) -> Self {
        Self {
            title: title.to_string(),
            tag,
            body: options.body,
            icon,
            badge: options.badge,
            image: options.image,
            data: options.data,
            dir: options.dir,
            lang: options.lang,
            renotify: options.renotify,
            require_interaction: options.require_interaction,
            silent: options.silent,
            timestamp: options.timestamp,
            vibrate: options.vibrate,
            hooks: options.hooks,
        }
    }

    /// Text shown by the alert dialog fallback
    pub fn alert_text(title: &str, body: Option<&str>) -> String {
        match body.filter(|b| !b.is_empty()) {
            Some(body) => format!("{}\n\n{}", title, body),
            None => title.to_string(),
        }
    }
}

/// Live notification returned to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationHandle {
    pub tag: String,
    pub title: String,
    /// Identifier assigned by the notification server, when it reports one
    pub platform_id: Option<u32>,
}
