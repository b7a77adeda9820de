//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::domain::notification::{Category, Direction, NotificationOptions, VibratePattern};

/// Nudge - desktop notifications with an alert fallback
#[derive(Parser, Debug)]
#[command(name = "nudge")]
#[command(version)]
#[command(about = "Desktop notifications with permission handling, icon selection and an alert fallback")]
#[command(long_about = None)]
pub struct Cli {
    /// Notification backend
    #[arg(long, global = true, env = "NUDGE_BACKEND", value_name = "BACKEND")]
    pub backend: Option<BackendArg>,

    /// Alert dialog used when notifications are unavailable
    #[arg(long, global = true, env = "NUDGE_DIALOG", value_name = "TOOL")]
    pub dialog: Option<DialogArg>,

    /// The issuing source is in front of the user (suppresses notifications
    /// unless --show-on-source-tab)
    #[arg(long, global = true)]
    pub source_active: bool,

    /// HTML page to detect the favicon from
    #[arg(long, global = true, value_name = "FILE")]
    pub page: Option<PathBuf>,

    /// URL of the page, for relative icon links and the /favicon.ico fallback
    #[arg(long, global = true, value_name = "URL")]
    pub page_url: Option<String>,

    /// Do not show the alert dialog when notifications are unavailable
    #[arg(long, global = true)]
    pub no_alert_fallback: bool,

    /// Sound file played before the alert dialog (default: generated chime)
    #[arg(long, global = true, value_name = "FILE")]
    pub sound: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a notification, optionally with a category icon
    Notify {
        /// Category whose icon to use
        #[arg(short = 'c', long, value_name = "CATEGORY")]
        category: Option<CategoryArg>,

        #[command(flatten)]
        args: NotifyArgs,
    },
    /// Show a success notification
    Success(NotifyArgs),
    /// Show an error notification
    Error(NotifyArgs),
    /// Show an info notification
    Info(NotifyArgs),
    /// Show a warning notification
    Warning(NotifyArgs),
    /// Show a message using the page favicon
    Message(NotifyArgs),
    /// Show notification support and permission
    Status {
        /// Request permission before reporting
        #[arg(long)]
        request: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Per-notification arguments
#[derive(Args, Debug, Clone, Default)]
pub struct NotifyArgs {
    /// Notification title
    pub title: String,

    /// Notification body
    #[arg(short = 'b', long)]
    pub body: Option<String>,

    /// Icon (path, icon name, URL or data URI); overrides category and favicon
    #[arg(short = 'i', long)]
    pub icon: Option<String>,

    /// Image shown inside the notification
    #[arg(long)]
    pub image: Option<String>,

    /// Badge image
    #[arg(long)]
    pub badge: Option<String>,

    /// Content language (BCP 47)
    #[arg(long)]
    pub lang: Option<String>,

    /// Text direction (auto, ltr, rtl)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<Direction>,

    /// Opaque JSON data attached to the notification
    #[arg(long, value_name = "JSON")]
    pub data: Option<serde_json::Value>,

    /// Vibration pattern in milliseconds (e.g., 200,100,200)
    #[arg(long, value_name = "PATTERN")]
    pub vibrate: Option<VibratePattern>,

    /// Timestamp in milliseconds since the Unix epoch
    #[arg(long, value_name = "MS")]
    pub timestamp: Option<u64>,

    /// No sound, including the fallback chime
    #[arg(short = 's', long)]
    pub silent: bool,

    /// Alert again when replacing a notification
    #[arg(long)]
    pub renotify: bool,

    /// Keep the notification until the user dismisses it
    #[arg(long)]
    pub require_interaction: bool,

    /// Show even while the source is active
    #[arg(long)]
    pub show_on_source_tab: bool,
}

impl NotifyArgs {
    /// Convert to notification options; unset flags stay unset
    pub fn to_options(&self) -> NotificationOptions {
        NotificationOptions {
            badge: self.badge.clone(),
            body: self.body.clone(),
            data: self.data.clone(),
            dir: self.dir,
            icon: self.icon.clone(),
            image: self.image.clone(),
            lang: self.lang.clone(),
            renotify: self.renotify.then_some(true),
            require_interaction: self.require_interaction.then_some(true),
            show_on_source_tab: self.show_on_source_tab.then_some(true),
            silent: self.silent.then_some(true),
            timestamp: self.timestamp,
            vibrate: self.vibrate.clone(),
            ..Default::default()
        }
    }
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Category argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Success,
    Error,
    Info,
    Warning,
    Message,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Success => Category::Success,
            CategoryArg::Error => Category::Error,
            CategoryArg::Info => Category::Info,
            CategoryArg::Warning => Category::Warning,
            CategoryArg::Message => Category::Message,
        }
    }
}

/// Backend argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    NotifyRust,
    NotifySend,
}

impl BackendArg {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotifyRust => "notify-rust",
            Self::NotifySend => "notify-send",
        }
    }
}

/// Dialog argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DialogArg {
    Auto,
    Zenity,
    Terminal,
}

impl DialogArg {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Zenity => "zenity",
            Self::Terminal => "terminal",
        }
    }
}

/// Where notifications come from, as seen by the coordinator
#[derive(Debug, Clone, Default)]
pub struct SourceOptions {
    pub source_active: bool,
    pub page: Option<PathBuf>,
    pub page_url: Option<url::Url>,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "app_name",
    "backend",
    "dialog",
    "use_alert_fallback",
    "alert_sound",
    "show_on_source_tab",
    "icons.success",
    "icons.error",
    "icons.info",
    "icons.warning",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
