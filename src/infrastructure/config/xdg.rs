//! XDG config store adapter

use std::env;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, VALID_BACKENDS, VALID_DIALOGS};
use crate::domain::error::ConfigError;

/// Environment variable naming the config file, bypassing the XDG lookup
pub const CONFIG_PATH_ENV: &str = "NUDGE_CONFIG";

/// TOML config store at `$XDG_CONFIG_HOME/nudge/config.toml`
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    /// Store at `$NUDGE_CONFIG`, or under the user's config directory
    /// (`~/.config` when the platform reports none)
    pub fn new() -> Result<Self, ConfigError> {
        let path = resolve_path(
            env::var_os(CONFIG_PATH_ENV),
            dirs::config_dir(),
            dirs::home_dir(),
        )
        .ok_or(ConfigError::NoConfigDir)?;
        Ok(Self { path })
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse TOML content, rejecting values the adapters would not recognize
    fn parse_toml(content: &str) -> Result<AppConfig, ConfigError> {
        let config: AppConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        check_choice("backend", config.backend.as_deref(), VALID_BACKENDS)?;
        check_choice("dialog", config.dialog.as_deref(), VALID_DIALOGS)?;
        Ok(config)
    }
}

fn resolve_path(
    override_path: Option<OsString>,
    config_dir: Option<PathBuf>,
    home_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path.filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    config_dir
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .map(|dir| dir.join("nudge").join("config.toml"))
}

fn check_choice(key: &str, value: Option<&str>, valid: &[&str]) -> Result<(), ConfigError> {
    match value {
        Some(value) if !valid.contains(&value) => Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!(
                "Invalid value '{}'. Valid options: {}",
                value,
                valid.join(", ")
            ),
        }),
        _ => Ok(()),
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Self::parse_toml(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(AppConfig::empty()),
            Err(e) => Err(ConfigError::ReadError(format!(
                "{}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let content =
            toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))?;
        fs::write(&self.path, content)
            .await
            .map_err(|e| ConfigError::WriteError(format!("{}: {}", self.path.display(), e)))
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        if self.exists() {
            return Err(ConfigError::AlreadyExists(
                self.path.to_string_lossy().to_string(),
            ));
        }

        self.save(&AppConfig::defaults()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::IconOverrides;

    #[test]
    fn path_under_config_dir() {
        let path = resolve_path(None, Some(PathBuf::from("/xdg")), Some(PathBuf::from("/home/u")));
        assert_eq!(path, Some(PathBuf::from("/xdg/nudge/config.toml")));
    }

    #[test]
    fn path_falls_back_to_home_config() {
        let path = resolve_path(None, None, Some(PathBuf::from("/home/u")));
        assert_eq!(path, Some(PathBuf::from("/home/u/.config/nudge/config.toml")));
    }

    #[test]
    fn path_override_wins() {
        let path = resolve_path(
            Some(OsString::from("/etc/nudge.toml")),
            Some(PathBuf::from("/xdg")),
            None,
        );
        assert_eq!(path, Some(PathBuf::from("/etc/nudge.toml")));
    }

    #[test]
    fn empty_override_is_ignored() {
        let path = resolve_path(Some(OsString::new()), Some(PathBuf::from("/xdg")), None);
        assert_eq!(path, Some(PathBuf::from("/xdg/nudge/config.toml")));
    }

    #[test]
    fn no_directories_means_no_path() {
        assert_eq!(resolve_path(None, None, None), None);
    }

    #[test]
    fn custom_path() {
        let store = XdgConfigStore::with_path("/custom/path/config.toml");
        assert_eq!(store.path(), PathBuf::from("/custom/path/config.toml"));
    }

    #[test]
    fn parse_toml_with_icon_section() {
        let content = r#"
backend = "notify-send"
use_alert_fallback = false
alert_sound = "/usr/share/sounds/ding.oga"

[icons]
success = "emblem-ok"
info = ""
"#;

        let config = XdgConfigStore::parse_toml(content).unwrap();
        assert_eq!(config.backend, Some("notify-send".to_string()));
        assert_eq!(config.use_alert_fallback, Some(false));
        assert_eq!(
            config.alert_sound,
            Some("/usr/share/sounds/ding.oga".to_string())
        );
        let icons = config.icons.unwrap();
        assert_eq!(icons.success, Some("emblem-ok".to_string()));
        assert_eq!(icons.info, Some(String::new()));
        assert!(icons.error.is_none());
    }

    #[test]
    fn parse_toml_rejects_wrong_types() {
        assert!(XdgConfigStore::parse_toml("use_alert_fallback = \"sometimes\"").is_err());
    }

    #[test]
    fn parse_toml_rejects_unknown_backend_and_dialog() {
        assert!(matches!(
            XdgConfigStore::parse_toml("backend = \"growl\""),
            Err(ConfigError::ValidationError { key, .. }) if key == "backend"
        ));
        assert!(matches!(
            XdgConfigStore::parse_toml("dialog = \"kdialog\""),
            Err(ConfigError::ValidationError { key, .. }) if key == "dialog"
        ));
        assert!(XdgConfigStore::parse_toml("dialog = \"terminal\"").is_ok());
    }

    #[tokio::test]
    async fn hand_edited_backend_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "backend = \"NotifySend\"\n").unwrap();

        let store = XdgConfigStore::with_path(&path);
        assert!(store.load().await.is_err());
        assert_eq!(store.load_or_empty().await, AppConfig::empty());
    }

    #[tokio::test]
    async fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("nested").join("config.toml"));
        let config = AppConfig {
            show_on_source_tab: Some(true),
            icons: Some(IconOverrides {
                warning: Some("dialog-warning".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        store.save(&config).await.unwrap();
        assert_eq!(store.load().await.unwrap(), config);
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        assert_eq!(store.load().await.unwrap(), AppConfig::empty());
    }

    #[tokio::test]
    async fn init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));

        store.init().await.unwrap();
        assert_eq!(store.load().await.unwrap(), AppConfig::defaults());
        assert!(matches!(
            store.init().await,
            Err(ConfigError::AlreadyExists(_))
        ));
    }
}
