//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, VALID_BACKENDS, VALID_DIALOGS};
use crate::domain::error::ConfigError;
use crate::domain::notification::IconOverrides;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let mut config = store.load().await?;
    set_value(&mut config, key, value)?;

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load().await?;
    match get_value(&config, key) {
        Some(v) => presenter.output(&v),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        presenter.key_value(
            key,
            &get_value(&config, key).unwrap_or_else(|| "(not set)".to_string()),
        );
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Validate and store a value under a known key
fn set_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "app_name" => config.app_name = Some(value.to_string()),
        "backend" => config.backend = Some(one_of(key, value, VALID_BACKENDS)?),
        "dialog" => config.dialog = Some(one_of(key, value, VALID_DIALOGS)?),
        "use_alert_fallback" => config.use_alert_fallback = Some(bool_value(key, value)?),
        "alert_sound" => config.alert_sound = Some(value.to_string()),
        "show_on_source_tab" => config.show_on_source_tab = Some(bool_value(key, value)?),
        icon_key => {
            let icons = config.icons.get_or_insert_with(IconOverrides::default);
            let slot = match icon_key {
                "icons.success" => &mut icons.success,
                "icons.error" => &mut icons.error,
                "icons.info" => &mut icons.info,
                "icons.warning" => &mut icons.warning,
                _ => unreachable!(), // Already validated
            };
            *slot = Some(value.to_string());
        }
    }
    Ok(())
}

fn get_value(config: &AppConfig, key: &str) -> Option<String> {
    let icons = config.icons.as_ref();
    match key {
        "app_name" => config.app_name.clone(),
        "backend" => config.backend.clone(),
        "dialog" => config.dialog.clone(),
        "use_alert_fallback" => config.use_alert_fallback.map(|b| b.to_string()),
        "alert_sound" => config.alert_sound.clone(),
        "show_on_source_tab" => config.show_on_source_tab.map(|b| b.to_string()),
        "icons.success" => icons.and_then(|i| i.success.clone()),
        "icons.error" => icons.and_then(|i| i.error.clone()),
        "icons.info" => icons.and_then(|i| i.info.clone()),
        "icons.warning" => icons.and_then(|i| i.warning.clone()),
        _ => unreachable!(),
    }
}

fn one_of(key: &str, value: &str, valid: &[&str]) -> Result<String, ConfigError> {
    let lower = value.to_lowercase();
    if valid.contains(&lower.as_str()) {
        return Ok(lower);
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!(
            "Invalid value '{}'. Valid options: {}",
            value,
            valid.join(", ")
        ),
    })
}

fn bool_value(key: &str, value: &str) -> Result<bool, ConfigError> {
    parse_bool(value).map_err(|_| ConfigError::ValidationError {
        key: key.to_string(),
        message: "Value must be 'true' or 'false'".to_string(),
    })
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}
