//! App runners for the notify and status commands

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::ports::{ConfigStore, DocumentMetadata};
use crate::application::{CoordinatorPorts, NotificationCoordinator};
use crate::domain::config::AppConfig;
use crate::domain::notification::{Category, NotificationEvent, NotificationOptions};
use crate::infrastructure::{
    create_audio_cue, create_dialog, create_last_resort_cue, create_platform, HtmlHeadMetadata,
    NoDocument, StaticVisibility, XdgConfigStore,
};

use super::args::SourceOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run one notification; `None` uses the auto-detected icon
pub async fn run_notify(
    config: &AppConfig,
    source: &SourceOptions,
    category: Option<Category>,
    title: &str,
    mut options: NotificationOptions,
) -> ExitCode {
    let presenter = Presenter::new();

    let coordinator = match build_coordinator(config, source) {
        Ok(coordinator) => coordinator,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    coordinator.init(config.notifier_settings());

    options.hooks.on_show = Some(Arc::new(|event: &NotificationEvent| {
        debug!(tag = %event.tag, "Notification displayed");
    }));
    options.hooks.on_error = Some(Arc::new(|event: &NotificationEvent| {
        warn!(tag = %event.tag, "Notification could not be displayed");
    }));

    let handle = match category {
        Some(Category::Success) => coordinator.success(title, options).await,
        Some(Category::Error) => coordinator.error(title, options).await,
        Some(Category::Info) => coordinator.info(title, options).await,
        Some(Category::Warning) => coordinator.warning(title, options).await,
        Some(Category::Message) => coordinator.message(title, options).await,
        None => coordinator.notify(title, options).await,
    };

    presenter.notification_result(handle.as_ref());
    ExitCode::from(EXIT_SUCCESS)
}

/// Report support and permission; `request` acquires permission first
pub async fn run_status(config: &AppConfig, source: &SourceOptions, request: bool) -> ExitCode {
    let presenter = Presenter::new();

    let coordinator = match build_coordinator(config, source) {
        Ok(coordinator) => coordinator,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if request {
        coordinator.init(config.notifier_settings());
        coordinator.ensure_ready().await;
    }

    presenter.key_value("backend", config.backend_or_default());
    presenter.key_value("supported", &coordinator.is_supported().to_string());
    presenter.key_value(
        "permission",
        &presenter.format_permission(coordinator.permission_status()),
    );
    presenter.key_value(
        "alert_fallback",
        &coordinator.config().use_alert_fallback.to_string(),
    );

    ExitCode::from(EXIT_SUCCESS)
}

/// Wire the coordinator from the merged config and source flags
pub fn build_coordinator(
    config: &AppConfig,
    source: &SourceOptions,
) -> Result<NotificationCoordinator, String> {
    let app_name = config.app_name_or_default();

    let document: Arc<dyn DocumentMetadata> = match (&source.page, &source.page_url) {
        (Some(page), page_url) => Arc::new(
            HtmlHeadMetadata::from_file(page, page_url.clone())
                .map_err(|e| format!("Failed to read page {}: {}", page.display(), e))?,
        ),
        (None, Some(page_url)) => Arc::new(HtmlHeadMetadata::from_url(page_url.clone())),
        (None, None) => Arc::new(NoDocument),
    };

    let ports = CoordinatorPorts {
        platform: create_platform(config.backend_or_default(), app_name),
        visibility: Arc::new(StaticVisibility::new(source.source_active)),
        document,
        cue: create_audio_cue(true),
        last_resort_cue: create_last_resort_cue(true),
        dialog: create_dialog(config.dialog_or_default(), app_name),
    };

    Ok(NotificationCoordinator::new(ports))
}

/// Load and merge configuration from file and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let file_config = match XdgConfigStore::new() {
        Ok(store) => store.load_or_empty().await,
        Err(e) => {
            warn!("{}", e);
            AppConfig::empty()
        }
    };

    // Merge: defaults < file < cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}
