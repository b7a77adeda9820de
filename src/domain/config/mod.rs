//! Configuration domain module

mod app_config;
mod notifier_config;

pub use app_config::{AppConfig, VALID_BACKENDS, VALID_DIALOGS};
pub use notifier_config::{NotifierConfig, NotifierSettings};
