//! Coordinator configuration

use std::path::PathBuf;

use crate::domain::notification::{IconOverrides, IconSet};

/// Partial settings passed to `init`. Unset fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotifierSettings {
    pub use_alert_fallback: Option<bool>,
    pub alert_sound: Option<PathBuf>,
    pub show_on_source_tab: Option<bool>,
    pub icons: IconOverrides,
}

/// Resolved coordinator configuration
#[derive(Debug, Clone, PartialEq)]
pub struct NotifierConfig {
    /// Show the alert dialog when notifications cannot be displayed
    pub use_alert_fallback: bool,
    /// Sound file for the fallback; `None` plays the generated chime
    pub alert_sound: Option<PathBuf>,
    /// Default visibility gate when a call does not set one
    pub show_on_source_tab: bool,
    pub icons: IconSet,
}

impl NotifierConfig {
    /// Resolve settings over the defaults.
    ///
    /// Only the defaults are merged in; a previously applied configuration
    /// never is.
    pub fn from_settings(settings: NotifierSettings) -> Self {
        let defaults = Self::default();
        Self {
            use_alert_fallback: settings
                .use_alert_fallback
                .unwrap_or(defaults.use_alert_fallback),
            alert_sound: settings.alert_sound,
            show_on_source_tab: settings
                .show_on_source_tab
                .unwrap_or(defaults.show_on_source_tab),
            icons: IconSet::with_overrides(settings.icons),
        }
    }
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            use_alert_fallback: true,
            alert_sound: None,
            show_on_source_tab: false,
            icons: IconSet::builtin(),
        }
    }
}
