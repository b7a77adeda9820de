//! Category icons and icon precedence

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use super::category::Category;

const SUCCESS_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><circle cx="12" cy="12" r="11" fill="#22c55e"/><path d="M7 12.5l3.2 3.2L17 9" fill="none" stroke="#fff" stroke-width="2.2" stroke-linecap="round" stroke-linejoin="round"/></svg>"##;

const ERROR_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><circle cx="12" cy="12" r="11" fill="#ef4444"/><path d="M8 8l8 8M16 8l-8 8" fill="none" stroke="#fff" stroke-width="2.2" stroke-linecap="round"/></svg>"##;

const INFO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><circle cx="12" cy="12" r="11" fill="#3b82f6"/><path d="M12 11v6" fill="none" stroke="#fff" stroke-width="2.2" stroke-linecap="round"/><circle cx="12" cy="7.5" r="1.3" fill="#fff"/></svg>"##;

const WARNING_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12 2L1 21h22z" fill="#f59e0b"/><path d="M12 9v5" fill="none" stroke="#fff" stroke-width="2.2" stroke-linecap="round"/><circle cx="12" cy="17.5" r="1.3" fill="#fff"/></svg>"##;

/// Encode an SVG document as an inline `data:` URI
pub fn svg_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

/// Built-in inline icon for a category, `None` for [`Category::Message`]
pub fn builtin_icon(category: Category) -> Option<String> {
    let svg = match category {
        Category::Success => SUCCESS_SVG,
        Category::Error => ERROR_SVG,
        Category::Info => INFO_SVG,
        Category::Warning => WARNING_SVG,
        Category::Message => return None,
    };
    Some(svg_data_uri(svg))
}

/// Partial icon configuration; unset entries keep the built-in icon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconOverrides {
    pub success: Option<String>,
    pub error: Option<String>,
    pub info: Option<String>,
    pub warning: Option<String>,
}

/// Resolved icon reference per category.
///
/// An empty string is a valid configured value and means "no category
/// icon": the notification then falls back to the detected favicon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSet {
    pub success: String,
    pub error: String,
    pub info: String,
    pub warning: String,
}

impl IconSet {
    /// Built-in icons for every category
    pub fn builtin() -> Self {
        Self {
            success: svg_data_uri(SUCCESS_SVG),
            error: svg_data_uri(ERROR_SVG),
            info: svg_data_uri(INFO_SVG),
            warning: svg_data_uri(WARNING_SVG),
        }
    }

    /// Apply overrides on top of the built-in icons
    pub fn with_overrides(overrides: IconOverrides) -> Self {
        let builtin = Self::builtin();
        Self {
            success: overrides.success.unwrap_or(builtin.success),
            error: overrides.error.unwrap_or(builtin.error),
            info: overrides.info.unwrap_or(builtin.info),
            warning: overrides.warning.unwrap_or(builtin.warning),
        }
    }

    /// Icon configured for a category, `None` for [`Category::Message`]
    pub fn for_category(&self, category: Category) -> Option<&str> {
        match category {
            Category::Success => Some(&self.success),
            Category::Error => Some(&self.error),
            Category::Info => Some(&self.info),
            Category::Warning => Some(&self.warning),
            Category::Message => None,
        }
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Pick the icon to send: explicit > category > favicon > none.
///
/// Empty strings are skipped at every level. The favicon lookup only runs
/// when neither explicit nor category icon applies.
pub fn resolve_icon<F>(explicit: Option<&str>, category: Option<&str>, favicon: F) -> Option<String>
where
    F: FnOnce() -> Option<String>,
{
    explicit
        .filter(|icon| !icon.is_empty())
        .or_else(|| category.filter(|icon| !icon.is_empty()))
        .map(str::to_string)
        .or_else(|| favicon().filter(|icon| !icon.is_empty()))
}
