//! Notification category value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidCategoryError;

/// All notification categories
pub const ALL_CATEGORIES: &[Category] = &[
    Category::Success,
    Category::Error,
    Category::Info,
    Category::Warning,
    Category::Message,
];

/// Category of a notification, selecting the icon it carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Success,
    Error,
    Info,
    Warning,
    /// Plain message; always uses the auto-detected favicon
    Message,
}

impl Category {
    /// Get the string identifier for this category
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Message => "message",
        }
    }
}

impl FromStr for Category {
    type Err = InvalidCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "success" => Ok(Self::Success),
            "error" => Ok(Self::Error),
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "message" => Ok(Self::Message),
            _ => Err(InvalidCategoryError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
