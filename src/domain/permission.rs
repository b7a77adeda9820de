//! Notification permission value object

use std::fmt;

/// Permission flag reported by the notification platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Permission {
    /// Not decided yet; a request may prompt the user
    #[default]
    Default,
    Granted,
    Denied,
}

impl Permission {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Granted => "granted",
            Self::Denied => "denied",
        }
    }

    /// Whether the permission is a final answer that must not be re-requested
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Granted | Self::Denied)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
