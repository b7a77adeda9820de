//! CLI presenter for output formatting

use colored::*;

use crate::domain::notification::NotificationHandle;
use crate::domain::Permission;

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list and status)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Report the outcome of a notify command; the tag goes to stdout
    pub fn notification_result(&self, handle: Option<&NotificationHandle>) {
        match handle {
            Some(handle) => {
                self.success(&format!("Notification shown: {}", handle.title));
                self.output(&handle.tag);
            }
            None => self.info("No notification shown"),
        }
    }

    /// Format a permission for display
    pub fn format_permission(&self, permission: Permission) -> String {
        match permission {
            Permission::Granted => permission.as_str().green().to_string(),
            Permission::Denied => permission.as_str().red().to_string(),
            Permission::Default => permission.as_str().yellow().to_string(),
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
