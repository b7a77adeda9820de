//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, config management
//! and the notify/status runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

// Re-export commonly used types
pub use app::{run_notify, run_status, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, NotifyArgs, SourceOptions};
pub use presenter::Presenter;
