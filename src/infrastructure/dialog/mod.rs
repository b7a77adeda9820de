//! Alert dialog infrastructure adapters

mod terminal;
mod zenity;

pub use terminal::TerminalDialog;
pub use zenity::ZenityDialog;

use std::sync::Arc;

use crate::application::ports::AlertDialog;

/// Create the alert dialog for a tool name.
///
/// `auto` picks zenity when it is installed, the terminal otherwise.
pub fn create_dialog(tool: &str, title: &str) -> Arc<dyn AlertDialog> {
    match tool {
        "zenity" => Arc::new(ZenityDialog::new(title)),
        "terminal" => Arc::new(TerminalDialog::new(title)),
        _ if ZenityDialog::is_available() => Arc::new(ZenityDialog::new(title)),
        _ => Arc::new(TerminalDialog::new(title)),
    }
}
