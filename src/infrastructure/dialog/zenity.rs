//! zenity alert dialog adapter

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AlertDialog, DialogError};

/// Modal info dialog via zenity
pub struct ZenityDialog {
    title: String,
}

impl ZenityDialog {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Whether zenity is on PATH
    pub fn is_available() -> bool {
        which::which("zenity").is_ok()
    }

    fn args<'a>(&'a self, text: &'a str) -> [&'a str; 6] {
        ["--info", "--no-markup", "--title", &self.title, "--text", text]
    }
}

#[async_trait]
impl AlertDialog for ZenityDialog {
    async fn alert(&self, text: &str) -> Result<(), DialogError> {
        // Exit status only says how the dialog was closed; any close counts
        // as dismissed.
        Command::new("zenity")
            .args(self.args(text))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    DialogError::ToolNotFound("zenity".to_string())
                } else {
                    DialogError::Failed(e.to_string())
                }
            })?;

        Ok(())
    }
}
