//! Terminal alert dialog adapter

use std::io::{self, BufRead, IsTerminal, Write};

use async_trait::async_trait;
use colored::*;

use crate::application::ports::{AlertDialog, DialogError};

/// Prints the alert to stderr and, on an interactive terminal, waits for Enter
pub struct TerminalDialog {
    title: String,
}

impl TerminalDialog {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    fn render(&self, text: &str) -> String {
        let mut out = format!("{} {}\n", "⚠".yellow(), self.title.bold());
        for line in text.lines() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

#[async_trait]
impl AlertDialog for TerminalDialog {
    async fn alert(&self, text: &str) -> Result<(), DialogError> {
        let rendered = self.render(text);

        tokio::task::spawn_blocking(move || -> Result<(), DialogError> {
            let mut stderr = io::stderr().lock();
            stderr
                .write_all(rendered.as_bytes())
                .and_then(|_| stderr.flush())
                .map_err(|e| DialogError::Failed(e.to_string()))?;

            let stdin = io::stdin();
            if stdin.is_terminal() {
                write!(stderr, "  {}", "Press Enter to dismiss".dimmed())
                    .and_then(|_| stderr.flush())
                    .map_err(|e| DialogError::Failed(e.to_string()))?;
                let mut line = String::new();
                stdin
                    .lock()
                    .read_line(&mut line)
                    .map_err(|e| DialogError::Failed(e.to_string()))?;
            }
            Ok(())
        })
        .await
        .map_err(|e| DialogError::Failed(format!("Task join error: {}", e)))?
    }
}
