//! Terminal bell audio cue
//!
//! Last resort when no audio device can be opened.

use std::io::{self, Write};

use async_trait::async_trait;

use crate::application::ports::{AudioCue, AudioCueError};
use crate::domain::alert::AlertSound;

/// Rings the terminal bell on stderr, whatever sound was requested
pub struct TerminalBellCue;

impl TerminalBellCue {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalBellCue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioCue for TerminalBellCue {
    async fn play(&self, _sound: &AlertSound) -> Result<(), AudioCueError> {
        let mut stderr = io::stderr().lock();
        stderr
            .write_all(b"\x07")
            .and_then(|_| stderr.flush())
            .map_err(|e| AudioCueError::PlaybackFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::alert::ChimeSpec;

    #[tokio::test]
    async fn bell_writes_to_stderr() {
        let cue = TerminalBellCue::new();
        assert!(cue
            .play(&AlertSound::Chime(ChimeSpec::default()))
            .await
            .is_ok());
    }
}
