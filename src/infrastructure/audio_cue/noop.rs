//! No-op audio cue adapter
//!
//! Used when alert sounds are disabled.

use async_trait::async_trait;

use crate::application::ports::{AudioCue, AudioCueError};
use crate::domain::alert::AlertSound;

/// No-op audio cue that does nothing
pub struct NoOpAudioCue;

impl NoOpAudioCue {
    /// Create a new no-op audio cue
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpAudioCue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioCue for NoOpAudioCue {
    async fn play(&self, _sound: &AlertSound) -> Result<(), AudioCueError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::alert::ChimeSpec;

    #[tokio::test]
    async fn noop_returns_ok() {
        let cue = NoOpAudioCue::new();
        assert!(cue.play(&AlertSound::Chime(ChimeSpec::default())).await.is_ok());
        assert!(cue.play(&AlertSound::File("missing.ogg".into())).await.is_ok());
    }
}
