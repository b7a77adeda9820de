//! Audio cue port for the alert fallback
//!
//! Plays the sound that precedes the alert dialog.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::alert::AlertSound;

/// Errors that can occur during audio cue playback
#[derive(Error, Debug)]
pub enum AudioCueError {
    /// Failed to play the audio cue
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),

    /// No audio output device available
    #[error("Audio device not available: {0}")]
    DeviceNotAvailable(String),
}

/// Port trait for audio cue playback
#[async_trait]
pub trait AudioCue: Send + Sync {
    /// Start playing a sound.
    ///
    /// Returns once playback has started; callers are not blocked for the
    /// length of the sound.
    async fn play(&self, sound: &AlertSound) -> Result<(), AudioCueError>;
}
