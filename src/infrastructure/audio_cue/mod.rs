//! Audio cue infrastructure adapters
//!
//! Provides the sound played before the alert dialog.

mod bell;
mod noop;
mod rodio;

pub use bell::TerminalBellCue;
pub use noop::NoOpAudioCue;
pub use rodio::RodioAudioCue;

use std::sync::Arc;

use crate::application::ports::AudioCue;

/// Create the primary audio cue based on whether sound is enabled
pub fn create_audio_cue(enabled: bool) -> Arc<dyn AudioCue> {
    if enabled {
        Arc::new(RodioAudioCue::new())
    } else {
        Arc::new(NoOpAudioCue::new())
    }
}

/// Create the cue tried when the primary one fails
pub fn create_last_resort_cue(enabled: bool) -> Arc<dyn AudioCue> {
    if enabled {
        Arc::new(TerminalBellCue::new())
    } else {
        Arc::new(NoOpAudioCue::new())
    }
}
