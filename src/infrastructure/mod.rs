//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with notify-rust, rodio, zenity, HTML documents, etc.

pub mod audio_cue;
pub mod config;
pub mod dialog;
pub mod notification;
pub mod source;

// Re-export adapters
pub use audio_cue::{
    create_audio_cue, create_last_resort_cue, NoOpAudioCue, RodioAudioCue, TerminalBellCue,
};
pub use config::XdgConfigStore;
pub use dialog::{create_dialog, TerminalDialog, ZenityDialog};
pub use notification::{create_platform, NotifyRustPlatform, NotifySendPlatform};
pub use source::{HtmlHeadMetadata, NoDocument, StaticVisibility};
