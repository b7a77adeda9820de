//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod audio_cue;
pub mod config;
pub mod dialog;
pub mod notification;
pub mod source;

// Re-export common types
pub use audio_cue::{AudioCue, AudioCueError};
pub use config::ConfigStore;
pub use dialog::{AlertDialog, DialogError};
pub use notification::{NotificationError, NotificationPlatform};
pub use source::{DocumentMetadata, Visibility};
