//! Alert fallback domain module

mod chime;

use std::path::PathBuf;

pub use chime::ChimeSpec;

/// Sound played before the alert dialog
#[derive(Debug, Clone, PartialEq)]
pub enum AlertSound {
    /// Generated tone sequence
    Chime(ChimeSpec),
    /// Caller-provided audio file
    File(PathBuf),
}

impl AlertSound {
    /// Configured file if any, otherwise the default chime
    pub fn from_config(sound: Option<&PathBuf>) -> Self {
        match sound {
            Some(path) => Self::File(path.clone()),
            None => Self::Chime(ChimeSpec::default()),
        }
    }
}
