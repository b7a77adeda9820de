//! Domain layer - Core business logic
//!
//! Contains value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod alert;
pub mod config;
pub mod error;
pub mod notification;
pub mod permission;

// Re-export common types
pub use alert::{AlertSound, ChimeSpec};
pub use config::{AppConfig, NotifierConfig, NotifierSettings};
pub use error::*;
pub use notification::{
    Category, IconOverrides, IconSet, Notification, NotificationHandle, NotificationOptions,
};
pub use permission::Permission;
