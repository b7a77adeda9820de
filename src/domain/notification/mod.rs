//! Notification domain module

mod category;
mod icon;
mod options;
mod tag;

pub use category::{Category, ALL_CATEGORIES};
pub use icon::{builtin_icon, resolve_icon, svg_data_uri, IconOverrides, IconSet};
pub use options::{
    Direction, Notification, NotificationEvent, NotificationEventKind, NotificationHandle,
    NotificationHook, NotificationHooks, NotificationOptions, VibratePattern,
};
pub use tag::TagGenerator;
