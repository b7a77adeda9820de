//! Nudge - desktop notification coordinator
//!
//! This crate shows desktop notifications on behalf of a source (a page or
//! a tool), handling permission, icon selection, suppression while the
//! source is in front of the user, and an audible alert dialog fallback.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Notification options, categories and icons, permission,
//!   chime parameters, configuration and errors
//! - **Application**: The notification coordinator, the permission gate,
//!   favicon detection and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (notify-rust, notify-send,
//!   rodio, zenity, HTML head parsing, XDG config)
//! - **CLI**: Command-line interface and argument parsing

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
