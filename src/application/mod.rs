//! Application layer - Use cases and port interfaces
//!
//! Contains the notification coordinator and the trait definitions
//! for external system interactions.

pub mod coordinator;
pub mod favicon;
pub mod permission;
pub mod ports;

// Re-export use cases
pub use coordinator::{CoordinatorPorts, NotificationCoordinator};
pub use favicon::{detect_favicon, FAVICON_LOOKUPS};
pub use permission::{GatePhase, PermissionGate};
