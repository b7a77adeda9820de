//! Permission acquisition shared by every trigger

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::{BoxFuture, FutureExt, Shared};
use tracing::{debug, warn};

use crate::domain::permission::Permission;

use super::ports::NotificationPlatform;

type PendingRequest = Shared<BoxFuture<'static, Permission>>;

enum GateState {
    Unrequested,
    Requesting(PendingRequest),
    Resolved(Permission),
}

/// Observable phase of the permission state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    Unrequested,
    Requesting,
    Resolved(Permission),
}

/// Permission state machine.
///
/// State machine:
///   UNREQUESTED -> REQUESTING (first ensure while the host flag is default)
///   REQUESTING -> GRANTED | DENIED (request resolved, cached)
///   REQUESTING -> UNREQUESTED (prompt dismissed, may prompt again)
///
/// Callers arriving while a request is in flight await the same request.
#[derive(Clone)]
pub struct PermissionGate {
    platform: Arc<dyn NotificationPlatform>,
    state: Arc<Mutex<GateState>>,
}

impl PermissionGate {
    pub fn new(platform: Arc<dyn NotificationPlatform>) -> Self {
        Self {
            platform,
            state: Arc::new(Mutex::new(GateState::Unrequested)),
        }
    }

    /// Current phase, for diagnostics
    pub fn phase(&self) -> GatePhase {
        match &*self.lock() {
            GateState::Unrequested => GatePhase::Unrequested,
            GateState::Requesting(_) => GatePhase::Requesting,
            GateState::Resolved(permission) => GatePhase::Resolved(*permission),
        }
    }

    /// Resolve the permission, requesting it at most once at a time.
    pub async fn ensure(&self) -> Permission {
        if !self.platform.is_supported() {
            return Permission::Denied;
        }

        let current = self.platform.permission();
        if current.is_terminal() {
            return current;
        }

        let pending = {
            let mut state = self.lock();
            match &*state {
                GateState::Resolved(permission) => return *permission,
                GateState::Requesting(pending) => {
                    debug!("Joining in-flight permission request");
                    pending.clone()
                }
                GateState::Unrequested => {
                    debug!("Requesting notification permission");
                    let pending = self.start_request();
                    *state = GateState::Requesting(pending.clone());
                    pending
                }
            }
        };

        let outcome = pending.clone().await;

        let mut state = self.lock();
        let still_current =
            matches!(&*state, GateState::Requesting(current) if current.ptr_eq(&pending));
        if still_current {
            *state = if outcome.is_terminal() {
                GateState::Resolved(outcome)
            } else {
                GateState::Unrequested
            };
        }

        outcome
    }

    fn start_request(&self) -> PendingRequest {
        let platform = Arc::clone(&self.platform);
        async move {
            match platform.request_permission().await {
                Ok(permission) => permission,
                Err(e) => {
                    warn!("Permission request failed: {}", e);
                    Permission::Denied
                }
            }
        }
        .boxed()
        .shared()
    }

    fn lock(&self) -> MutexGuard<'_, GateState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
