//! Fixed visibility adapter

use crate::application::ports::Visibility;

/// Visibility decided up front by the caller (e.g. a CLI flag)
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticVisibility {
    active: bool,
}

impl StaticVisibility {
    pub fn new(active: bool) -> Self {
        Self { active }
    }
}

impl Visibility for StaticVisibility {
    fn is_source_active(&self) -> bool {
        self.active
    }
}
