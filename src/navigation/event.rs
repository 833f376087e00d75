//! Events raised by navigation controllers.

use std::fmt;

use uuid::Uuid;

use crate::mvp::ViewHandle;

/// Identifies the controller that raised an event or invoked a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControllerId(Uuid);

impl ControllerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ControllerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    /// A view was pushed onto the trail.
    ViewAttached { source: ControllerId, view: ViewHandle },
    /// A view was removed from the trail.
    ViewDetached { source: ControllerId, view: ViewHandle },
    /// Net effect of one navigation. Fired at most once per operation.
    CurrentViewChanged {
        source: ControllerId,
        old_view: Option<ViewHandle>,
        new_view: Option<ViewHandle>,
    },
}

impl NavigationEvent {
    pub fn source(&self) -> ControllerId {
        match self {
            Self::ViewAttached { source, .. }
            | Self::ViewDetached { source, .. }
            | Self::CurrentViewChanged { source, .. } => *source,
        }
    }
}

impl fmt::Display for NavigationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn name(view: &Option<ViewHandle>) -> String {
            view.as_ref()
                .map(|v| v.display_name())
                .unwrap_or_else(|| "-".to_string())
        }

        match self {
            Self::ViewAttached { view, .. } => write!(f, "attached {}", view.display_name()),
            Self::ViewDetached { view, .. } => write!(f, "detached {}", view.display_name()),
            Self::CurrentViewChanged {
                old_view, new_view, ..
            } => write!(f, "current {} -> {}", name(old_view), name(new_view)),
        }
    }
}
