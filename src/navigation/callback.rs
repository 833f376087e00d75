//! Optional per-view hooks invoked by the navigation controller.

use super::event::ControllerId;
use super::request::NavigationParams;
use crate::mvp::ViewHandle;

/// Callback a view exposes to take part in navigation.
///
/// Every method has a default, so implementors override only what they
/// care about. The default detach query allows the detach.
pub trait NavigationCallback: Send + Sync {
    /// The view was pushed onto the controller's trail.
    fn attached_to_controller(&self, controller: ControllerId) {
        let _ = controller;
    }

    /// Asked before the view is removed from the trail. Returning false
    /// stops the navigation at this view.
    fn detaching_from_controller(&self, controller: ControllerId) -> bool {
        let _ = controller;
        true
    }

    /// The view was removed from the trail.
    fn detached_from_controller(&self, controller: ControllerId) {
        let _ = controller;
    }

    /// The view became the current view. `from_view` is the view that was
    /// current before the navigation, or `None` if the trail was empty.
    fn navigated_to_view(&self, params: &NavigationParams, from_view: Option<&ViewHandle>) {
        let _ = (params, from_view);
    }

    /// New views were pushed on top of this one; `to_view` is the new current view.
    fn navigated_from_view(&self, to_view: &ViewHandle) {
        let _ = to_view;
    }
}
