//! The navigation stack machine.

use std::sync::Arc;

use tracing::{debug, info};

use super::event::{ControllerId, NavigationEvent};
use super::listener::{ListenerRegistry, NavigationListener};
use super::request::{NavigationParams, NavigationRequest};
use crate::mvp::ViewHandle;

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationResult {
    /// The trail now matches the requested path.
    Succeeded,
    /// The current view refused to be detached. Nothing changed.
    Prevented,
    /// Some views were detached, then a view further down refused. The
    /// current view changed, but not to the requested one.
    Interrupted,
}

/// A controller that manages a trail of views.
pub trait NavigationController {
    fn id(&self) -> ControllerId;

    /// Moves the trail to the request's path.
    ///
    /// Views above the first point where trail and path differ are detached
    /// top-down, then the rest of the path is attached in order.
    fn navigate(&mut self, request: &NavigationRequest) -> NavigationResult;

    /// Drops the current view. Clears the controller if only one view is
    /// left. Returns true only if the navigation fully succeeded.
    fn navigate_back(&mut self) -> bool;

    /// Detaches every view, top-down.
    fn clear(&mut self) -> NavigationResult;

    /// The trail, first view first.
    fn view_stack(&self) -> &[ViewHandle];

    fn current_view(&self) -> Option<&ViewHandle> {
        self.view_stack().last()
    }

    fn first_view(&self) -> Option<&ViewHandle> {
        self.view_stack().first()
    }

    fn is_empty(&self) -> bool {
        self.view_stack().is_empty()
    }

    fn contains_more_than_one_view(&self) -> bool {
        self.view_stack().len() > 1
    }

    fn can_navigate_back(&self) -> bool {
        !self.is_empty()
    }

    fn add_listener(&self, listener: Arc<dyn NavigationListener>);

    fn remove_listener(&self, listener: &Arc<dyn NavigationListener>);
}

/// Default [`NavigationController`] implementation.
pub struct DefaultNavigationController {
    id: ControllerId,
    trail: Vec<ViewHandle>,
    listeners: ListenerRegistry,
}

impl DefaultNavigationController {
    pub fn new() -> Self {
        Self {
            id: ControllerId::new(),
            trail: Vec::new(),
            listeners: ListenerRegistry::new(),
        }
    }

    /// Handle to the listener list, e.g. for listeners that register others.
    pub fn listeners(&self) -> ListenerRegistry {
        self.listeners.clone()
    }

    fn transition(&mut self, path: &[ViewHandle], params: &NavigationParams) -> NavigationResult {
        if self.trail.as_slice() == path {
            debug!(controller = %self.id, "already at requested view");
            return NavigationResult::Succeeded;
        }

        let from_view = self.current_view().cloned();
        let divergence = self.index_of_first_difference(path);

        if divergence == self.trail.len() {
            self.attach_remaining(path);
            if let Some(from) = &from_view {
                self.invoke_navigated_from(from);
            }
        } else {
            match self.detach_down_to(divergence) {
                NavigationResult::Succeeded => self.attach_remaining(path),
                NavigationResult::Interrupted => {
                    self.fire_current_view_changed(from_view);
                    self.log_outcome(NavigationResult::Interrupted);
                    return NavigationResult::Interrupted;
                }
                NavigationResult::Prevented => {
                    self.log_outcome(NavigationResult::Prevented);
                    return NavigationResult::Prevented;
                }
            }
        }

        self.invoke_navigated_to(params, from_view.as_ref());
        self.fire_current_view_changed(from_view);
        self.log_outcome(NavigationResult::Succeeded);
        NavigationResult::Succeeded
    }

    /// Index of the first position where trail and path differ. Equals the
    /// trail length when the trail is a prefix of the path.
    fn index_of_first_difference(&self, path: &[ViewHandle]) -> usize {
        self.trail
            .iter()
            .zip(path)
            .position(|(in_trail, in_path)| in_trail != in_path)
            .unwrap_or_else(|| self.trail.len().min(path.len()))
    }

    fn attach_remaining(&mut self, path: &[ViewHandle]) {
        for view in path.iter().skip(self.trail.len()) {
            self.attach(view.clone());
        }
    }

    fn attach(&mut self, view: ViewHandle) {
        self.trail.push(view.clone());
        if let Some(callback) = view.navigation_callback() {
            callback.attached_to_controller(self.id);
        }
        debug!(controller = %self.id, view = %view.display_name(), depth = self.trail.len(), "view attached");
        self.listeners.fire(&NavigationEvent::ViewAttached {
            source: self.id,
            view,
        });
    }

    /// Detaches top-down until only `len` views remain.
    fn detach_down_to(&mut self, len: usize) -> NavigationResult {
        let mut detached_any = false;
        while self.trail.len() > len {
            if !self.detach_topmost() {
                return if detached_any {
                    NavigationResult::Interrupted
                } else {
                    NavigationResult::Prevented
                };
            }
            detached_any = true;
        }
        NavigationResult::Succeeded
    }

    fn detach_topmost(&mut self) -> bool {
        let Some(view) = self.trail.last().cloned() else {
            return false;
        };

        if let Some(callback) = view.navigation_callback() {
            if !callback.detaching_from_controller(self.id) {
                debug!(controller = %self.id, view = %view.display_name(), "view refused detach");
                return false;
            }
        }

        self.trail.pop();
        if let Some(callback) = view.navigation_callback() {
            callback.detached_from_controller(self.id);
        }
        debug!(controller = %self.id, view = %view.display_name(), depth = self.trail.len(), "view detached");
        self.listeners.fire(&NavigationEvent::ViewDetached {
            source: self.id,
            view,
        });
        true
    }

    fn invoke_navigated_to(&self, params: &NavigationParams, from_view: Option<&ViewHandle>) {
        if let Some(current) = self.current_view() {
            if let Some(callback) = current.navigation_callback() {
                callback.navigated_to_view(params, from_view);
            }
        }
    }

    fn invoke_navigated_from(&self, from_view: &ViewHandle) {
        if let (Some(callback), Some(current)) = (from_view.navigation_callback(), self.current_view()) {
            callback.navigated_from_view(current);
        }
    }

    fn fire_current_view_changed(&self, old_view: Option<ViewHandle>) {
        self.listeners.fire(&NavigationEvent::CurrentViewChanged {
            source: self.id,
            old_view,
            new_view: self.current_view().cloned(),
        });
    }

    fn log_outcome(&self, result: NavigationResult) {
        info!(
            controller = %self.id,
            result = ?result,
            current = %self.current_view().map(|v| v.display_name()).unwrap_or_default(),
            depth = self.trail.len(),
            "navigation finished"
        );
    }
}

impl Default for DefaultNavigationController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationController for DefaultNavigationController {
    fn id(&self) -> ControllerId {
        self.id
    }

    fn navigate(&mut self, request: &NavigationRequest) -> NavigationResult {
        self.transition(request.path(), request.params())
    }

    fn navigate_back(&mut self) -> bool {
        match self.trail.len() {
            0 => false,
            1 => self.clear() == NavigationResult::Succeeded,
            len => {
                let path = self.trail[..len - 1].to_vec();
                self.transition(&path, &NavigationParams::new()) == NavigationResult::Succeeded
            }
        }
    }

    fn clear(&mut self) -> NavigationResult {
        self.transition(&[], &NavigationParams::new())
    }

    fn view_stack(&self) -> &[ViewHandle] {
        &self.trail
    }

    fn add_listener(&self, listener: Arc<dyn NavigationListener>) {
        self.listeners.add(listener);
    }

    fn remove_listener(&self, listener: &Arc<dyn NavigationListener>) {
        self.listeners.remove(listener);
    }
}
