//! Views and the identity-compared handles the controller stores.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::navigation::NavigationCallback;

/// A displayable unit managed by a navigation controller.
///
/// Implementors that want to take part in navigation decisions return a
/// callback from [`View::navigation_callback`]. Views without one accept
/// every transition silently.
pub trait View: Send + Sync {
    fn display_name(&self) -> String;

    fn description(&self) -> String {
        String::new()
    }

    fn navigation_callback(&self) -> Option<&dyn NavigationCallback> {
        None
    }
}

/// Shared reference to a view.
///
/// Equality and hashing use the identity of the underlying allocation, never
/// the display name: two views called "Details" are still different views.
#[derive(Clone)]
pub struct ViewHandle(Arc<dyn View>);

impl ViewHandle {
    pub fn new<V: View + 'static>(view: V) -> Self {
        Self(Arc::new(view))
    }

    pub fn display_name(&self) -> String {
        self.0.display_name()
    }

    pub fn description(&self) -> String {
        self.0.description()
    }

    pub fn navigation_callback(&self) -> Option<&dyn NavigationCallback> {
        self.0.navigation_callback()
    }

    /// Returns true if both handles point at the same view.
    pub fn same_view(&self, other: &ViewHandle) -> bool {
        self.addr() == other.addr()
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.0) as *const ()
    }
}

impl<V: View + 'static> From<Arc<V>> for ViewHandle {
    fn from(view: Arc<V>) -> Self {
        Self(view)
    }
}

impl PartialEq for ViewHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same_view(other)
    }
}

impl Eq for ViewHandle {}

impl Hash for ViewHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Debug for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ViewHandle")
            .field(&self.display_name())
            .finish()
    }
}

/// Change notifications emitted by a [`BasicView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    DisplayNameChanged { old: String, new: String },
    DescriptionChanged { old: String, new: String },
    /// The view and its presenter finished initializing.
    Initialized,
}

pub trait ViewListener: Send + Sync {
    fn handle_view_event(&self, event: &ViewEvent);
}

impl<F> ViewListener for F
where
    F: Fn(&ViewEvent) + Send + Sync,
{
    fn handle_view_event(&self, event: &ViewEvent) {
        self(event)
    }
}

/// General purpose view with a mutable display name and description.
///
/// The navigation callback is fixed at construction, so the controller never
/// has to look it up dynamically.
pub struct BasicView {
    display_name: RwLock<String>,
    description: RwLock<String>,
    callback: Option<Box<dyn NavigationCallback>>,
    listeners: Mutex<Vec<Arc<dyn ViewListener>>>,
}

impl BasicView {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: RwLock::new(display_name.into()),
            description: RwLock::new(String::new()),
            callback: None,
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        *self.description.write() = description.into();
        self
    }

    pub fn with_callback<C: NavigationCallback + 'static>(mut self, callback: C) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Wraps the view into a handle for use with a controller.
    pub fn into_handle(self) -> ViewHandle {
        ViewHandle::new(self)
    }

    pub fn set_display_name(&self, display_name: impl Into<String>) {
        let new = display_name.into();
        let old = std::mem::replace(&mut *self.display_name.write(), new.clone());
        if old != new {
            self.fire_view_event(&ViewEvent::DisplayNameChanged { old, new });
        }
    }

    pub fn set_description(&self, description: impl Into<String>) {
        let new = description.into();
        let old = std::mem::replace(&mut *self.description.write(), new.clone());
        if old != new {
            self.fire_view_event(&ViewEvent::DescriptionChanged { old, new });
        }
    }

    pub fn add_listener(&self, listener: Arc<dyn ViewListener>) {
        self.listeners.lock().push(listener);
    }

    pub fn remove_listener(&self, listener: &Arc<dyn ViewListener>) {
        let mut listeners = self.listeners.lock();
        let target = Arc::as_ptr(listener) as *const ();
        if let Some(pos) = listeners
            .iter()
            .position(|l| Arc::as_ptr(l) as *const () == target)
        {
            listeners.remove(pos);
        }
    }

    /// Notifies a snapshot of the registered listeners.
    pub fn fire_view_event(&self, event: &ViewEvent) {
        let snapshot = self.listeners.lock().clone();
        tracing::trace!(?event, listeners = snapshot.len(), "firing view event");
        for listener in snapshot {
            listener.handle_view_event(event);
        }
    }
}

impl View for BasicView {
    fn display_name(&self) -> String {
        self.display_name.read().clone()
    }

    fn description(&self) -> String {
        self.description.read().clone()
    }

    fn navigation_callback(&self) -> Option<&dyn NavigationCallback> {
        self.callback.as_deref()
    }
}

impl fmt::Debug for BasicView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicView")
            .field("display_name", &*self.display_name.read())
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_compare_by_identity() {
        let a = BasicView::new("Details").into_handle();
        let b = BasicView::new("Details").into_handle();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn handle_from_arc_shares_identity() {
        let view = Arc::new(BasicView::new("Home"));
        let first = ViewHandle::from(view.clone());
        let second = ViewHandle::from(view);
        assert!(first.same_view(&second));
    }

    #[test]
    fn setting_display_name_fires_change_event() {
        let view = BasicView::new("Old");
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        view.add_listener(Arc::new(move |e: &ViewEvent| sink.lock().push(e.clone())));

        view.set_display_name("New");
        view.set_display_name("New");

        assert_eq!(view.display_name(), "New");
        assert_eq!(
            *seen.lock(),
            vec![ViewEvent::DisplayNameChanged {
                old: "Old".to_string(),
                new: "New".to_string(),
            }]
        );
    }

    #[test]
    fn setting_description_fires_change_event() {
        let view = BasicView::new("Orders").with_description("All orders");
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        view.add_listener(Arc::new(move |e: &ViewEvent| sink.lock().push(e.clone())));

        view.set_description("Open orders");
        view.set_description("Open orders");

        assert_eq!(view.description(), "Open orders");
        assert_eq!(
            *seen.lock(),
            vec![ViewEvent::DescriptionChanged {
                old: "All orders".to_string(),
                new: "Open orders".to_string(),
            }]
        );
    }

    #[test]
    fn removed_listener_is_not_notified() {
        let view = BasicView::new("Home").with_description("Start page");
        let seen = Arc::new(Mutex::new(0usize));
        let sink = seen.clone();
        let listener: Arc<dyn ViewListener> = Arc::new(move |_: &ViewEvent| *sink.lock() += 1);
        view.add_listener(listener.clone());
        view.remove_listener(&listener);

        view.set_description("Landing page");

        assert_eq!(*seen.lock(), 0);
        assert_eq!(view.description(), "Landing page");
    }

    #[test]
    fn view_without_callback_reports_none() {
        let view = BasicView::new("Plain");
        assert!(view.navigation_callback().is_none());
    }
}
