//! Fan-out of navigation events to registered listeners.

use std::sync::Arc;

use parking_lot::Mutex;

use super::event::NavigationEvent;

pub trait NavigationListener: Send + Sync {
    fn handle_navigation_event(&self, event: &NavigationEvent);
}

impl<F> NavigationListener for F
where
    F: Fn(&NavigationEvent) + Send + Sync,
{
    fn handle_navigation_event(&self, event: &NavigationEvent) {
        self(event)
    }
}

/// Shared list of listeners.
///
/// Cloning yields another handle to the same list, so a listener may keep a
/// handle and add or remove listeners while an event is being dispatched.
/// Such changes take effect from the next event on.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    inner: Arc<Mutex<Vec<Arc<dyn NavigationListener>>>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener. Registering the same listener twice delivers
    /// every event to it twice.
    pub fn add(&self, listener: Arc<dyn NavigationListener>) {
        self.inner.lock().push(listener);
    }

    /// Removes one registration of `listener`. Returns false if it was not registered.
    pub fn remove(&self, listener: &Arc<dyn NavigationListener>) -> bool {
        let target = addr(listener);
        let mut listeners = self.inner.lock();
        match listeners.iter().position(|l| addr(l) == target) {
            Some(pos) => {
                listeners.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Delivers `event` to the listeners registered at the time of the call.
    pub fn fire(&self, event: &NavigationEvent) {
        let snapshot = self.inner.lock().clone();
        for listener in snapshot {
            listener.handle_navigation_event(event);
        }
    }
}

fn addr(listener: &Arc<dyn NavigationListener>) -> *const () {
    Arc::as_ptr(listener) as *const ()
}
