//! Presenters and views that own one.

use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use super::view::{BasicView, View, ViewEvent};
use crate::error::{NavigationError, Result};
use crate::navigation::NavigationCallback;

/// Presentation logic attached to a view.
pub trait Presenter: Send + Sync + 'static {
    /// Called once, right after the presenter has been created.
    fn init(&self) {}
}

type PresenterFactory<P> = Box<dyn FnOnce(&BasicView) -> P + Send>;

/// A [`BasicView`] paired with a presenter built by an explicit factory.
///
/// The presenter does not exist until [`PresentedView::init`] runs the
/// factory. Initialization happens at most once.
pub struct PresentedView<P: Presenter> {
    view: BasicView,
    factory: Mutex<Option<PresenterFactory<P>>>,
    presenter: OnceLock<Arc<P>>,
}

impl<P: Presenter> PresentedView<P> {
    pub fn new<F>(view: BasicView, factory: F) -> Self
    where
        F: FnOnce(&BasicView) -> P + Send + 'static,
    {
        Self {
            view,
            factory: Mutex::new(Some(Box::new(factory))),
            presenter: OnceLock::new(),
        }
    }

    /// Creates and initializes the presenter, then fires [`ViewEvent::Initialized`].
    pub fn init(&self) -> Result<()> {
        let factory = self
            .factory
            .lock()
            .take()
            .ok_or(NavigationError::AlreadyInitialized)?;

        tracing::debug!(view = %self.view.display_name(), "creating presenter");
        let presenter = Arc::new(factory(&self.view));
        presenter.init();
        // The factory slot is emptied exactly once, so the cell is still unset here.
        let _ = self.presenter.set(presenter);

        self.view.fire_view_event(&ViewEvent::Initialized);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.presenter.get().is_some()
    }

    pub fn presenter(&self) -> Result<Arc<P>> {
        self.presenter
            .get()
            .cloned()
            .ok_or(NavigationError::PresenterNotSet)
    }

    pub fn view(&self) -> &BasicView {
        &self.view
    }
}

impl<P: Presenter> View for PresentedView<P> {
    fn display_name(&self) -> String {
        self.view.display_name()
    }

    fn description(&self) -> String {
        self.view.description()
    }

    fn navigation_callback(&self) -> Option<&dyn NavigationCallback> {
        self.view.navigation_callback()
    }
}

impl<P: Presenter> fmt::Debug for PresentedView<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentedView")
            .field("view", &self.view)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
