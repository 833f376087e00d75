//! Navigation requests and the builder used to create them.

use std::collections::{HashMap, HashSet};

use serde_json::Value;

use super::controller::NavigationController;
use super::registry::ViewRegistry;
use crate::error::{NavigationError, Result};
use crate::mvp::ViewHandle;

/// User-defined parameters delivered to the destination view.
pub type NavigationParams = HashMap<String, Value>;

/// Immutable description of the trail a controller should end up with.
///
/// The last view of the path is the destination. Requests are created with
/// [`NavigationRequestBuilder`], which guarantees a non-empty path without
/// duplicate views.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationRequest {
    path: Vec<ViewHandle>,
    params: NavigationParams,
}

impl NavigationRequest {
    pub fn path(&self) -> &[ViewHandle] {
        &self.path
    }

    pub fn params(&self) -> &NavigationParams {
        &self.params
    }

    pub fn destination(&self) -> Option<&ViewHandle> {
        self.path.last()
    }
}

/// Builds a [`NavigationRequest`].
///
/// Set parameters with [`param`](Self::param), start the path with exactly one
/// of the `start_with_*` methods, extend it with `add_view*`, then call
/// [`build`](Self::build):
///
/// ```
/// use viewstack::mvp::BasicView;
/// use viewstack::navigation::{
///     DefaultNavigationController, NavigationController, NavigationRequestBuilder,
///     NavigationResult,
/// };
///
/// let mut controller = DefaultNavigationController::new();
/// let home = BasicView::new("Home").into_handle();
///
/// let request = NavigationRequestBuilder::new()
///     .param("greeting", "hello")
///     .start_with_empty_path()?
///     .add_view(home.clone())?
///     .build()?;
///
/// assert_eq!(controller.navigate(&request), NavigationResult::Succeeded);
/// assert_eq!(controller.current_view(), Some(&home));
/// # Ok::<(), viewstack::NavigationError>(())
/// ```
#[derive(Debug, Default)]
pub struct NavigationRequestBuilder {
    path: Option<Vec<ViewHandle>>,
    params: NavigationParams,
}

impl NavigationRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn params(&mut self, params: NavigationParams) -> &mut Self {
        self.params.extend(params);
        self
    }

    /// Starts from the trail minus its current view, i.e. a "go back" path.
    pub fn start_with_path_to_previous_view<C>(&mut self, controller: &C) -> Result<&mut Self>
    where
        C: NavigationController + ?Sized,
    {
        self.verify_not_started()?;
        let stack = controller.view_stack();
        if stack.len() < 2 {
            return Err(NavigationError::NotEnoughViews {
                required: 2,
                actual: stack.len(),
            });
        }
        self.start(stack[..stack.len() - 1].to_vec())
    }

    /// Starts from the first view only, i.e. a "go home" path.
    pub fn start_with_path_to_first_view<C>(&mut self, controller: &C) -> Result<&mut Self>
    where
        C: NavigationController + ?Sized,
    {
        self.verify_not_started()?;
        let first = controller.first_view().ok_or(NavigationError::EmptyTrail)?;
        self.start(vec![first.clone()])
    }

    /// Starts from the whole trail, for pushing new views on top of it.
    pub fn start_with_path_to_current_view<C>(&mut self, controller: &C) -> Result<&mut Self>
    where
        C: NavigationController + ?Sized,
    {
        self.verify_not_started()?;
        self.start(controller.view_stack().to_vec())
    }

    /// Starts from the trail up to and including `view`.
    pub fn start_with_path_to_view<C>(&mut self, controller: &C, view: &ViewHandle) -> Result<&mut Self>
    where
        C: NavigationController + ?Sized,
    {
        self.verify_not_started()?;
        let stack = controller.view_stack();
        let end = stack
            .iter()
            .position(|v| v.same_view(view))
            .ok_or_else(|| NavigationError::not_in_trail(view.display_name()))?;
        self.start(stack[..=end].to_vec())
    }

    /// Starts with an empty path. At least one view must be added before building.
    pub fn start_with_empty_path(&mut self) -> Result<&mut Self> {
        self.verify_not_started()?;
        self.start(Vec::new())
    }

    pub fn add_view(&mut self, view: ViewHandle) -> Result<&mut Self> {
        self.path_mut()?.push(view);
        Ok(self)
    }

    pub fn add_views<I>(&mut self, views: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = ViewHandle>,
    {
        self.path_mut()?.extend(views);
        Ok(self)
    }

    pub fn add_view_by_id(&mut self, registry: &ViewRegistry, id: &str) -> Result<&mut Self> {
        let view = registry.get(id)?;
        self.add_view(view)
    }

    /// Appends the views registered under `ids`. Nothing is appended if any
    /// id is unknown.
    pub fn add_views_by_id<I, S>(&mut self, registry: &ViewRegistry, ids: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let views = ids
            .into_iter()
            .map(|id| registry.get(id.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        self.add_views(views)
    }

    /// Creates the request. The builder keeps its state, so the same request
    /// can be built again.
    pub fn build(&self) -> Result<NavigationRequest> {
        let path = self.path.as_ref().ok_or(NavigationError::PathNotStarted)?;
        if path.is_empty() {
            return Err(NavigationError::EmptyPath);
        }

        let mut seen = HashSet::with_capacity(path.len());
        if let Some(dup) = path.iter().find(|v| !seen.insert(*v)) {
            return Err(NavigationError::DuplicateView {
                view: dup.display_name(),
            });
        }

        Ok(NavigationRequest {
            path: path.clone(),
            params: self.params.clone(),
        })
    }

    fn verify_not_started(&self) -> Result<()> {
        if self.path.is_some() {
            return Err(NavigationError::PathAlreadyStarted);
        }
        Ok(())
    }

    fn start(&mut self, initial: Vec<ViewHandle>) -> Result<&mut Self> {
        self.path = Some(initial);
        Ok(self)
    }

    fn path_mut(&mut self) -> Result<&mut Vec<ViewHandle>> {
        self.path.as_mut().ok_or(NavigationError::PathNotStarted)
    }
}
