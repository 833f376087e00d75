//! Error types for caller misuse of the navigation API.
//!
//! Refusing to navigate is not an error: it is reported through
//! [`NavigationResult`](crate::navigation::NavigationResult).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NavigationError>;

/// Programmer errors raised by the request builder, the view registry and
/// the MVP helpers. None of these are recoverable at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("the path must contain at least one view")]
    EmptyPath,

    #[error("a path has already been started on this builder")]
    PathAlreadyStarted,

    #[error("no path has been started on this builder")]
    PathNotStarted,

    #[error("not enough views in controller: need {required}, have {actual}")]
    NotEnoughViews { required: usize, actual: usize },

    #[error("controller is empty, cannot start from the first view")]
    EmptyTrail,

    #[error("view '{view}' is not in the controller trail")]
    ViewNotInTrail { view: String },

    #[error("view '{view}' appears more than once in the path")]
    DuplicateView { view: String },

    #[error("no view registered with id '{id}'")]
    NoSuchView { id: String },

    #[error("view id must not be empty")]
    InvalidViewId,

    #[error("view has already been initialized")]
    AlreadyInitialized,

    #[error("presenter has not been created yet")]
    PresenterNotSet,
}

impl NavigationError {
    pub fn not_in_trail(view: impl Into<String>) -> Self {
        Self::ViewNotInTrail { view: view.into() }
    }

    pub fn no_such_view(id: impl Into<String>) -> Self {
        Self::NoSuchView { id: id.into() }
    }

    /// Whether the error reports builder or view misuse, as opposed to an
    /// unknown view id.
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            Self::EmptyPath
                | Self::PathAlreadyStarted
                | Self::PathNotStarted
                | Self::NotEnoughViews { .. }
                | Self::EmptyTrail
                | Self::ViewNotInTrail { .. }
                | Self::DuplicateView { .. }
                | Self::AlreadyInitialized
                | Self::PresenterNotSet
        )
    }
}
