//! Stack-based view navigation for Model-View-Presenter applications.
//!
//! The [`navigation`] module holds the controller that owns the trail of
//! views, the request builder and the event plumbing. [`mvp`] provides the
//! view and presenter types the controller works with.

pub mod config;
pub mod error;
pub mod logging;
pub mod mvp;
pub mod navigation;
pub mod scenario;

pub use error::NavigationError;
