//! Stack-based view navigation.
//!
//! A [`NavigationController`] owns an ordered trail of views. Callers build a
//! [`NavigationRequest`] describing the trail they want, and the controller
//! works out the minimal detach/attach delta, asking each view on the way
//! whether it may be detached.
//!
//! ```text
//! NavigationRequestBuilder ──→ NavigationRequest ──→ NavigationController
//!                                                        │
//!                         NavigationCallback ←───────────┤
//!                         NavigationListener ←───────────┘
//! ```

mod callback;
mod controller;
mod event;
mod listener;
mod registry;
mod request;

pub use callback::NavigationCallback;
pub use controller::{DefaultNavigationController, NavigationController, NavigationResult};
pub use event::{ControllerId, NavigationEvent};
pub use listener::{ListenerRegistry, NavigationListener};
pub use registry::ViewRegistry;
pub use request::{NavigationParams, NavigationRequest, NavigationRequestBuilder};
