//! Model-View-Presenter primitives.
//!
//! This module provides the view side of the navigation layer: the
//! [`View`] trait every navigable screen implements, the shared
//! [`ViewHandle`] the navigation controller stores, and a ready-made
//! [`BasicView`] for applications that don't need their own type.
//!
//! # Architecture
//!
//! ```text
//! Presenter ──→ View ──→ ViewListener
//!     ↑           │
//!     └── factory ┘
//! ```
//!
//! - **View**: display name, description and an optional navigation callback
//! - **Presenter**: created by an explicit factory when the view is initialized
//! - **ViewEvent**: change notifications fanned out to view listeners

mod presenter;
mod view;

pub use presenter::{PresentedView, Presenter};
pub use view::{BasicView, View, ViewEvent, ViewHandle, ViewListener};
