//! Replays a [`Scenario`](crate::config::Scenario) against a navigation controller.

mod callback;
mod runner;

pub use callback::ScriptedCallback;
pub use runner::{ScenarioRunner, StepOutcome, StepReport};
