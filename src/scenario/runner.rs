use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use super::callback::ScriptedCallback;
use crate::config::{Scenario, Step};
use crate::error::{NavigationError, Result};
use crate::mvp::{BasicView, ViewHandle};
use crate::navigation::{
    DefaultNavigationController, NavigationController, NavigationEvent, NavigationRequest,
    NavigationRequestBuilder, NavigationResult, ViewRegistry,
};

/// What happened when a step ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Navigated(NavigationResult),
    /// Result of a `back` step.
    WentBack(bool),
    /// The request could not be built from the current trail.
    Rejected(NavigationError),
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepOutcome::Navigated(result) => write!(f, "{:?}", result),
            StepOutcome::WentBack(true) => write!(f, "went back"),
            StepOutcome::WentBack(false) => write!(f, "stayed"),
            StepOutcome::Rejected(err) => write!(f, "rejected: {}", err),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StepReport {
    pub step: Step,
    pub outcome: StepOutcome,
    /// Events raised while the step ran, in order.
    pub events: Vec<NavigationEvent>,
    /// Display names of the trail after the step.
    pub trail: Vec<String>,
}

impl StepReport {
    pub fn breadcrumbs(&self) -> String {
        self.trail.join(" > ")
    }
}

/// Owns a controller plus the scenario's views and records every event.
pub struct ScenarioRunner {
    controller: DefaultNavigationController,
    registry: ViewRegistry,
    events: Arc<Mutex<Vec<NavigationEvent>>>,
}

impl ScenarioRunner {
    pub fn new(scenario: &Scenario) -> Result<Self> {
        let mut registry = ViewRegistry::new();
        for config in &scenario.views {
            let view = BasicView::new(config.display_name.clone())
                .with_description(config.description.clone())
                .with_callback(ScriptedCallback::from_config(config));
            registry.register(config.id.clone(), view.into_handle())?;
        }

        let controller = DefaultNavigationController::new();
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        controller.add_listener(Arc::new(move |event: &NavigationEvent| {
            sink.lock().push(event.clone());
        }));

        Ok(Self {
            controller,
            registry,
            events,
        })
    }

    pub fn controller(&self) -> &DefaultNavigationController {
        &self.controller
    }

    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    pub fn run(&mut self, steps: &[Step]) -> Vec<StepReport> {
        steps.iter().map(|step| self.run_step(step)).collect()
    }

    pub fn run_step(&mut self, step: &Step) -> StepReport {
        self.events.lock().clear();

        let outcome = match step {
            Step::Back => StepOutcome::WentBack(self.controller.navigate_back()),
            Step::Clear => StepOutcome::Navigated(self.controller.clear()),
            _ => match self.request_for(step) {
                Ok(request) => StepOutcome::Navigated(self.controller.navigate(&request)),
                Err(err) => StepOutcome::Rejected(err),
            },
        };
        tracing::debug!(step = %step, outcome = %outcome, "step finished");

        StepReport {
            step: step.clone(),
            outcome,
            events: std::mem::take(&mut *self.events.lock()),
            trail: self.trail(),
        }
    }

    pub fn trail(&self) -> Vec<String> {
        self.controller
            .view_stack()
            .iter()
            .map(ViewHandle::display_name)
            .collect()
    }

    fn request_for(&self, step: &Step) -> Result<NavigationRequest> {
        let mut builder = NavigationRequestBuilder::new();
        match step {
            Step::Open { path, params } => {
                builder
                    .params(params.clone())
                    .start_with_empty_path()?
                    .add_views_by_id(&self.registry, path)?;
            }
            Step::Push { views, params } => {
                builder
                    .params(params.clone())
                    .start_with_path_to_current_view(&self.controller)?
                    .add_views_by_id(&self.registry, views)?;
            }
            Step::To { view, params } => {
                let view = self.registry.get(view)?;
                builder
                    .params(params.clone())
                    .start_with_path_to_view(&self.controller, &view)?;
            }
            Step::First { params } => {
                builder
                    .params(params.clone())
                    .start_with_path_to_first_view(&self.controller)?;
            }
            // Handled directly by the controller; no path is ever started.
            Step::Back | Step::Clear => {}
        }
        builder.build()
    }
}
