use std::fmt;

use serde::{Deserialize, Serialize};

use crate::navigation::NavigationParams;

/// A replayable navigation session: the views that exist and the steps to run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub views: Vec<ViewConfig>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Declaration of one view in a scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Id used by steps to refer to the view (e.g., "orders").
    pub id: String,
    /// Name shown in breadcrumbs (e.g., "Orders").
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    /// Whether the view lets the controller detach it (default: true).
    #[serde(default = "default_allow_detach")]
    pub allow_detach: bool,
    /// Allow this many detach queries, then refuse every later one.
    #[serde(default)]
    pub deny_after: Option<u32>,
}

fn default_allow_detach() -> bool {
    true
}

impl ViewConfig {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            description: String::new(),
            allow_detach: default_allow_detach(),
            deny_after: None,
        }
    }
}

/// One navigation step. Each variant maps onto a request-builder start point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Replace the trail with `path` (empty-path start).
    Open {
        path: Vec<String>,
        #[serde(default)]
        params: NavigationParams,
    },
    /// Push `views` on top of the current trail.
    Push {
        views: Vec<String>,
        #[serde(default)]
        params: NavigationParams,
    },
    /// Go back to a view already in the trail.
    To {
        view: String,
        #[serde(default)]
        params: NavigationParams,
    },
    /// Go back to the first view.
    First {
        #[serde(default)]
        params: NavigationParams,
    },
    Back,
    Clear,
}

impl Step {
    /// Ids of every view the step refers to.
    pub fn view_ids(&self) -> Vec<&str> {
        match self {
            Step::Open { path: ids, .. } | Step::Push { views: ids, .. } => {
                ids.iter().map(String::as_str).collect()
            }
            Step::To { view, .. } => vec![view.as_str()],
            Step::First { .. } | Step::Back | Step::Clear => Vec::new(),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Open { path, .. } => write!(f, "open {}", path.join(" > ")),
            Step::Push { views, .. } => write!(f, "push {}", views.join(" > ")),
            Step::To { view, .. } => write!(f, "to {}", view),
            Step::First { .. } => write!(f, "first"),
            Step::Back => write!(f, "back"),
            Step::Clear => write!(f, "clear"),
        }
    }
}
