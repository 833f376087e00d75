use std::sync::atomic::{AtomicU32, Ordering};

use crate::config::ViewConfig;
use crate::mvp::ViewHandle;
use crate::navigation::{ControllerId, NavigationCallback, NavigationParams};

/// Navigation callback whose detach answers come from a scenario file.
#[derive(Debug)]
pub struct ScriptedCallback {
    view_id: String,
    allow_detach: bool,
    deny_after: Option<u32>,
    detach_queries: AtomicU32,
}

impl ScriptedCallback {
    pub fn new(view_id: impl Into<String>, allow_detach: bool, deny_after: Option<u32>) -> Self {
        Self {
            view_id: view_id.into(),
            allow_detach,
            deny_after,
            detach_queries: AtomicU32::new(0),
        }
    }

    pub fn from_config(config: &ViewConfig) -> Self {
        Self::new(config.id.clone(), config.allow_detach, config.deny_after)
    }

    /// Number of times the controller asked to detach this view.
    pub fn detach_queries(&self) -> u32 {
        self.detach_queries.load(Ordering::SeqCst)
    }
}

impl NavigationCallback for ScriptedCallback {
    fn attached_to_controller(&self, controller: ControllerId) {
        tracing::trace!(view = %self.view_id, %controller, "attached");
    }

    fn detaching_from_controller(&self, controller: ControllerId) -> bool {
        let asked = self.detach_queries.fetch_add(1, Ordering::SeqCst);
        let allowed = self.allow_detach && self.deny_after.map_or(true, |limit| asked < limit);
        tracing::trace!(view = %self.view_id, %controller, allowed, "detach requested");
        allowed
    }

    fn navigated_to_view(&self, params: &NavigationParams, from_view: Option<&ViewHandle>) {
        tracing::trace!(
            view = %self.view_id,
            params = params.len(),
            from = ?from_view.map(|v| v.display_name()),
            "navigated to"
        );
    }
}
