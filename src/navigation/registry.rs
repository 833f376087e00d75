//! Lookup of views by string id.

use std::collections::HashMap;

use crate::error::{NavigationError, Result};
use crate::mvp::ViewHandle;

/// Maps view ids to views, so navigation code can refer to screens without
/// holding their handles directly.
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    views: HashMap<String, ViewHandle>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `view` under `id`, replacing any view previously registered
    /// under the same id.
    pub fn register(&mut self, id: impl Into<String>, view: ViewHandle) -> Result<()> {
        let id = id.into();
        if id.is_empty() {
            return Err(NavigationError::InvalidViewId);
        }
        if let Some(previous) = self.views.insert(id.clone(), view) {
            tracing::debug!(id = %id, previous = %previous.display_name(), "view replaced");
        }
        Ok(())
    }

    pub fn unregister(&mut self, id: &str) -> Option<ViewHandle> {
        self.views.remove(id)
    }

    pub fn get(&self, id: &str) -> Result<ViewHandle> {
        self.views
            .get(id)
            .cloned()
            .ok_or_else(|| NavigationError::no_such_view(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.views.contains_key(id)
    }

    /// Reverse lookup by view identity.
    pub fn id_of(&self, view: &ViewHandle) -> Option<&str> {
        self.views
            .iter()
            .find(|(_, v)| v.same_view(view))
            .map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
