//! Which topic, if any, is open in the detail view
//!
//! Owned by [`AppState`](crate::state::AppState), one instance per session.

use sustrack_core::prelude::*;
use sustrack_core::TopicRegistry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    selected: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_detail(&self) -> bool {
        self.selected.is_some()
    }

    /// Open `name` in the detail view.
    ///
    /// Fails with [`Error::InvalidTopic`] when `name` is not a registry key,
    /// leaving the current selection untouched.
    pub fn select(&mut self, registry: &TopicRegistry, name: &str) -> Result<()> {
        if !registry.contains(name) {
            return Err(Error::invalid_topic(name));
        }
        if self.get() != Some(name) {
            self.selected = Some(name.to_string());
        }
        Ok(())
    }

    /// Return to the browser. Idempotent.
    pub fn clear(&mut self) {
        self.selected = None;
    }
}
