//! Application state (Model in TEA pattern)

use std::path::{Path, PathBuf};

use sustrack_core::{AssetCatalog, Topic, TopicRegistry};

use crate::calculation::CalculationState;
use crate::config::Settings;
use crate::form::ActivityFormState;
use crate::view_state::ViewState;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which panel receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    /// Topic browser or topic detail, depending on [`ViewState`]
    #[default]
    Topics,
    /// Activity form
    Form,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    pub settings: Settings,

    /// Directory image paths and the config file are resolved against
    pub base_dir: PathBuf,

    pub registry: TopicRegistry,

    /// Probed once at startup
    pub assets: AssetCatalog,

    pub view_state: ViewState,

    pub focus: Panel,

    /// Registry index of the highlighted card
    pub topic_cursor: usize,

    pub form: ActivityFormState,

    pub calculation: CalculationState,

    /// Endpoint shown in the header
    pub endpoint_label: String,

    /// Ticks since startup, drives the spinner
    pub tick_count: u64,
}

impl AppState {
    /// Build the state for a base directory: built-in topics, probed images
    pub fn new(base_dir: impl Into<PathBuf>, settings: Settings) -> Self {
        let base_dir = base_dir.into();
        let registry = TopicRegistry::builtin(&settings.images_dir(&base_dir));
        let assets = AssetCatalog::probe(&registry);
        Self::with_parts(base_dir, settings, registry, assets)
    }

    pub fn with_parts(
        base_dir: PathBuf,
        settings: Settings,
        registry: TopicRegistry,
        assets: AssetCatalog,
    ) -> Self {
        let endpoint_label = settings.service.endpoint.clone();
        Self {
            phase: AppPhase::Running,
            settings,
            base_dir,
            registry,
            assets,
            view_state: ViewState::new(),
            focus: Panel::Topics,
            topic_cursor: 0,
            form: ActivityFormState::new(),
            calculation: CalculationState::Idle,
            endpoint_label,
            tick_count: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Topic under the grid cursor
    pub fn highlighted_topic(&self) -> Option<&Topic> {
        self.registry.get_index(self.topic_cursor)
    }

    /// Topic open in the detail view
    pub fn selected_topic(&self) -> Option<&Topic> {
        self.view_state
            .get()
            .and_then(|name| self.registry.get(name))
    }

    pub fn topic_columns(&self) -> usize {
        self.settings.ui.columns()
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}
