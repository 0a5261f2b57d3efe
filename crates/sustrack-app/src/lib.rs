//! sustrack-app - Application state and orchestration for Sustainability Tracker
//!
//! This crate implements the TEA (The Elm Architecture) pattern: [`AppState`]
//! is the model, [`handler::update`] the only place state changes, and
//! [`UpdateAction`]s are executed by [`actions`] as background tasks that
//! report back through the message channel. Configuration loading lives in
//! [`config`].

pub mod actions;
pub mod calculation;
pub mod config;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod view_state;

// Re-export primary types
pub use calculation::CalculationState;
pub use form::{ActivityFormState, FieldInput};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{GridMove, Message};
pub use state::{AppPhase, AppState, Panel};
pub use view_state::ViewState;
