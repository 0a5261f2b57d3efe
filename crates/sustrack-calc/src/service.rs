//! Calculation service abstraction
//!
//! The TUI and headless mode both talk to the remote calculator through this
//! trait, so tests can swap in a fake without opening sockets.

use sustrack_core::prelude::*;
use sustrack_core::{ActivityInput, EmissionsResult};

/// One-shot emissions calculation
#[trait_variant::make(CalculationService: Send)]
pub trait LocalCalculationService {
    /// Submit the activity record once and decode the answer.
    ///
    /// No retries: any transport, status or body problem is returned as a
    /// remote-failure [`Error`].
    async fn calculate(&self, input: &ActivityInput) -> Result<EmissionsResult>;
}
