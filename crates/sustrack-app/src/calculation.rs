//! Lifecycle of the single outstanding calculation

use std::time::{Duration, Instant};

use sustrack_core::{ActivityInput, EmissionsResult};

/// What the result panel currently shows.
///
/// A new submission always replaces the previous outcome, so a stale result
/// is never displayed next to a newer error (or the other way round).
#[derive(Debug, Clone, Default)]
pub enum CalculationState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Request in flight
    Pending {
        input: ActivityInput,
        started: Instant,
    },
    Succeeded {
        input: ActivityInput,
        result: EmissionsResult,
    },
    Failed {
        input: ActivityInput,
        error: String,
    },
}

impl CalculationState {
    pub fn is_pending(&self) -> bool {
        matches!(self, CalculationState::Pending { .. })
    }

    /// Begin a calculation. Returns `false` (and changes nothing) when one is
    /// already in flight.
    pub fn start(&mut self, input: ActivityInput) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = CalculationState::Pending {
            input,
            started: Instant::now(),
        };
        true
    }

    /// Record a successful answer. Ignored unless a request is pending.
    pub fn complete(&mut self, result: EmissionsResult) -> bool {
        match std::mem::take(self) {
            CalculationState::Pending { input, .. } => {
                *self = CalculationState::Succeeded { input, result };
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }

    /// Record a failure. Ignored unless a request is pending.
    pub fn fail(&mut self, error: impl Into<String>) -> bool {
        match std::mem::take(self) {
            CalculationState::Pending { input, .. } => {
                *self = CalculationState::Failed {
                    input,
                    error: error.into(),
                };
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }

    pub fn result(&self) -> Option<&EmissionsResult> {
        match self {
            CalculationState::Succeeded { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CalculationState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// The record behind the current state, if anything was submitted
    pub fn input(&self) -> Option<&ActivityInput> {
        match self {
            CalculationState::Idle => None,
            CalculationState::Pending { input, .. }
            | CalculationState::Succeeded { input, .. }
            | CalculationState::Failed { input, .. } => Some(input),
        }
    }

    pub fn elapsed(&self) -> Option<Duration> {
        match self {
            CalculationState::Pending { started, .. } => Some(started.elapsed()),
            _ => None,
        }
    }
}
