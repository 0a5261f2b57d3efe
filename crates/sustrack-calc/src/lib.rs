//! # sustrack-calc - Calculation Service Client
//!
//! Talks to the external emissions calculator: serializes an
//! [`ActivityInput`](sustrack_core::ActivityInput), POSTs it once, and
//! decodes the loosely shaped JSON answer into an
//! [`EmissionsResult`](sustrack_core::EmissionsResult).
//!
//! Depends on [`sustrack_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! - [`CalculationService`] - Async trait the app layer depends on
//! - [`HttpCalculationClient`] - reqwest-backed implementation
//! - [`decode_response()`] - Defensive response decoding (missing keys become defaults)

pub mod client;
pub mod protocol;
pub mod service;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Public API re-exports
pub use client::HttpCalculationClient;
pub use protocol::{decode_response, decode_value};
pub use service::{CalculationService, LocalCalculationService};
