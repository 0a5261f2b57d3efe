//! Headless mode - NDJSON event output instead of the TUI
//!
//! Submits one activity record and reports progress as newline-delimited
//! JSON on stdout, one event per line, each tagged with an `event` field.
//!
//! # Example Output
//!
//! ```json
//! {"event":"submitted","endpoint":"http://127.0.0.1:8000/calculate","input":{"km_driven":12.5,...},"timestamp":1704700001000}
//! {"event":"result","emissions":[{"category":"driving","kg_co2":12.5}],"total_carbon":12.5,...,"timestamp":1704700001200}
//! ```

pub mod runner;

pub use runner::run_headless;

use chrono::Utc;
use serde::Serialize;
use std::io::Write;

use sustrack_core::prelude::*;
use sustrack_core::{ActivityInput, EmissionsResult};

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Request about to be sent
    Submitted {
        endpoint: String,
        input: ActivityInput,
        timestamp: i64,
    },

    /// Calculation decoded successfully
    Result {
        #[serde(flatten)]
        result: EmissionsResult,
        timestamp: i64,
    },

    /// Calculation or setup failed
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as one JSON line and flush
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json).context("writing headless event")?;
        out.flush().context("flushing headless output")?;
        Ok(())
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn submitted(endpoint: &str, input: ActivityInput) -> Self {
        Self::Submitted {
            endpoint: endpoint.to_string(),
            input,
            timestamp: Self::now(),
        }
    }

    pub fn result(result: EmissionsResult) -> Self {
        Self::Result {
            result,
            timestamp: Self::now(),
        }
    }

    pub fn error(error: &Error) -> Self {
        Self::Error {
            message: error.to_string(),
            fatal: error.is_fatal(),
            timestamp: Self::now(),
        }
    }
}
