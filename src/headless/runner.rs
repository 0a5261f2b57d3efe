//! Headless mode runner - one submission, no TUI

use std::io::Write;

use sustrack_calc::CalculationService;
use sustrack_core::prelude::*;
use sustrack_core::{ActivityInput, EmissionsResult};

use super::HeadlessEvent;

/// Submit `input` once and write `submitted` then `result` or `error` events.
///
/// Returns the calculation outcome so the caller can pick an exit code.
pub async fn run_headless<S, W>(
    service: &S,
    endpoint: &str,
    input: ActivityInput,
    out: &mut W,
) -> Result<EmissionsResult>
where
    S: CalculationService,
    W: Write,
{
    info!("Headless calculation against {}", endpoint);
    HeadlessEvent::submitted(endpoint, input).write_to(out)?;

    match service.calculate(&input).await {
        Ok(result) => {
            HeadlessEvent::result(result.clone()).write_to(out)?;
            Ok(result)
        }
        Err(e) => {
            error!("Headless calculation failed: {}", e);
            HeadlessEvent::error(&e).write_to(out)?;
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sustrack_calc::test_utils::{driving_sample, FakeCalculationService};

    fn events(out: &[u8]) -> Vec<serde_json::Value> {
        String::from_utf8(out.to_vec())
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_success_emits_submitted_then_result() {
        let service = FakeCalculationService::succeeding(driving_sample());
        let mut out = Vec::new();

        let result = run_headless(&service, "http://x/calculate", ActivityInput::default(), &mut out)
            .await
            .unwrap();

        assert_eq!(result, driving_sample());
        let events = events(&out);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["event"], "submitted");
        assert_eq!(events[1]["event"], "result");
        assert_eq!(service.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_emits_one_error() {
        let service = FakeCalculationService::failing("connection refused");
        let mut out = Vec::new();

        let err = run_headless(&service, "http://x/calculate", ActivityInput::default(), &mut out)
            .await
            .unwrap_err();

        assert!(err.is_remote_failure());
        let events = events(&out);
        assert_eq!(events.len(), 2);
        assert_eq!(events[1]["event"], "error");
        assert!(events[1]["message"]
            .as_str()
            .unwrap()
            .contains("connection refused"));
    }
}
