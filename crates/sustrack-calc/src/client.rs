//! HTTP client for the remote emissions calculator

use std::error::Error as StdError;

use sustrack_core::prelude::*;
use sustrack_core::{ActivityInput, EmissionsResult};
use url::Url;

use crate::protocol;
use crate::service::CalculationService;

/// Longest error body echoed back to the user
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Posts [`ActivityInput`] records to a configured endpoint.
///
/// Uses the transport's default timeout behaviour; a hung service stalls
/// the pending calculation until the connection gives up.
#[derive(Debug, Clone)]
pub struct HttpCalculationClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpCalculationClient {
    pub fn new(endpoint: Url) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("sustrack/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(http_error)?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn post(&self, input: &ActivityInput) -> Result<EmissionsResult> {
        input.validate()?;

        debug!("POST {} {:?}", self.endpoint, input);
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(input)
            .send()
            .await
            .map_err(http_error)?;

        let status = response.status();
        let body = response.text().await.map_err(http_error)?;

        if !status.is_success() {
            warn!("Calculation service returned {}", status);
            return Err(Error::remote_status(
                status.as_u16(),
                truncate_body(&body),
            ));
        }

        let result = protocol::decode_response(&body)?;
        info!(
            "Calculation succeeded: {} categories, total {}",
            result.emissions.len(),
            result.total_carbon
        );
        Ok(result)
    }
}

impl CalculationService for HttpCalculationClient {
    async fn calculate(&self, input: &ActivityInput) -> Result<EmissionsResult> {
        self.post(input).await
    }
}

/// Flatten a reqwest error and its source chain into one message
fn http_error(err: reqwest::Error) -> Error {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    Error::http(message)
}

fn truncate_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_ERROR_BODY_CHARS {
        return trimmed.to_string();
    }
    let mut short: String = trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect();
    short.push('…');
    short
}
