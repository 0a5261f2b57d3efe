//! Test helpers: an in-process HTTP server and a fake calculation service
//!
//! Available to other crates through the `test-helpers` feature.

use std::sync::{Arc, Mutex};

use sustrack_core::prelude::*;
use sustrack_core::{ActivityInput, CategoryEmission, CategoryRecommendation, EmissionsResult};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use url::Url;

use crate::service::CalculationService;

/// Raw HTTP request captured by [`MockCalculationServer`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    raw: String,
}

impl RecordedRequest {
    /// First line, e.g. `POST /calculate HTTP/1.1`
    pub fn request_line(&self) -> &str {
        self.raw.lines().next().unwrap_or_default()
    }

    pub fn body(&self) -> &str {
        self.raw
            .split_once("\r\n\r\n")
            .map(|(_, body)| body)
            .unwrap_or_default()
    }
}

/// Serves exactly one canned response on a random localhost port
pub struct MockCalculationServer {
    url: Url,
    handle: JoinHandle<RecordedRequest>,
}

impl MockCalculationServer {
    pub async fn start(status: u16, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let addr = listener.local_addr().expect("mock server address");

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept connection");
            let raw = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason_phrase(status),
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
            RecordedRequest { raw }
        });

        let url = Url::parse(&format!("http://{}/calculate", addr)).expect("mock server url");
        Self { url, handle }
    }

    /// URL of a port that was just released, so connections are refused
    pub async fn unreachable_url() -> Url {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind probe listener");
        let addr = listener.local_addr().expect("probe address");
        drop(listener);
        Url::parse(&format!("http://{}/calculate", addr)).expect("unreachable url")
    }

    pub fn url(&self) -> Url {
        self.url.clone()
    }

    /// Wait for the served request
    pub async fn request(self) -> RecordedRequest {
        self.handle.await.expect("mock server task")
    }
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);

        if let Some(header_end) = find_header_end(&buf) {
            let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        _ => "Unknown",
    }
}

/// The sample result used throughout the tests:
/// one `driving` category of 12.5 with a single recommendation each.
pub fn driving_sample() -> EmissionsResult {
    EmissionsResult {
        emissions: vec![CategoryEmission {
            category: "driving".to_string(),
            kg_co2: 12.5,
        }],
        total_carbon: 12.5,
        recommendations: vec![CategoryRecommendation {
            category: "driving".to_string(),
            text: "Drive less".to_string(),
        }],
        overall_recommendations: vec!["Consider carpooling".to_string()],
    }
}

/// In-memory [`CalculationService`] with a canned outcome
#[derive(Debug, Clone)]
pub struct FakeCalculationService {
    outcome: std::result::Result<EmissionsResult, String>,
    calls: Arc<Mutex<Vec<ActivityInput>>>,
}

impl FakeCalculationService {
    pub fn succeeding(result: EmissionsResult) -> Self {
        Self {
            outcome: Ok(result),
            calls: Arc::default(),
        }
    }

    /// Fails every call with an [`Error::Http`] carrying `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
            calls: Arc::default(),
        }
    }

    /// Inputs received so far, in call order
    pub fn calls(&self) -> Vec<ActivityInput> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl CalculationService for FakeCalculationService {
    async fn calculate(&self, input: &ActivityInput) -> Result<EmissionsResult> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(*input);
        }
        match &self.outcome {
            Ok(result) => Ok(result.clone()),
            Err(message) => Err(Error::http(message.clone())),
        }
    }
}
