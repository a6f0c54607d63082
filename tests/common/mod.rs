//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use pricedesk::config::BackendConfig;
use pricedesk::models::{OperationOutcome, PriceSeriesResponse, TickerSymbol};
use pricedesk::session::{PriceApi, WorkflowView};
use pricedesk::view::StatusKind;
use pricedesk::{PricedeskError, Result};

pub const PRICES_AAPL_JSON: &str = include_str!("../fixtures/prices_aapl.json");
pub const PRICES_ERROR_JSON: &str = include_str!("../fixtures/prices_error.json");
pub const FETCH_SUCCESS_JSON: &str = include_str!("../fixtures/fetch_success.json");
pub const FETCH_WARNING_JSON: &str = include_str!("../fixtures/fetch_warning.json");
pub const FETCH_ERROR_JSON: &str = include_str!("../fixtures/fetch_error.json");

pub fn outcome(json: &str) -> OperationOutcome {
    serde_json::from_str(json).expect("valid outcome fixture")
}

pub fn series(json: &str) -> PriceSeriesResponse {
    serde_json::from_str(json).expect("valid series fixture")
}

/// One request as seen by [`MockBackend`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// Minimal HTTP/1.1 responder on a random local port.
///
/// Every request gets the same status and body, then the connection closes.
pub struct MockBackend {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBackend {
    pub async fn start(status: u16, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let recorded = Arc::clone(&recorded);
                tokio::spawn(async move {
                    serve(stream, status, body, &recorded).await;
                });
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    pub fn config(&self) -> BackendConfig {
        BackendConfig::new(&self.base_url, 5).unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Reads one request and records it before answering.
async fn serve(
    mut stream: TcpStream,
    status: u16,
    body: &str,
    recorded: &Mutex<Vec<RecordedRequest>>,
) -> Option<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    let header_end = loop {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.lines();
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();

    let content_length = lines
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let body_end = buf.len().min(header_end + content_length);
    let request_body = String::from_utf8_lossy(&buf[header_end..body_end]).to_string();
    recorded.lock().unwrap().push(RecordedRequest {
        method,
        path,
        body: request_body,
    });

    let response = format!(
        "HTTP/1.1 {status} Mock\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    stream.write_all(response.as_bytes()).await.ok()?;
    stream.shutdown().await.ok()
}

/// [`PriceApi`] that replays queued responses and records every call.
#[derive(Default)]
pub struct ScriptedApi {
    collect: Mutex<VecDeque<Result<OperationOutcome>>>,
    series: Mutex<VecDeque<Result<PriceSeriesResponse>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_collect(self, response: Result<OperationOutcome>) -> Self {
        self.collect.lock().unwrap().push_back(response);
        self
    }

    pub fn on_series(self, response: Result<PriceSeriesResponse>) -> Self {
        self.series.lock().unwrap().push_back(response);
        self
    }

    /// Calls in order, as `"collect AAPL"` or `"series AAPL"`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl PriceApi for ScriptedApi {
    async fn fetch_and_save(&self, ticker: &TickerSymbol) -> Result<OperationOutcome> {
        self.calls.lock().unwrap().push(format!("collect {ticker}"));
        self.collect
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(PricedeskError::Application("unscripted collect".into())))
    }

    async fn get_prices(&self, ticker: &TickerSymbol) -> Result<PriceSeriesResponse> {
        self.calls.lock().unwrap().push(format!("series {ticker}"));
        self.series
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(PricedeskError::Application("unscripted series".into())))
    }
}

/// [`WorkflowView`] that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub statuses: Vec<(StatusKind, String)>,
    /// Point count of each rendered series.
    pub renders: Vec<usize>,
}

impl RecordingView {
    pub fn kinds(&self) -> Vec<StatusKind> {
        self.statuses.iter().map(|(kind, _)| *kind).collect()
    }

    pub fn last_status(&self) -> Option<(StatusKind, &str)> {
        self.statuses.last().map(|(kind, text)| (*kind, text.as_str()))
    }
}

impl WorkflowView for RecordingView {
    fn set_status(&mut self, kind: StatusKind, message: &str) {
        self.statuses.push((kind, message.to_string()));
    }

    fn render_series(&mut self, response: &PriceSeriesResponse) -> Result<()> {
        self.renders.push(response.prices.len());
        Ok(())
    }
}
