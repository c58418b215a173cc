//! Test helper utilities for blender integration tests

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Semaphore;
use url::Url;
use wiremock::MockServer;

use blender::config::{OPTIMIZE_PATH, parse_solver_url};
use blender::{ComparisonCard, OptimizationClient, RealOptimizationClient, Renderer, RequestError, ResultView};
use shared::{ActionKind, Batch, OptimizationRequest, OptimizationResult};

use super::fixtures::result_for_mode;

/// Optimize endpoint served by a wiremock server
pub fn endpoint_for(server: &MockServer) -> Url {
    parse_solver_url(&server.uri()).unwrap().join(OPTIMIZE_PATH).unwrap()
}

pub fn client_for(server: &MockServer) -> RealOptimizationClient {
    RealOptimizationClient::new(endpoint_for(server))
}

/// Base URL of a port nothing listens on
pub fn unreachable_url() -> Url {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    Url::parse(&format!("http://127.0.0.1:{port}/{OPTIMIZE_PATH}")).unwrap()
}

/// Client that holds every call until the gate opens
pub struct GatedClient {
    gate: Semaphore,
    calls: AtomicUsize,
}

impl GatedClient {
    pub fn new() -> Self {
        Self {
            gate: Semaphore::new(0),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn open(&self) {
        self.gate.add_permits(64);
    }
}

#[async_trait]
impl OptimizationClient for GatedClient {
    async fn optimize(&self, request: OptimizationRequest) -> Result<OptimizationResult, RequestError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let _permit = self
            .gate
            .acquire()
            .await
            .map_err(|e| RequestError::transport(e.to_string()))?;
        Ok(result_for_mode(request.target.mode))
    }
}

/// Renderer that keeps a log of what it was asked to show
#[derive(Default)]
pub struct RecordingRenderer {
    events: Mutex<Vec<String>>,
}

impl RecordingRenderer {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl Renderer for RecordingRenderer {
    fn render_batches(&self, batches: &[Batch]) {
        self.record(format!("batches:{}", batches.len()));
    }

    fn render_result(&self, view: &ResultView) {
        self.record(format!("result:{}", view.is_feasible()));
    }

    fn render_comparison(&self, cards: &[ComparisonCard]) {
        self.record(format!("comparison:{}", cards.len()));
    }

    fn notify_failure(&self, action: ActionKind, message: &str) {
        self.record(format!("failure:{action}:{message}"));
    }
}

/// Helper to wait for async conditions with timeout
pub async fn wait_for_condition<F>(mut condition: F, timeout_ms: u64) -> bool
where
    F: FnMut() -> bool,
{
    let start = std::time::Instant::now();
    let timeout = std::time::Duration::from_millis(timeout_ms);

    loop {
        if condition() {
            return true;
        }

        if start.elapsed() > timeout {
            return false;
        }

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
}
