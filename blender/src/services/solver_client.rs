//! HTTP client for the external optimization service

use async_trait::async_trait;
use std::time::Instant;
use tracing::{debug, info};
use url::Url;
use uuid::Uuid;

use shared::{OptimizationRequest, OptimizationResult};
use crate::config::BlenderConfig;
use crate::error::{BlenderResult, RequestError};
use crate::traits::OptimizationClient;

/// Longest error body kept in a `RequestError::Status`
const MAX_ERROR_BODY: usize = 512;

/// Real solver client: one POST per call, no retry, no client-side timeout
pub struct RealOptimizationClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl RealOptimizationClient {
    /// Create a client posting to the given optimize endpoint
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn from_config(config: &BlenderConfig) -> BlenderResult<Self> {
        Ok(Self::new(config.optimize_endpoint()?))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl OptimizationClient for RealOptimizationClient {
    async fn optimize(&self, request: OptimizationRequest) -> Result<OptimizationResult, RequestError> {
        let request_id = Uuid::new_v4();
        let mode = request.target.mode;
        let started = Instant::now();

        debug!(
            %request_id,
            mode = %mode,
            algorithm = %request.algorithm,
            batches = request.batches.len(),
            "📤 Sending optimize request to {}",
            self.endpoint
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| RequestError::transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RequestError::transport(format!("Failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(RequestError::Status {
                status: status.as_u16(),
                body: truncate(body),
            });
        }

        let result: OptimizationResult =
            serde_json::from_str(&body).map_err(|e| RequestError::decode(e.to_string()))?;

        info!(
            %request_id,
            mode = %mode,
            feasible = result.feasible,
            retry_count = result.retry_count,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "📥 Solver answered"
        );

        Ok(result)
    }
}

fn truncate(mut body: String) -> String {
    if body.len() > MAX_ERROR_BODY {
        let mut cut = MAX_ERROR_BODY;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
        body.push('…');
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_long_bodies() {
        assert_eq!(truncate("short".to_string()), "short");

        let long = "é".repeat(MAX_ERROR_BODY);
        let cut = truncate(long);
        assert!(cut.len() <= MAX_ERROR_BODY + '…'.len_utf8());
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn test_from_config_targets_optimize_path() {
        let client = RealOptimizationClient::from_config(&BlenderConfig::defaults().unwrap()).unwrap();
        assert_eq!(client.endpoint().path(), "/api/v1/optimize");
    }
}
