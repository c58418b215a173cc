//! Service trait definitions for dependency injection
//!
//! The solver and the renderer are the only collaborators outside this crate;
//! both sit behind these traits so the workbench can be driven by mocks.

use async_trait::async_trait;

use shared::{ActionKind, Batch, OptimizationRequest, OptimizationResult};
use crate::error::RequestError;
use crate::types::{ComparisonCard, ResultView};

/// One request/response exchange with the optimization service
#[mockall::automock]
#[async_trait]
pub trait OptimizationClient: Send + Sync {
    /// Send a request and wait for the decoded result
    async fn optimize(&self, request: OptimizationRequest) -> Result<OptimizationResult, RequestError>;
}

/// View models in, render calls out
#[mockall::automock]
pub trait Renderer: Send + Sync {
    /// Show the current inventory
    fn render_batches(&self, batches: &[Batch]);

    /// Show a single-mode result
    fn render_result(&self, view: &ResultView);

    /// Show the three-mode comparison
    fn render_comparison(&self, cards: &[ComparisonCard]);

    /// Show a user-visible failure notice
    fn notify_failure(&self, action: ActionKind, message: &str);
}
