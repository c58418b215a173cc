//! Workbench: operator actions wired to the core components with dependency injection

use std::path::Path;
use tokio::sync::RwLock;

use shared::{
    ActionKind, Algorithm, Batch, BatchDraft, BatchForm, OptimizationParams, OptimizationRequest, TargetSelection,
    action_info, logging,
};
use crate::core::{ComparisonOrchestrator, ComparisonPolicy, RequestBuilder, ResultPresenter};
use crate::core::registry::BatchRegistry;
use crate::error::{BlenderError, BlenderResult};
use crate::state::{ActionSlots, ComparisonOutcome, SingleOutcome, WorkbenchState};
use crate::traits::{OptimizationClient, Renderer};
use crate::types::{ComparisonCard, ResultView};

/// Inventory, selections and last results behind the optimize/compare actions
pub struct Workbench<C, R>
where
    C: OptimizationClient,
    R: Renderer,
{
    state: RwLock<WorkbenchState>,
    slots: ActionSlots,
    policy: ComparisonPolicy,
    pub client: C,
    pub renderer: R,
}

impl<C, R> Workbench<C, R>
where
    C: OptimizationClient,
    R: Renderer,
{
    /// Create a workbench over an existing registry
    pub fn new(registry: BatchRegistry, client: C, renderer: R) -> Self {
        Self {
            state: RwLock::new(WorkbenchState::new(registry)),
            slots: ActionSlots::default(),
            policy: ComparisonPolicy::default(),
            client,
            renderer,
        }
    }

    pub fn with_policy(mut self, policy: ComparisonPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ComparisonPolicy {
        self.policy
    }

    /// Whether a call of `action` is still waiting on the solver
    pub fn is_pending(&self, action: ActionKind) -> bool {
        self.slots.slot(action).is_busy()
    }

    // === Inventory ===

    pub async fn batches(&self) -> Vec<Batch> {
        self.state.read().await.registry.list().to_vec()
    }

    pub async fn add_batch(&self, draft: BatchDraft) -> BlenderResult<String> {
        let (id, snapshot) = {
            let mut state = self.state.write().await;
            let id = state.registry.add(draft)?;
            (id, state.registry.list().to_vec())
        };
        self.renderer.render_batches(&snapshot);
        Ok(id)
    }

    /// Parse raw form text, then add; nothing changes if any field is invalid
    pub async fn add_batch_from_form(&self, form: &BatchForm) -> BlenderResult<String> {
        let draft = form.parse()?;
        self.add_batch(draft).await
    }

    pub async fn update_batch(&self, index: usize, draft: BatchDraft) -> BlenderResult<String> {
        let (id, snapshot) = {
            let mut state = self.state.write().await;
            let id = state.registry.update(index, draft)?;
            (id, state.registry.list().to_vec())
        };
        self.renderer.render_batches(&snapshot);
        Ok(id)
    }

    pub async fn remove_batch(&self, index: usize) -> BlenderResult<Batch> {
        let (removed, snapshot) = {
            let mut state = self.state.write().await;
            let removed = state.registry.remove(index)?;
            (removed, state.registry.list().to_vec())
        };
        self.renderer.render_batches(&snapshot);
        Ok(removed)
    }

    /// Append drafts to the inventory; nothing changes if any draft is rejected
    pub async fn load_inventory(&self, drafts: Vec<BatchDraft>) -> BlenderResult<usize> {
        let (added, snapshot) = {
            let mut state = self.state.write().await;
            let added = state.registry.load(drafts)?;
            (added, state.registry.list().to_vec())
        };
        self.renderer.render_batches(&snapshot);
        Ok(added)
    }

    /// Load a JSON array of batches from disk
    pub async fn load_inventory_file(&self, path: impl AsRef<Path>) -> BlenderResult<usize> {
        let raw = tokio::fs::read_to_string(path.as_ref()).await?;
        let drafts: Vec<BatchDraft> = serde_json::from_str(&raw)?;
        tracing::info!("📦 Loading {} batches from {}", drafts.len(), path.as_ref().display());
        self.load_inventory(drafts).await
    }

    // === Selections ===

    pub async fn set_target(&self, target: TargetSelection) -> BlenderResult<()> {
        target.validate()?;
        self.state.write().await.target = target;
        Ok(())
    }

    pub async fn set_params(&self, params: OptimizationParams) -> BlenderResult<()> {
        params.validate()?;
        self.state.write().await.params = params;
        Ok(())
    }

    pub async fn set_algorithm(&self, algorithm: Algorithm) {
        self.state.write().await.algorithm = algorithm;
    }

    pub async fn target(&self) -> TargetSelection {
        self.state.read().await.target.clone()
    }

    pub async fn params(&self) -> OptimizationParams {
        self.state.read().await.params.clone()
    }

    /// Snapshot the registry and selections into a request
    pub async fn build_request(&self) -> BlenderResult<OptimizationRequest> {
        let state = self.state.read().await;
        Ok(RequestBuilder::build(
            state.registry.list(),
            &state.target,
            &state.params,
            state.algorithm,
        )?)
    }

    // === Actions ===

    /// Run one solve in the selected mode and display it
    pub async fn optimize(&self) -> BlenderResult<ResultView> {
        let action = ActionKind::Optimize;
        let _in_flight = self
            .slots
            .slot(action)
            .try_acquire()
            .ok_or(BlenderError::ActionInFlight { action })?;

        let request = self.build_request().await.inspect_err(|e| self.report(action, e))?;
        let target = request.target.clone();
        logging::log_dispatch(action, &format!("{} mode over {} batches", target.mode, request.batches.len()));

        let result = self
            .client
            .optimize(request)
            .await
            .map_err(BlenderError::from)
            .inspect_err(|e| self.report(action, e))?;

        if result.was_relaxed() {
            action_info!(action, retry_count = result.retry_count, "Solver relaxed constraints");
        }

        let view = {
            let mut state = self.state.write().await;
            let view = ResultPresenter::present(&result, &state.registry, &target);
            state.last_result = Some(SingleOutcome { target, result });
            view
        };

        self.renderer.render_result(&view);
        logging::log_success(action, if view.is_feasible() { "Blend found" } else { "Solver reported infeasible" });
        Ok(view)
    }

    /// Run all three modes concurrently and display them side by side
    pub async fn compare(&self) -> BlenderResult<Vec<ComparisonCard>> {
        let action = ActionKind::Compare;
        let _in_flight = self
            .slots
            .slot(action)
            .try_acquire()
            .ok_or(BlenderError::ActionInFlight { action })?;

        let base = self.build_request().await.inspect_err(|e| self.report(action, e))?;
        logging::log_dispatch(action, &format!("three modes over {} batches", base.batches.len()));

        let legs = ComparisonOrchestrator::new(&self.client).run_settled(&base).await;

        // Partial still needs one answer to show; otherwise the prior comparison stays
        let rejected = match self.policy {
            ComparisonPolicy::AllOrNothing => legs.iter().any(|leg| leg.outcome.is_err()),
            ComparisonPolicy::Partial => legs.iter().all(|leg| leg.outcome.is_err()),
        };
        if rejected {
            if let Some(error) = legs.iter().find_map(|leg| leg.outcome.as_ref().err()) {
                let error = BlenderError::from(error.clone());
                self.report(action, &error);
                return Err(error);
            }
        }

        let cards = {
            let mut state = self.state.write().await;
            let cards = ResultPresenter::present_comparison(&legs, &state.registry, &base.target);
            state.last_comparison = Some(ComparisonOutcome {
                target: base.target,
                legs,
            });
            cards
        };

        self.renderer.render_comparison(&cards);
        logging::log_success(action, "Comparison complete");
        Ok(cards)
    }

    // === Results ===

    pub async fn last_result(&self) -> Option<SingleOutcome> {
        self.state.read().await.last_result.clone()
    }

    pub async fn last_comparison(&self) -> Option<ComparisonOutcome> {
        self.state.read().await.last_comparison.clone()
    }

    /// Re-present the last single result against the current registry
    pub async fn current_view(&self) -> Option<ResultView> {
        let state = self.state.read().await;
        state
            .last_result
            .as_ref()
            .map(|outcome| ResultPresenter::present(&outcome.result, &state.registry, &outcome.target))
    }

    /// Re-present the last comparison against the current registry
    pub async fn current_comparison(&self) -> Option<Vec<ComparisonCard>> {
        let state = self.state.read().await;
        state
            .last_comparison
            .as_ref()
            .map(|outcome| ResultPresenter::present_comparison(&outcome.legs, &state.registry, &outcome.target))
    }

    fn report(&self, action: ActionKind, error: &BlenderError) {
        logging::log_error(action, &action.to_string(), error);
        self.renderer.notify_failure(action, &error.to_string());
    }
}
