//! Three-way concurrent comparison across the preset modes

use std::time::Instant;

use shared::{ActionKind, OptimizationMode, OptimizationRequest, action_debug, action_warn};
use crate::error::RequestError;
use crate::traits::OptimizationClient;
use crate::types::{ComparisonEntry, ComparisonLeg};

/// What to do when some legs fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComparisonPolicy {
    /// Any failed leg fails the whole comparison
    #[default]
    AllOrNothing,
    /// Succeeding legs are kept; failed legs are reported inline
    Partial,
}

/// Fans one base request out to every mode and fans the answers back in
pub struct ComparisonOrchestrator<'a, C: OptimizationClient + ?Sized> {
    client: &'a C,
}

impl<'a, C: OptimizationClient + ?Sized> ComparisonOrchestrator<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Copy of `base` differing only in `target.mode`
    pub fn request_for_mode(base: &OptimizationRequest, mode: OptimizationMode) -> OptimizationRequest {
        OptimizationRequest {
            target: base.target.with_mode(mode),
            ..base.clone()
        }
    }

    /// Run all legs concurrently and wait until every one has settled.
    ///
    /// The returned legs follow `OptimizationMode::ALL` whatever order the
    /// calls complete in.
    pub async fn run_settled(&self, base: &OptimizationRequest) -> Vec<ComparisonLeg> {
        let [first, second, third] = OptimizationMode::ALL;
        let (a, b, c) = tokio::join!(self.leg(base, first), self.leg(base, second), self.leg(base, third));
        vec![a, b, c]
    }

    /// Run all legs; the first failure in mode order fails the comparison
    pub async fn run(&self, base: &OptimizationRequest) -> Result<Vec<ComparisonEntry>, RequestError> {
        all_or_nothing(self.run_settled(base).await)
    }

    async fn leg(&self, base: &OptimizationRequest, mode: OptimizationMode) -> ComparisonLeg {
        let request = Self::request_for_mode(base, mode);
        let started = Instant::now();
        let outcome = self.client.optimize(request).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &outcome {
            Ok(result) => {
                action_debug!(
                    ActionKind::Compare,
                    mode = %mode,
                    feasible = result.feasible,
                    elapsed_ms,
                    "Comparison leg settled"
                );
            }
            Err(e) => {
                action_warn!(ActionKind::Compare, mode = %mode, elapsed_ms, "Comparison leg failed: {}", e);
            }
        }

        ComparisonLeg { mode, outcome }
    }
}

/// Collapse settled legs under the all-or-nothing policy
pub fn all_or_nothing(legs: Vec<ComparisonLeg>) -> Result<Vec<ComparisonEntry>, RequestError> {
    legs.into_iter()
        .map(|leg| leg.outcome.map(|result| ComparisonEntry { mode: leg.mode, result }))
        .collect()
}
