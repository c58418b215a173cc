//! Reduces solver results into renderer-ready view models

use tracing::warn;

use shared::{FlavorAxis, OptimizationResult, OptimizationTarget};
use crate::core::registry::BatchRegistry;
use crate::types::{
    BlendMetrics, BlendView, CardOutcome, ComparisonCard, ComparisonLeg, CompositionRow, PriceDelta, ProfilePoint,
    RelaxationNotice, ResultView, SeriesPoint,
};

/// Pure transforms from results to view models; no I/O
pub struct ResultPresenter;

impl ResultPresenter {
    /// Present one result against the current registry and its originating target
    pub fn present(result: &OptimizationResult, registry: &BatchRegistry, target: &OptimizationTarget) -> ResultView {
        if !result.feasible {
            return ResultView::Infeasible {
                status: result.status.clone(),
            };
        }

        if let Err(issue) = result.check_consistency(target.total_output_kg) {
            warn!(mode = %target.mode, "Solver result is inconsistent: {}", issue);
        }

        ResultView::Feasible(BlendView {
            rows: Self::rows(result, registry, target),
            price_delta: PriceDelta::between(result.predicted_price, target.target_price),
            proportions: Self::proportions(result, registry),
            profile: Self::profile(result, target),
            metrics: BlendMetrics {
                predicted_price: result.predicted_price,
                objective_value: result.objective_value,
                computation_time_ms: result.computation_time_ms,
                similarity_score: result.similarity_score,
                status: result.status.clone(),
                registry_price: Self::registry_price(result, registry),
            },
            relaxation: Self::relaxation(result),
        })
    }

    /// Present every comparison leg in its fixed position
    pub fn present_comparison(
        legs: &[ComparisonLeg],
        registry: &BatchRegistry,
        base_target: &OptimizationTarget,
    ) -> Vec<ComparisonCard> {
        legs.iter()
            .map(|leg| {
                let outcome = match &leg.outcome {
                    Ok(result) => CardOutcome::Result {
                        view: Self::present(result, registry, &base_target.with_mode(leg.mode)),
                    },
                    Err(e) => CardOutcome::Failed { message: e.to_string() },
                };
                ComparisonCard {
                    mode: leg.mode,
                    label: leg.mode.label(),
                    outcome,
                }
            })
            .collect()
    }

    /// Recipe table rows, one per composition entry
    pub fn rows(result: &OptimizationResult, registry: &BatchRegistry, target: &OptimizationTarget) -> Vec<CompositionRow> {
        result
            .composition
            .iter()
            .map(|(id, fraction)| {
                let weight_kg = Self::weight_for(result, id, *fraction, target.total_output_kg);
                let batch = registry.get(id);
                CompositionRow {
                    batch_id: id.clone(),
                    label: Self::label_for(registry, id),
                    percentage: fraction * 100.0,
                    weight_kg,
                    cost_contribution: batch.map(|b| weight_kg * b.price),
                }
            })
            .collect()
    }

    /// Proportion series in percent
    pub fn proportions(result: &OptimizationResult, registry: &BatchRegistry) -> Vec<SeriesPoint> {
        result
            .composition
            .iter()
            .map(|(id, fraction)| SeriesPoint {
                label: Self::label_for(registry, id),
                value: fraction * 100.0,
            })
            .collect()
    }

    /// Predicted vs target value for each flavor axis
    pub fn profile(result: &OptimizationResult, target: &OptimizationTarget) -> Vec<ProfilePoint> {
        FlavorAxis::ALL
            .iter()
            .map(|&axis| ProfilePoint {
                axis,
                predicted: match axis {
                    FlavorAxis::Acid => result.predicted_acid,
                    FlavorAxis::Bitter => result.predicted_bitter,
                    FlavorAxis::Sweet => result.predicted_sweet,
                    FlavorAxis::Caffeine => result.predicted_caffeine,
                },
                target: target.axis(axis),
            })
            .collect()
    }

    /// Blend price from current registry prices; `None` once any batch is gone
    pub fn registry_price(result: &OptimizationResult, registry: &BatchRegistry) -> Option<f64> {
        result
            .composition
            .iter()
            .map(|(id, fraction)| registry.get(id).map(|b| fraction * b.price))
            .sum()
    }

    /// Reported weight, falling back to `fraction * totalOutputKg`
    pub fn weight_for(result: &OptimizationResult, id: &str, fraction: f64, total_output_kg: f64) -> f64 {
        result
            .weight_distribution
            .get(id)
            .copied()
            .unwrap_or(fraction * total_output_kg)
    }

    pub fn label_for(registry: &BatchRegistry, id: &str) -> String {
        registry.get(id).map_or_else(|| id.to_string(), |b| b.name.clone())
    }

    fn relaxation(result: &OptimizationResult) -> Option<RelaxationNotice> {
        result.was_relaxed().then(|| RelaxationNotice {
            retry_count: result.retry_count,
            trace: result.relaxation_trace.clone().unwrap_or_default(),
        })
    }
}
