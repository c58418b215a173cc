//! Blender data types: comparison aggregates and presentation view models

use serde::Serialize;

use shared::{FlavorAxis, OptimizationMode, OptimizationResult};
use crate::error::RequestError;

/// One settled comparison leg
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonLeg {
    pub mode: OptimizationMode,
    pub outcome: Result<OptimizationResult, RequestError>,
}

/// One successful comparison leg
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonEntry {
    pub mode: OptimizationMode,
    pub result: OptimizationResult,
}

/// One line of the recipe table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositionRow {
    pub batch_id: String,
    /// Batch name, or the raw id once the batch has left the registry
    pub label: String,
    /// Share of the blend in percent
    pub percentage: f64,
    pub weight_kg: f64,
    /// `None` when the batch is no longer known and has no price
    pub cost_contribution: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaSign {
    Above,
    OnTarget,
    Below,
}

/// Predicted price relative to the target price
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceDelta {
    pub absolute_delta: f64,
    pub sign: DeltaSign,
}

impl PriceDelta {
    pub fn between(predicted: f64, target: f64) -> Self {
        let diff = predicted - target;
        let sign = if diff > 0.0 {
            DeltaSign::Above
        } else if diff < 0.0 {
            DeltaSign::Below
        } else {
            DeltaSign::OnTarget
        };
        Self {
            absolute_delta: diff.abs(),
            sign,
        }
    }

    /// At or under budget
    pub fn within_target(&self) -> bool {
        self.sign != DeltaSign::Above
    }

    pub fn signed(&self) -> f64 {
        match self.sign {
            DeltaSign::Above => self.absolute_delta,
            DeltaSign::OnTarget => 0.0,
            DeltaSign::Below => -self.absolute_delta,
        }
    }
}

/// Label/value pair of the proportion series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// Predicted vs target value on one flavor axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfilePoint {
    pub axis: FlavorAxis,
    pub predicted: f64,
    /// Absent when the axis was left unconstrained
    pub target: Option<f64>,
}

/// Solver relaxed constraints to reach feasibility
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelaxationNotice {
    pub retry_count: u32,
    pub trace: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlendMetrics {
    pub predicted_price: f64,
    pub objective_value: f64,
    pub computation_time_ms: u64,
    pub similarity_score: f64,
    pub status: Option<String>,
    /// Price recomputed from the registry, absent if a referenced batch is gone
    pub registry_price: Option<f64>,
}

/// Everything a renderer needs for a feasible blend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlendView {
    pub rows: Vec<CompositionRow>,
    pub price_delta: PriceDelta,
    pub proportions: Vec<SeriesPoint>,
    pub profile: Vec<ProfilePoint>,
    pub metrics: BlendMetrics,
    pub relaxation: Option<RelaxationNotice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum ResultView {
    Infeasible { status: Option<String> },
    Feasible(BlendView),
}

impl ResultView {
    pub fn is_feasible(&self) -> bool {
        matches!(self, ResultView::Feasible(_))
    }

    pub fn blend(&self) -> Option<&BlendView> {
        match self {
            ResultView::Feasible(view) => Some(view),
            ResultView::Infeasible { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CardOutcome {
    Result { view: ResultView },
    Failed { message: String },
}

/// One column of the comparison view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonCard {
    pub mode: OptimizationMode,
    pub label: &'static str,
    pub outcome: CardOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_delta_signs() {
        let over = PriceDelta::between(165000.0, 160000.0);
        assert_eq!(over.sign, DeltaSign::Above);
        assert_eq!(over.absolute_delta, 5000.0);
        assert!(!over.within_target());
        assert_eq!(over.signed(), 5000.0);

        let under = PriceDelta::between(150000.0, 160000.0);
        assert_eq!(under.sign, DeltaSign::Below);
        assert!(under.within_target());
        assert_eq!(under.signed(), -10000.0);

        let exact = PriceDelta::between(160000.0, 160000.0);
        assert_eq!(exact.sign, DeltaSign::OnTarget);
        assert!(exact.within_target());
    }

    #[test]
    fn test_infeasible_view_serializes_without_blend() {
        let view = ResultView::Infeasible { status: None };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["outcome"], "infeasible");
        assert!(json.get("rows").is_none());
        assert!(!view.is_feasible());
        assert!(view.blend().is_none());
    }
}
