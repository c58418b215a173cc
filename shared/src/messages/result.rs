//! Response body of the solver

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Allowed drift of the composition sum away from 1.0
pub const COMPOSITION_TOLERANCE: f64 = 1e-3;

/// Allowed relative error between a weight and `composition * totalOutputKg`
pub const WEIGHT_RELATIVE_TOLERANCE: f64 = 1e-6;

/// Outcome of one solve. Only `feasible` is guaranteed to be present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub feasible: bool,
    #[serde(default)]
    pub status: Option<String>,
    /// Batch id to fraction of the blend
    #[serde(default, deserialize_with = "null_as_default")]
    pub composition: BTreeMap<String, f64>,
    /// Batch id to kilograms
    #[serde(default, deserialize_with = "null_as_default")]
    pub weight_distribution: BTreeMap<String, f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub predicted_price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub predicted_acid: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub predicted_bitter: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub predicted_sweet: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub predicted_caffeine: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub similarity_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub objective_value: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub computation_time_ms: u64,
    /// Solver-internal relaxation attempts
    #[serde(default, deserialize_with = "null_as_default")]
    pub retry_count: u32,
    #[serde(default)]
    pub relaxation_trace: Option<String>,
}

/// A feasible result that breaks the composition invariants
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConsistencyIssue {
    #[error("composition sums to {sum}, expected 1.0")]
    CompositionSum { sum: f64 },

    #[error("no weight reported for batch {id}")]
    MissingWeight { id: String },

    #[error("weight of batch {id} is {actual} kg, expected {expected} kg")]
    WeightMismatch { id: String, expected: f64, actual: f64 },
}

impl OptimizationResult {
    pub fn infeasible() -> Self {
        Self {
            feasible: false,
            status: Some("INFEASIBLE".to_string()),
            ..Self::default()
        }
    }

    pub fn was_relaxed(&self) -> bool {
        self.retry_count > 0
    }

    /// Check composition sum and weight distribution against the requested output
    pub fn check_consistency(&self, total_output_kg: f64) -> Result<(), ConsistencyIssue> {
        if !self.feasible {
            return Ok(());
        }

        let sum: f64 = self.composition.values().sum();
        if (sum - 1.0).abs() > COMPOSITION_TOLERANCE {
            return Err(ConsistencyIssue::CompositionSum { sum });
        }

        for (id, fraction) in &self.composition {
            let actual = *self
                .weight_distribution
                .get(id)
                .ok_or_else(|| ConsistencyIssue::MissingWeight { id: id.clone() })?;
            let expected = fraction * total_output_kg;
            let scale = expected.abs().max(f64::EPSILON);
            if (actual - expected).abs() / scale > WEIGHT_RELATIVE_TOLERANCE {
                return Err(ConsistencyIssue::WeightMismatch {
                    id: id.clone(),
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
