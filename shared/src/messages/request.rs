//! Request body for `POST /api/v1/optimize`

use serde::{Deserialize, Serialize};

use crate::types::{Algorithm, Batch, OptimizationParams, OptimizationTarget};

/// Batch as the solver expects it: `stock` and `expiry` renamed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchForRequest {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub acid: f64,
    pub bitter: f64,
    pub sweet: f64,
    pub caffeine: f64,
    pub available_stock: f64,
    pub days_to_expiry: u32,
}

impl From<&Batch> for BatchForRequest {
    fn from(batch: &Batch) -> Self {
        Self {
            id: batch.id.clone(),
            name: batch.name.clone(),
            price: batch.price,
            acid: batch.acid,
            bitter: batch.bitter,
            sweet: batch.sweet,
            caffeine: batch.caffeine,
            available_stock: batch.stock,
            days_to_expiry: batch.expiry,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRequest {
    pub batches: Vec<BatchForRequest>,
    pub target: OptimizationTarget,
    pub algorithm: Algorithm,
    pub params: OptimizationParams,
}
