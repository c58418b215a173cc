//! Test fixtures for blender integration tests

use std::collections::BTreeMap;

use blender::BatchRegistry;
use serde_json::{Value, json};
use shared::{BatchDraft, OptimizationMode, OptimizationResult, demo_inventory};

/// Registry seeded with B1 Robusta Dak Lak, B2 Arabica Cau Dat and B3 Culi Special
pub fn demo_registry() -> BatchRegistry {
    BatchRegistry::with_batches(demo_inventory()).unwrap()
}

pub fn draft(name: &str, price: f64) -> BatchDraft {
    let mut draft = BatchDraft::template(1);
    draft.name = name.to_string();
    draft.price = price;
    draft
}

fn shares(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

/// Feasible 60/40 split of B1 and B2 over 100 kg
pub fn blend_result() -> OptimizationResult {
    OptimizationResult {
        feasible: true,
        status: Some("OPTIMAL".to_string()),
        composition: shares(&[("B1", 0.6), ("B2", 0.4)]),
        weight_distribution: shares(&[("B1", 60.0), ("B2", 40.0)]),
        predicted_price: 160000.0,
        predicted_acid: 5.6,
        predicted_bitter: 6.0,
        predicted_sweet: 4.6,
        predicted_caffeine: 1.98,
        similarity_score: 88.5,
        objective_value: 1520.25,
        computation_time_ms: 42,
        retry_count: 0,
        relaxation_trace: None,
    }
}

/// Result whose objective value identifies the mode it answered
pub fn result_for_mode(mode: OptimizationMode) -> OptimizationResult {
    let objective_value = match mode {
        OptimizationMode::PriceOptimized => 100.0,
        OptimizationMode::Balanced => 200.0,
        OptimizationMode::QualityOptimized => 300.0,
    };
    OptimizationResult {
        objective_value,
        ..blend_result()
    }
}

/// Wire body of a feasible solver answer
pub fn feasible_body() -> Value {
    json!({
        "feasible": true,
        "status": "OPTIMAL",
        "composition": { "B1": 0.6, "B2": 0.4 },
        "weightDistribution": { "B1": 60.0, "B2": 40.0 },
        "predictedPrice": 160000.0,
        "predictedAcid": 5.6,
        "predictedBitter": 6.0,
        "predictedSweet": 4.6,
        "predictedCaffeine": 1.98,
        "similarityScore": 88.5,
        "objectiveValue": 1520.25,
        "computationTimeMs": 42,
        "retryCount": 1,
        "relaxationTrace": "relaxed flavorTolerance 0.5 -> 1.0"
    })
}

/// Wire body of an infeasible answer that leaves the maps out
pub fn infeasible_body() -> Value {
    json!({
        "feasible": false,
        "status": "INFEASIBLE",
        "composition": null,
        "computationTimeMs": 12
    })
}

/// Inventory file contents in the JSON layout the CLI accepts
pub fn inventory_json() -> String {
    json!([
        { "id": "K1", "name": "Kenya AA", "price": 310000.0, "acid": 8.5, "bitter": 3.0,
          "sweet": 6.0, "caffeine": 1.3, "stock": 250.0, "expiry": 120 },
        { "name": "Brazil Santos", "price": 150000.0, "acid": 4.0, "bitter": 5.0,
          "sweet": 6.5, "caffeine": 1.5, "stock": 900.0, "expiry": 60 }
    ])
    .to_string()
}
