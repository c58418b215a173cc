//! Tests for RequestBuilder

use shared::{
    Algorithm, AxisToggle, FlavorAxis, MIN_RATIO, OptimizationParams, TargetSelection, ValidationError,
    demo_inventory,
};
use crate::core::registry::BatchRegistry;
use crate::core::request_builder::RequestBuilder;
use super::fixtures::draft;

fn selection_with_toggles(mask: u8) -> TargetSelection {
    let toggle = |bit: u8, value: f64| {
        if mask & (1 << bit) != 0 {
            AxisToggle::on(value)
        } else {
            AxisToggle { enabled: false, value }
        }
    };
    TargetSelection {
        acid: toggle(0, 5.5),
        bitter: toggle(1, 6.0),
        sweet: toggle(2, 5.0),
        caffeine: toggle(3, 2.0),
        ..TargetSelection::default()
    }
}

#[test]
fn test_sentinel_for_every_toggle_combination() {
    let batches = demo_inventory();
    let params = OptimizationParams::default();

    for mask in 0u8..16 {
        let selection = selection_with_toggles(mask);
        let request = RequestBuilder::build(&batches, &selection, &params, Algorithm::Default).unwrap();
        let wire = serde_json::to_value(&request).unwrap();

        for (bit, (axis, field, value)) in [
            (FlavorAxis::Acid, "targetAcid", 5.5),
            (FlavorAxis::Bitter, "targetBitter", 6.0),
            (FlavorAxis::Sweet, "targetSweet", 5.0),
            (FlavorAxis::Caffeine, "targetCaffeine", 2.0),
        ]
        .into_iter()
        .enumerate()
        {
            let enabled = mask & (1 << bit) != 0;
            if enabled {
                assert_eq!(request.target.axis(axis), Some(value), "mask {mask:04b} {field}");
                assert_eq!(wire["target"][field].as_f64(), Some(value), "mask {mask:04b} {field}");
            } else {
                assert_eq!(request.target.axis(axis), None, "mask {mask:04b} {field}");
                assert_eq!(wire["target"][field].as_i64(), Some(-1), "mask {mask:04b} {field}");
            }
        }
    }
}

#[test]
fn test_every_batch_mapped_once_with_renamed_fields() {
    let batches = demo_inventory();
    let request =
        RequestBuilder::build(&batches, &TargetSelection::default(), &OptimizationParams::default(), Algorithm::Hybrid)
            .unwrap();

    assert_eq!(request.batches.len(), batches.len());
    for (source, mapped) in batches.iter().zip(&request.batches) {
        assert_eq!(mapped.id, source.id);
        assert_eq!(mapped.available_stock, source.stock);
        assert_eq!(mapped.days_to_expiry, source.expiry);
        assert_eq!(mapped.price, source.price);
    }

    let wire = serde_json::to_value(&request).unwrap();
    let first = &wire["batches"][0];
    assert_eq!(first["availableStock"], 1000.0);
    assert_eq!(first["daysToExpiry"], 50);
    assert!(first.get("stock").is_none());
    assert!(first.get("expiry").is_none());
    assert_eq!(wire["algorithm"], "HYBRID");
    assert_eq!(wire["target"]["mode"], "BALANCED");
}

#[test]
fn test_min_ratio_is_fixed() {
    let request = RequestBuilder::build(
        &demo_inventory(),
        &TargetSelection::default(),
        &OptimizationParams::for_mass_market(),
        Algorithm::Default,
    )
    .unwrap();
    assert_eq!(request.target.min_ratio, MIN_RATIO);
    assert_eq!(request.target.min_ratio, 0.05);
}

#[test]
fn test_builder_is_deterministic() {
    let batches = demo_inventory();
    let selection = TargetSelection::default();
    let params = OptimizationParams::default();

    let first = RequestBuilder::build(&batches, &selection, &params, Algorithm::Default).unwrap();
    let second = RequestBuilder::build(&batches, &selection, &params, Algorithm::Default).unwrap();

    assert_eq!(first, second);
    assert_eq!(serde_json::to_string(&first).unwrap(), serde_json::to_string(&second).unwrap());
}

#[test]
fn test_registry_mutation_is_reflected_immediately() {
    let mut registry = BatchRegistry::with_batches(demo_inventory()).unwrap();
    let selection = TargetSelection::default();
    let params = OptimizationParams::default();

    let before = RequestBuilder::build(registry.list(), &selection, &params, Algorithm::Default).unwrap();
    let new_id = registry.add(draft("Fresh lot")).unwrap();
    let after = RequestBuilder::build(registry.list(), &selection, &params, Algorithm::Default).unwrap();

    assert_eq!(before.batches.len(), 3);
    assert_eq!(after.batches.len(), 4);
    assert_eq!(after.batches[3].id, new_id);
}

#[test]
fn test_invalid_selection_fails_before_building() {
    let batches = demo_inventory();
    let mut selection = TargetSelection::default();
    selection.total_output_kg = -100.0;

    let result = RequestBuilder::build(&batches, &selection, &OptimizationParams::default(), Algorithm::Default);
    assert!(matches!(result, Err(ValidationError::NegativeValue { .. })));
}

#[test]
fn test_empty_inventory_rejected() {
    let result = RequestBuilder::build(&[], &TargetSelection::default(), &OptimizationParams::default(), Algorithm::Default);
    assert_eq!(result, Err(ValidationError::EmptyInventory));
}
