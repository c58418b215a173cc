//! Maps registry contents and operator selections to a solver request

use shared::{
    Algorithm, Batch, BatchForRequest, OptimizationParams, OptimizationRequest, TargetSelection, ValidationError,
    ValidationResult,
};

/// Pure request construction; never touches the registry or the selections
pub struct RequestBuilder;

impl RequestBuilder {
    /// Build the payload for one solve.
    ///
    /// Every batch appears exactly once, in registry order. Disabled flavor
    /// axes become `None` and are written as `-1` on the wire.
    pub fn build(
        batches: &[Batch],
        target: &TargetSelection,
        params: &OptimizationParams,
        algorithm: Algorithm,
    ) -> ValidationResult<OptimizationRequest> {
        if batches.is_empty() {
            return Err(ValidationError::EmptyInventory);
        }
        target.validate()?;
        params.validate()?;

        Ok(OptimizationRequest {
            batches: batches.iter().map(BatchForRequest::from).collect(),
            target: target.to_target(),
            algorithm,
            params: params.clone(),
        })
    }
}
