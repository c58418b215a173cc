//! Core business logic modules
//!
//! Registry, request construction, comparison fan-out and presentation.
//! Only the comparison orchestrator awaits; everything else is pure.

pub mod comparison;
pub mod presenter;
pub mod registry;
pub mod request_builder;

#[cfg(test)]
mod tests;

pub use comparison::{ComparisonOrchestrator, ComparisonPolicy, all_or_nothing};
pub use presenter::ResultPresenter;
pub use registry::BatchRegistry;
pub use request_builder::RequestBuilder;
