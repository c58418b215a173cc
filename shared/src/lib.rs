//! Shared types for the coffee blend workbench
//!
//! Holds the domain model, the solver wire messages and the logging
//! helpers used by every component.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

pub use messages::{BatchForRequest, ConsistencyIssue, OptimizationRequest, OptimizationResult};
