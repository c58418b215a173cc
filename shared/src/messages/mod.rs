//! Wire messages exchanged with the optimization service
//!
//! Field names are fixed by the service and must not change.

pub mod request;
pub mod result;
pub mod sentinel;

pub use request::{BatchForRequest, OptimizationRequest};
pub use result::{ConsistencyIssue, OptimizationResult};
