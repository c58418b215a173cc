//! Coffee blend workbench library
//!
//! Keeps the green-coffee inventory, turns operator selections into solver
//! requests, runs single and three-mode comparison solves against the external
//! optimization service and shapes the answers into view models.

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod workbench;

// Re-export main types
pub use config::BlenderConfig;
pub use core::{BatchRegistry, ComparisonOrchestrator, ComparisonPolicy, RequestBuilder, ResultPresenter};
pub use error::{BlenderError, BlenderResult, RequestError};
pub use traits::*;
pub use types::*;
pub use workbench::Workbench;
pub use services::*;
