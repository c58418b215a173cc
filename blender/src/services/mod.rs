//! Service implementations
//!
//! Real implementations of the service traits for production use

pub mod console_renderer;
pub mod solver_client;

pub use console_renderer::ConsoleRenderer;
pub use solver_client::RealOptimizationClient;
