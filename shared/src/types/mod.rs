//! Core domain types shared by every blender component

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod batch;
pub mod params;
pub mod target;

pub use batch::*;
pub use params::*;
pub use target::*;

/// Operator actions that suspend on the solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Single-mode optimization
    Optimize,
    /// Three-way mode comparison
    Compare,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Optimize => write!(f, "optimize"),
            ActionKind::Compare => write!(f, "compare"),
        }
    }
}
