//! Workbench state and per-action in-flight tracking

use std::sync::atomic::{AtomicBool, Ordering};

use shared::{ActionKind, Algorithm, OptimizationParams, OptimizationResult, OptimizationTarget, TargetSelection};
use crate::core::registry::BatchRegistry;
use crate::types::ComparisonLeg;

/// Single-slot supervisor for one operator action
#[derive(Debug, Default)]
pub struct ActionSlot {
    busy: AtomicBool,
}

impl ActionSlot {
    /// Claim the slot; `None` while another call of the same action is pending
    pub fn try_acquire(&self) -> Option<InFlightGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard { slot: self })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Releases its slot on drop, including on early error returns
#[derive(Debug)]
pub struct InFlightGuard<'a> {
    slot: &'a ActionSlot,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.slot.busy.store(false, Ordering::Release);
    }
}

/// Independent slots for optimize and compare
#[derive(Debug, Default)]
pub struct ActionSlots {
    optimize: ActionSlot,
    compare: ActionSlot,
}

impl ActionSlots {
    pub fn slot(&self, action: ActionKind) -> &ActionSlot {
        match action {
            ActionKind::Optimize => &self.optimize,
            ActionKind::Compare => &self.compare,
        }
    }
}

/// Last single-mode outcome, kept with the target it was computed for
#[derive(Debug, Clone, PartialEq)]
pub struct SingleOutcome {
    pub target: OptimizationTarget,
    pub result: OptimizationResult,
}

/// Last comparison outcome; `target` is the shared base target
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonOutcome {
    pub target: OptimizationTarget,
    pub legs: Vec<ComparisonLeg>,
}

/// Everything the operator has entered plus the results on display
#[derive(Debug, Default)]
pub struct WorkbenchState {
    pub registry: BatchRegistry,
    pub target: TargetSelection,
    pub params: OptimizationParams,
    pub algorithm: Algorithm,
    pub last_result: Option<SingleOutcome>,
    pub last_comparison: Option<ComparisonOutcome>,
}

impl WorkbenchState {
    pub fn new(registry: BatchRegistry) -> Self {
        Self {
            registry,
            ..Self::default()
        }
    }
}
