//! In-memory batch inventory

use chrono::Utc;
use tracing::debug;

use shared::{Batch, BatchDraft, ValidationError, ValidationResult};

/// Ordered batch store with stable, unique ids.
///
/// Indices shift after every removal; callers re-resolve them after any
/// mutation instead of caching them.
#[derive(Debug, Clone, Default)]
pub struct BatchRegistry {
    batches: Vec<Batch>,
    last_issued_ms: i64,
}

impl BatchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from complete batches, rejecting duplicate ids
    pub fn with_batches(batches: Vec<Batch>) -> ValidationResult<Self> {
        let mut registry = Self::new();
        registry.load(batches.into_iter().map(BatchDraft::from).collect())?;
        Ok(registry)
    }

    /// Append a batch, issuing a fresh id unless the draft carries one
    pub fn add(&mut self, draft: BatchDraft) -> ValidationResult<String> {
        draft.validate()?;

        let id = match draft.id.as_deref().map(str::trim) {
            Some(explicit) => {
                if self.get(explicit).is_some() {
                    return Err(ValidationError::DuplicateId { id: explicit.to_string() });
                }
                explicit.to_string()
            }
            None => self.issue_id(),
        };

        debug!("Adding batch {} ({})", id, draft.name);
        self.batches.push(draft.into_batch(id.clone()));
        Ok(id)
    }

    /// Replace the batch at `index`, keeping its original id
    pub fn update(&mut self, index: usize, mut draft: BatchDraft) -> ValidationResult<String> {
        let len = self.batches.len();
        let slot = self
            .batches
            .get_mut(index)
            .ok_or(ValidationError::IndexOutOfRange { index, len })?;
        // The supplied id is never used, so it is not validated either
        draft.id = None;
        draft.validate()?;

        let id = slot.id.clone();
        debug!("Updating batch {} at index {}", id, index);
        *slot = draft.into_batch(id.clone());
        Ok(id)
    }

    /// Delete by position
    pub fn remove(&mut self, index: usize) -> ValidationResult<Batch> {
        let len = self.batches.len();
        if index >= len {
            return Err(ValidationError::IndexOutOfRange { index, len });
        }
        let removed = self.batches.remove(index);
        debug!("Removed batch {} from index {}", removed.id, index);
        Ok(removed)
    }

    pub fn list(&self) -> &[Batch] {
        &self.batches
    }

    pub fn get(&self, id: &str) -> Option<&Batch> {
        self.batches.iter().find(|b| b.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.batches.iter().position(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Append many drafts at once. Nothing is applied if any draft fails.
    pub fn load(&mut self, drafts: Vec<BatchDraft>) -> ValidationResult<usize> {
        let mut staged = self.clone();
        for draft in drafts {
            staged.add(draft)?;
        }

        let added = staged.batches.len() - self.batches.len();
        *self = staged;
        Ok(added)
    }

    /// `"B" + unix millis`, strictly increasing and never colliding
    fn issue_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        let mut candidate = now.max(self.last_issued_ms + 1);
        while self.get(&format!("B{candidate}")).is_some() {
            candidate += 1;
        }
        self.last_issued_ms = candidate;
        format!("B{candidate}")
    }
}
