//! Draft editing of a module and its step list.
//!
//! `ModuleDraft` holds local, unsaved edits: title/description/order, and a
//! step list that can be upserted, deleted, cloned, and reordered by drag.
//! Nothing is persisted here; `finalize` produces the validated payload a
//! host hands to storage in one atomic save.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use super::step::{Module, ModuleId, Step, StepId};

/// Validation and range problems in a draft.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EditorError {
    /// The title is empty or whitespace.
    #[error("module title is required")]
    EmptyTitle,

    /// Another module already uses this order number.
    #[error("order number {order} is already used by \"{title}\"")]
    DuplicateOrder {
        /// The contested order number.
        order: u32,
        /// Title of the module that holds it.
        title: String,
    },

    /// A step index was past the end of the list.
    #[error("step index {index} out of range for {len} steps")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of steps.
        len: usize,
    },
}

/// Validated module payload ready to save.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSubmission {
    /// Existing module id, or `None` when creating.
    pub id: Option<ModuleId>,
    /// Trimmed title.
    pub title: String,
    /// Trimmed description.
    pub description: String,
    /// Module order number.
    pub order: u32,
    /// Steps with `order` renumbered to their list position.
    pub steps: Vec<Step>,
}

/// Unsaved edits to one module.
///
/// ## Example
///
/// ```
/// use ethics_bowl::curriculum::{Module, ModuleDraft, Step, StepKind};
///
/// let module = Module::new("m1", "Intro", 1)
///     .with_step(Step::new("s1", "Watch", StepKind::Video))
///     .with_step(Step::new("s2", "Quiz", StepKind::Quiz));
///
/// let mut draft = ModuleDraft::for_module(&module);
/// draft.begin_step_drag(1).unwrap();
/// draft.drop_step(0).unwrap();
///
/// let saved = draft.finalize(&[module]).unwrap();
/// assert_eq!(saved.steps[0].title, "Quiz");
/// assert_eq!(saved.steps[0].order, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleDraft {
    module_id: Option<ModuleId>,
    title: String,
    description: String,
    order: u32,
    steps: Vec<Step>,
    dragged: Option<usize>,
    next_temp: u32,
}

impl ModuleDraft {
    /// Start editing an existing module.
    #[must_use]
    pub fn for_module(module: &Module) -> Self {
        Self {
            module_id: Some(module.id.clone()),
            title: module.title.clone(),
            description: module.description.clone(),
            order: module.order,
            steps: module.steps.clone(),
            dragged: None,
            next_temp: 0,
        }
    }

    /// Start a new module, ordered after all existing ones.
    #[must_use]
    pub fn new_module(existing: &[Module]) -> Self {
        Self {
            module_id: None,
            title: String::new(),
            description: String::new(),
            order: existing.len() as u32 + 1,
            steps: Vec::new(),
            dragged: None,
            next_temp: 0,
        }
    }

    // === Details ===

    /// Module being edited, or `None` for a new one.
    #[must_use]
    pub fn module_id(&self) -> Option<&ModuleId> {
        self.module_id.as_ref()
    }

    /// Current title (untrimmed).
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current description (untrimmed).
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Current order number.
    #[must_use]
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Set the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Set the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Set the order number.
    pub fn set_order(&mut self, order: u32) {
        self.order = order;
    }

    // === Steps ===

    /// Steps in current order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Replace the step with the same id, or append it.
    pub fn upsert_step(&mut self, step: Step) {
        match self.steps.iter_mut().find(|s| s.id == step.id) {
            Some(existing) => *existing = step,
            None => self.steps.push(step),
        }
    }

    /// Remove a step. Returns it if it existed.
    pub fn delete_step(&mut self, id: &StepId) -> Option<Step> {
        let index = self.steps.iter().position(|s| &s.id == id)?;
        self.dragged = None;
        trace!(step = %id, "step deleted");
        Some(self.steps.remove(index))
    }

    /// Append a copy of a step under a fresh temporary id.
    ///
    /// The copy's title gets a ` (Copy)` suffix and its order is the
    /// step count before insertion.
    pub fn clone_step(&mut self, id: &StepId) -> Option<StepId> {
        let mut copy = self.steps.iter().find(|s| &s.id == id)?.clone();
        copy.id = self.fresh_temp_id();
        copy.title = format!("{} (Copy)", copy.title);
        copy.order = self.steps.len() as u32;

        let new_id = copy.id.clone();
        trace!(from = %id, to = %new_id, "step cloned");
        self.steps.push(copy);
        Some(new_id)
    }

    // === Drag Reorder ===

    /// Pick up the step at `index`.
    pub fn begin_step_drag(&mut self, index: usize) -> Result<(), EditorError> {
        self.check_index(index)?;
        self.dragged = Some(index);
        Ok(())
    }

    /// Index of the step being dragged.
    #[must_use]
    pub fn dragged_step(&self) -> Option<usize> {
        self.dragged
    }

    /// Abandon the current drag.
    pub fn cancel_step_drag(&mut self) {
        self.dragged = None;
    }

    /// Drop the dragged step at `index`, shifting the steps between.
    ///
    /// No drag, or dropping where it started, leaves the list unchanged.
    pub fn drop_step(&mut self, index: usize) -> Result<(), EditorError> {
        self.check_index(index)?;

        let from = match self.dragged {
            Some(from) if from != index => from,
            _ => {
                self.dragged = None;
                return Ok(());
            }
        };

        let step = self.steps.remove(from);
        self.steps.insert(index, step);
        self.dragged = None;
        trace!(from, to = index, "step reordered");
        Ok(())
    }

    // === Save ===

    /// Validate against all saved modules and build the save payload.
    ///
    /// `existing` may include the module being edited; it never conflicts
    /// with itself.
    pub fn finalize(&self, existing: &[Module]) -> Result<ModuleSubmission, EditorError> {
        let title = self.title.trim();
        if title.is_empty() {
            debug!("module rejected: empty title");
            return Err(EditorError::EmptyTitle);
        }

        let clash = existing
            .iter()
            .find(|m| m.order == self.order && Some(&m.id) != self.module_id.as_ref());
        if let Some(other) = clash {
            debug!(order = self.order, other = %other.id, "module rejected: order taken");
            return Err(EditorError::DuplicateOrder {
                order: self.order,
                title: other.title.clone(),
            });
        }

        let steps = self
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| Step {
                order: i as u32,
                ..step.clone()
            })
            .collect();

        Ok(ModuleSubmission {
            id: self.module_id.clone(),
            title: title.to_string(),
            description: self.description.trim().to_string(),
            order: self.order,
            steps,
        })
    }

    fn check_index(&self, index: usize) -> Result<(), EditorError> {
        if index >= self.steps.len() {
            return Err(EditorError::IndexOutOfRange {
                index,
                len: self.steps.len(),
            });
        }
        Ok(())
    }

    fn fresh_temp_id(&mut self) -> StepId {
        loop {
            let candidate = StepId::new(format!("temp-{}", self.next_temp));
            self.next_temp += 1;
            if !self.steps.iter().any(|s| s.id == candidate) {
                return candidate;
            }
        }
    }
}
