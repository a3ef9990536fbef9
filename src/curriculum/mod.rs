//! Learning modules and draft editing of their step lists.
//!
//! ## Key Types
//!
//! - `Module` / `Step` / `StepKind`: saved module content
//! - `ModuleDraft`: unsaved edits with drag reorder, clone, delete
//! - `ModuleSubmission`: validated payload for an atomic save

pub mod step;
pub mod editor;

pub use step::{Module, ModuleId, Step, StepId, StepKind};
pub use editor::{EditorError, ModuleDraft, ModuleSubmission};
