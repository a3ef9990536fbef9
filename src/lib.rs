//! # ethics-bowl
//!
//! Interaction state for Ethics Bowl Academy learning modules, kept free of
//! any UI toolkit so it can be driven and tested without a renderer.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: Each exercise instance owns its state in one
//!    controller. No ambient globals.
//!
//! 2. **Host-Driven**: The host delivers discrete input events in order.
//!    Every operation is synchronous and runs to completion.
//!
//! 3. **Rejections, Not Faults**: Invalid requests return an error and
//!    leave state unchanged. Nothing panics on user input.
//!
//! ## Modules
//!
//! - `core`: Identifiers, exercise definitions, configuration
//! - `placement`: Card placement map and derived grouping
//! - `sorting`: Drag-and-drop sorting controller
//! - `curriculum`: Modules, steps, and draft step-list editing
//! - `carousel`: Homepage slide cursor

pub mod core;
pub mod placement;
pub mod sorting;
pub mod curriculum;
pub mod carousel;

// Re-export commonly used types
pub use crate::core::{
    CardId, BucketId, ContainerId, BANK_ID,
    ExerciseId, Card, Bucket, SortingExercise, ExerciseError,
    SortingConfig,
};

pub use crate::placement::{Placements, Grouping, BucketGroup};

pub use crate::sorting::{
    SortingController, SortingView, SortingError,
    SortingObserver, ObserverFn, RecordingObserver, DragState,
};

pub use crate::curriculum::{
    Module, ModuleId, Step, StepId, StepKind,
    ModuleDraft, ModuleSubmission, EditorError,
};

pub use crate::carousel::Carousel;
