//! Sorting exercise configuration.
//!
//! Hosts configure how a sorting exercise behaves once the learner submits.
//! The exercise content itself lives in `SortingExercise`; this module only
//! holds behavior switches.

use serde::{Deserialize, Serialize};

/// Behavior switches for a sorting exercise.
///
/// ## Example
///
/// ```
/// use ethics_bowl::core::SortingConfig;
///
/// let config = SortingConfig::default().with_lock_after_submit(true);
/// assert!(config.lock_after_submit);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SortingConfig {
    /// Freeze card placement once the learner has submitted.
    ///
    /// While frozen, moves, drags, and reset requests are rejected.
    pub lock_after_submit: bool,
}

impl SortingConfig {
    /// Create a config with default behavior (never locks).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether submission locks the exercise.
    #[must_use]
    pub fn with_lock_after_submit(mut self, lock: bool) -> Self {
        self.lock_after_submit = lock;
        self
    }
}
