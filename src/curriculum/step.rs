//! Learning modules and their steps.
//!
//! A module is an ordered list of steps. Most step kinds are opaque to this
//! crate; sorting steps carry their full `SortingExercise`.

use serde::{Deserialize, Serialize};

use crate::core::exercise::SortingExercise;

/// Identifier of a learning module.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(pub String);

impl ModuleId {
    /// Create a new module ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Module({})", self.0)
    }
}

/// Identifier of a step within a module.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(pub String);

impl StepId {
    /// Create a new step ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is a draft-local id not yet assigned by storage.
    #[must_use]
    pub fn is_temporary(&self) -> bool {
        self.0.starts_with("temp-")
    }
}

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Step({})", self.0)
    }
}

/// What a step presents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "camelCase")]
pub enum StepKind {
    /// A video lesson.
    Video,
    /// Flip-card review.
    Flashcards,
    /// Multiple-choice quiz.
    Quiz,
    /// Open text answer.
    FreeResponse,
    /// Opinion poll.
    Poll,
    /// Links and reading material.
    AdditionalResources,
    /// Drag cards into buckets.
    Sorting(SortingExercise),
}

impl StepKind {
    /// Human-readable name for step lists.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            StepKind::Video => "Video",
            StepKind::Flashcards => "Flashcards",
            StepKind::Quiz => "Quiz",
            StepKind::FreeResponse => "Free Response",
            StepKind::Poll => "Poll",
            StepKind::AdditionalResources => "Additional Resources",
            StepKind::Sorting(_) => "Sorting",
        }
    }

    /// The sorting exercise, if this is a sorting step.
    #[must_use]
    pub fn sorting(&self) -> Option<&SortingExercise> {
        match self {
            StepKind::Sorting(exercise) => Some(exercise),
            _ => None,
        }
    }
}

/// One step of a module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Stable identity (or a `temp-` id for unsaved copies).
    pub id: StepId,
    /// Title shown in the step list.
    pub title: String,
    /// Position within the module.
    pub order: u32,
    /// Step content.
    pub kind: StepKind,
}

impl Step {
    /// Create a step at order 0.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: StepKind) -> Self {
        Self {
            id: StepId::new(id),
            title: title.into(),
            order: 0,
            kind,
        }
    }

    /// Set the order (builder pattern).
    #[must_use]
    pub fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }
}

/// A saved learning module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Stable identity.
    pub id: ModuleId,
    /// Module title.
    pub title: String,
    /// Module description.
    #[serde(default)]
    pub description: String,
    /// Display position among all modules (1-based).
    pub order: u32,
    /// Steps in presentation order.
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Module {
    /// Create a module with no steps.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, order: u32) -> Self {
        Self {
            id: ModuleId::new(id),
            title: title.into(),
            description: String::new(),
            order,
            steps: Vec::new(),
        }
    }

    /// Append a step (builder pattern).
    #[must_use]
    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(StepKind::FreeResponse.label(), "Free Response");
        assert_eq!(StepKind::AdditionalResources.label(), "Additional Resources");
        assert_eq!(StepKind::Sorting(SortingExercise::new("s", "")).label(), "Sorting");
    }

    #[test]
    fn test_sorting_accessor() {
        let exercise = SortingExercise::new("s", "Sort");
        let kind = StepKind::Sorting(exercise.clone());

        assert_eq!(kind.sorting(), Some(&exercise));
        assert_eq!(StepKind::Quiz.sorting(), None);
    }

    #[test]
    fn test_temporary_ids() {
        assert!(StepId::new("temp-3").is_temporary());
        assert!(!StepId::new("abc").is_temporary());
    }

    #[test]
    fn test_step_serialization() {
        let step = Step::new("st1", "Watch", StepKind::FreeResponse).with_order(2);
        let json = serde_json::to_value(&step).unwrap();

        assert_eq!(json["kind"]["type"], "freeResponse");
        assert_eq!(json["order"], 2);

        let back: Step = serde_json::from_value(json).unwrap();
        assert_eq!(back, step);
    }

    #[test]
    fn test_sorting_step_serialization() {
        let exercise = SortingExercise::new("s1", "Sort").with_card("a", "A").with_bucket("x", "X");
        let step = Step::new("st2", "Sort it", StepKind::Sorting(exercise));
        let json = serde_json::to_value(&step).unwrap();

        assert_eq!(json["kind"]["type"], "sorting");
        assert_eq!(json["kind"]["content"]["cards"][0]["id"], "a");

        let back: Step = serde_json::from_value(json).unwrap();
        assert_eq!(back, step);
    }

    #[test]
    fn test_module_defaults() {
        let json = r#"{"id": "m1", "title": "Intro", "order": 1}"#;
        let module: Module = serde_json::from_str(json).unwrap();

        assert!(module.steps.is_empty());
        assert!(module.description.is_empty());
    }
}
