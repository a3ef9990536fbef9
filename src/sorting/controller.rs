//! Sorting interaction controller.
//!
//! Owns the placement map, the submitted flag, and transient drag state for
//! one exercise instance. Every operation runs to completion synchronously;
//! the host feeds input events in order and reads derived views back.
//!
//! ## Lifecycle
//!
//! 1. `new` places every card in the bank and announces the baseline
//! 2. `move_card` / drag events move cards between containers
//! 3. `submit` succeeds once the bank is empty
//! 4. Moving a card back to the bank reverts the submission
//! 5. With `lock_after_submit`, a submission freezes moves and reset

use tracing::{debug, trace};

use crate::core::config::SortingConfig;
use crate::core::exercise::{ExerciseError, SortingExercise};
use crate::core::ids::{CardId, ContainerId};
use crate::placement::{Grouping, Placements};

use super::drag::DragState;
use super::error::SortingError;
use super::observer::SortingObserver;

/// Read-only snapshot for rendering one frame of the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortingView<'a> {
    /// Prompt text.
    pub prompt: &'a str,
    /// Cards grouped by container.
    pub grouping: Grouping<'a>,
    /// Whether the learner has submitted.
    pub submitted: bool,
    /// Whether interaction is frozen.
    pub locked: bool,
    /// Whether the submit button should be enabled.
    pub can_submit: bool,
    /// Cards still waiting in the bank.
    pub remaining: usize,
    /// Card being dragged.
    pub dragging: Option<&'a CardId>,
    /// Container being hovered.
    pub hover: Option<&'a ContainerId>,
}

/// State machine for a drag-and-drop sorting exercise.
///
/// ## Example
///
/// ```
/// use ethics_bowl::core::{CardId, ContainerId, SortingConfig, SortingExercise};
/// use ethics_bowl::sorting::SortingController;
///
/// let exercise = SortingExercise::new("s1", "Sort")
///     .with_card("a", "A")
///     .with_card("b", "B")
///     .with_bucket("x", "X");
/// let mut sorting = SortingController::new(exercise, SortingConfig::default(), ()).unwrap();
///
/// sorting.move_card(&CardId::new("a"), ContainerId::bucket_id("x")).unwrap();
/// assert!(!sorting.can_submit());
///
/// sorting.move_card(&CardId::new("b"), ContainerId::bucket_id("x")).unwrap();
/// assert!(sorting.can_submit());
///
/// sorting.submit().unwrap();
/// assert!(sorting.is_submitted());
///
/// sorting.move_card(&CardId::new("a"), ContainerId::Bank).unwrap();
/// assert!(!sorting.is_submitted());
/// ```
#[derive(Debug)]
pub struct SortingController<O: SortingObserver = ()> {
    exercise: SortingExercise,
    config: SortingConfig,
    placements: Placements,
    submitted: bool,
    drag: DragState,
    observer: O,
}

impl<O: SortingObserver> SortingController<O> {
    /// Create a controller with every card in the bank.
    ///
    /// The observer is told the initial placements and `submitted = false`.
    pub fn new(
        exercise: SortingExercise,
        config: SortingConfig,
        observer: O,
    ) -> Result<Self, ExerciseError> {
        exercise.validate()?;

        let placements = Placements::all_in_bank(&exercise.cards);
        let mut controller = Self {
            exercise,
            config,
            placements,
            submitted: false,
            drag: DragState::new(),
            observer,
        };
        controller.announce();
        Ok(controller)
    }

    // === Accessors ===

    /// The current exercise definition.
    #[must_use]
    pub fn exercise(&self) -> &SortingExercise {
        &self.exercise
    }

    /// The behavior config.
    #[must_use]
    pub fn config(&self) -> SortingConfig {
        self.config
    }

    /// The current placement map.
    #[must_use]
    pub fn placements(&self) -> &Placements {
        &self.placements
    }

    /// Where a card currently sits.
    #[must_use]
    pub fn placement(&self, card: &CardId) -> Option<&ContainerId> {
        self.placements.get(card)
    }

    /// The observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutable access to the observer.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consume the controller, returning the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    // === Exercise Identity ===

    /// Replace the exercise definition.
    ///
    /// A different exercise id resets everything, even while locked, and
    /// re-announces the baseline. The same id keeps surviving placements:
    /// new cards enter the bank, removed cards are dropped, and a
    /// submission that is no longer complete is reverted.
    pub fn load_exercise(&mut self, exercise: SortingExercise) -> Result<(), ExerciseError> {
        exercise.validate()?;

        if exercise.id != self.exercise.id {
            debug!(from = %self.exercise.id, to = %exercise.id, "exercise changed, resetting");
            self.placements = Placements::all_in_bank(&exercise.cards);
            self.exercise = exercise;
            self.submitted = false;
            self.drag.clear();
            self.announce();
            return Ok(());
        }

        self.exercise = exercise;
        if self.placements.sync_cards(&self.exercise.cards) {
            trace!(exercise = %self.exercise.id, "cards edited");
            self.observer.on_placements_change(&self.placements);
        }

        let stale_source = self
            .drag
            .source()
            .is_some_and(|card| !self.exercise.has_card(card));
        let stale_hover = self
            .drag
            .hover()
            .is_some_and(|container| !self.exercise.contains_container(container));
        if stale_source || stale_hover {
            self.drag.clear();
        }

        self.revert_if_incomplete();
        Ok(())
    }

    /// Put every card back in the bank and clear the submission.
    pub fn reset(&mut self) -> Result<(), SortingError> {
        self.ensure_unlocked("reset")?;

        self.drag.clear();
        let fresh = Placements::all_in_bank(&self.exercise.cards);
        if fresh != self.placements {
            self.placements = fresh;
            self.observer.on_placements_change(&self.placements);
        }
        self.set_submitted(false);

        trace!(exercise = %self.exercise.id, "reset");
        Ok(())
    }

    // === Placement ===

    /// Move a card to a container.
    ///
    /// The target is not checked against the bucket list; a card sent to a
    /// missing bucket is grouped with the bank. Drops are validated instead.
    pub fn move_card(&mut self, card: &CardId, to: ContainerId) -> Result<(), SortingError> {
        self.ensure_unlocked("move_card")?;

        let old = match self.placements.move_to(card, to.clone()) {
            Some(old) => old,
            None => return Err(self.reject("move_card", SortingError::UnknownCard(card.clone()))),
        };
        if old == to {
            return Ok(());
        }

        trace!(card = %card, from = %old, to = %to, "card moved");
        self.observer.on_placements_change(&self.placements);
        self.revert_if_incomplete();
        Ok(())
    }

    /// Cards grouped into the bank and each bucket, in authoring order.
    #[must_use]
    pub fn group_by_container(&self) -> Grouping<'_> {
        Grouping::build(&self.exercise, &self.placements)
    }

    /// Number of cards whose stored placement equals `container`.
    #[must_use]
    pub fn count_in_container(&self, container: &ContainerId) -> usize {
        self.placements.count_in(container)
    }

    /// Cards still in the bank group, including any pointing at removed buckets.
    #[must_use]
    pub fn remaining_to_place(&self) -> usize {
        self.group_by_container().bank.len()
    }

    // === Submission ===

    /// Check if submit would succeed.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.submitted && self.remaining_to_place() == 0
    }

    /// Mark the exercise submitted. Requires every card to be in a bucket.
    pub fn submit(&mut self) -> Result<(), SortingError> {
        if self.submitted {
            return Err(self.reject("submit", SortingError::AlreadySubmitted));
        }

        let remaining = self.remaining_to_place();
        if remaining > 0 {
            return Err(self.reject("submit", SortingError::Incomplete { remaining }));
        }

        self.set_submitted(true);
        Ok(())
    }

    /// Whether the learner has submitted.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Whether interaction is frozen (lock-after-submit and submitted).
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.config.lock_after_submit && self.submitted
    }

    // === Drag Lifecycle ===

    /// Start dragging a card.
    pub fn begin_drag(&mut self, card: &CardId) -> Result<(), SortingError> {
        self.ensure_unlocked("begin_drag")?;
        if !self.exercise.has_card(card) {
            return Err(self.reject("begin_drag", SortingError::UnknownCard(card.clone())));
        }

        trace!(card = %card, "drag started");
        self.drag.begin(card.clone());
        Ok(())
    }

    /// Finish a drag without dropping. Always allowed.
    pub fn end_drag(&mut self) {
        self.drag.clear();
    }

    /// Highlight a container under the pointer. The latest hover wins.
    pub fn hover_enter(&mut self, container: ContainerId) -> Result<(), SortingError> {
        self.ensure_unlocked("hover_enter")?;
        if !self.exercise.contains_container(&container) {
            return Err(self.reject("hover_enter", SortingError::UnknownContainer(container)));
        }

        self.drag.enter(container);
        Ok(())
    }

    /// The pointer left a container.
    pub fn hover_leave(&mut self, container: &ContainerId) {
        self.drag.leave(container);
    }

    /// Drop the dragged card onto a container.
    ///
    /// Rejected when locked, when nothing is being dragged, or when the
    /// target is neither the bank nor an existing bucket.
    pub fn drop_on(&mut self, container: ContainerId) -> Result<(), SortingError> {
        self.ensure_unlocked("drop")?;

        let card = match self.drag.source() {
            Some(card) => card.clone(),
            None => return Err(self.reject("drop", SortingError::NoActiveDrag)),
        };
        if !self.exercise.contains_container(&container) {
            return Err(self.reject("drop", SortingError::UnknownContainer(container)));
        }

        self.move_card(&card, container)?;
        self.drag.clear();
        Ok(())
    }

    /// Card being dragged.
    #[must_use]
    pub fn dragging(&self) -> Option<&CardId> {
        self.drag.source()
    }

    /// Check if a specific card is being dragged.
    #[must_use]
    pub fn is_dragging(&self, card: &CardId) -> bool {
        self.drag.source() == Some(card)
    }

    /// Container being hovered.
    #[must_use]
    pub fn hover(&self) -> Option<&ContainerId> {
        self.drag.hover()
    }

    /// Check if a specific container is highlighted.
    #[must_use]
    pub fn is_hovered(&self, container: &ContainerId) -> bool {
        self.drag.hover() == Some(container)
    }

    // === Rendering ===

    /// Snapshot everything a renderer needs.
    #[must_use]
    pub fn view(&self) -> SortingView<'_> {
        let grouping = self.group_by_container();
        let remaining = grouping.bank.len();
        SortingView {
            prompt: &self.exercise.prompt,
            grouping,
            submitted: self.submitted,
            locked: self.is_locked(),
            can_submit: !self.submitted && remaining == 0,
            remaining,
            dragging: self.drag.source(),
            hover: self.drag.hover(),
        }
    }

    // === Internals ===

    fn announce(&mut self) {
        self.observer.on_submitted_change(self.submitted);
        self.observer.on_placements_change(&self.placements);
    }

    fn set_submitted(&mut self, submitted: bool) {
        if self.submitted == submitted {
            return;
        }
        self.submitted = submitted;
        debug!(exercise = %self.exercise.id, submitted, "submission changed");
        self.observer.on_submitted_change(submitted);
    }

    fn revert_if_incomplete(&mut self) {
        if self.submitted && self.remaining_to_place() > 0 {
            self.set_submitted(false);
        }
    }

    fn ensure_unlocked(&self, op: &'static str) -> Result<(), SortingError> {
        if self.is_locked() {
            return Err(self.reject(op, SortingError::Locked));
        }
        Ok(())
    }

    fn reject(&self, op: &'static str, err: SortingError) -> SortingError {
        debug!(exercise = %self.exercise.id, op, reason = err.reason(), "request rejected");
        err
    }
}
