//! Sorting exercise definitions - static exercise content.
//!
//! A `SortingExercise` is what an author writes: a prompt, an ordered list
//! of cards, and an ordered list of buckets. It never changes while a
//! learner interacts with it. Where each card currently sits is tracked
//! separately in `Placements`.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ids::{BucketId, CardId, ContainerId};

/// Identifier of an exercise instance.
///
/// The controller resets all placement state when this changes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExerciseId(pub String);

impl ExerciseId {
    /// Create a new exercise ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Exercise({})", self.0)
    }
}

/// A sortable card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Stable identity.
    pub id: CardId,
    /// Display text.
    pub text: String,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: CardId::new(id),
            text: text.into(),
        }
    }
}

/// A named target category.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bucket {
    /// Stable identity.
    pub id: BucketId,
    /// Display label.
    pub label: String,
}

impl Bucket {
    /// Create a new bucket.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: BucketId::new(id),
            label: label.into(),
        }
    }
}

/// Problems with an exercise definition.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExerciseError {
    /// Two cards share an id.
    #[error("duplicate card id `{0}`")]
    DuplicateCard(CardId),

    /// Two buckets share an id.
    #[error("duplicate bucket id `{0}`")]
    DuplicateBucket(BucketId),

    /// A bucket uses the id reserved for the card bank.
    #[error("bucket id `bank` is reserved for the card bank")]
    ReservedBucketId,
}

/// Static sorting exercise definition.
///
/// Card and bucket order is authoring order and is preserved by every
/// derived grouping.
///
/// ## Example
///
/// ```
/// use ethics_bowl::core::SortingExercise;
///
/// let exercise = SortingExercise::new("s1", "Sort these arguments")
///     .with_card("a", "Lying is always wrong")
///     .with_card("b", "Outcomes matter most")
///     .with_bucket("deon", "Deontology")
///     .with_bucket("cons", "Consequentialism");
///
/// assert!(exercise.validate().is_ok());
/// assert_eq!(exercise.cards.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortingExercise {
    /// Instance identity.
    pub id: ExerciseId,

    /// Prompt shown above the board.
    pub prompt: String,

    /// Cards in authoring order.
    pub cards: Vec<Card>,

    /// Buckets in authoring order.
    pub buckets: Vec<Bucket>,
}

impl SortingExercise {
    /// Create an empty exercise.
    #[must_use]
    pub fn new(id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            id: ExerciseId::new(id),
            prompt: prompt.into(),
            cards: Vec::new(),
            buckets: Vec::new(),
        }
    }

    /// Append a card (builder pattern).
    #[must_use]
    pub fn with_card(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.cards.push(Card::new(id, text));
        self
    }

    /// Append a bucket (builder pattern).
    #[must_use]
    pub fn with_bucket(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.buckets.push(Bucket::new(id, label));
        self
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    /// Check if a card id belongs to this exercise.
    #[must_use]
    pub fn has_card(&self, id: &CardId) -> bool {
        self.card(id).is_some()
    }

    /// Look up a bucket by id.
    #[must_use]
    pub fn bucket(&self, id: &BucketId) -> Option<&Bucket> {
        self.buckets.iter().find(|b| &b.id == id)
    }

    /// Check if a bucket id exists in this exercise.
    #[must_use]
    pub fn has_bucket(&self, id: &BucketId) -> bool {
        self.bucket(id).is_some()
    }

    /// Check if a container is a valid drop target: the bank or an existing bucket.
    #[must_use]
    pub fn contains_container(&self, container: &ContainerId) -> bool {
        match container {
            ContainerId::Bank => true,
            ContainerId::Bucket(id) => self.has_bucket(id),
        }
    }

    /// All valid containers, bank first, then buckets in authoring order.
    pub fn container_ids(&self) -> impl Iterator<Item = ContainerId> + '_ {
        std::iter::once(ContainerId::Bank)
            .chain(self.buckets.iter().map(|b| ContainerId::Bucket(b.id.clone())))
    }

    /// Check that ids are unique and no bucket shadows the bank.
    pub fn validate(&self) -> Result<(), ExerciseError> {
        let mut cards = FxHashSet::default();
        for card in &self.cards {
            if !cards.insert(&card.id) {
                return Err(ExerciseError::DuplicateCard(card.id.clone()));
            }
        }

        let mut buckets = FxHashSet::default();
        for bucket in &self.buckets {
            if bucket.id.is_reserved() {
                return Err(ExerciseError::ReservedBucketId);
            }
            if !buckets.insert(&bucket.id) {
                return Err(ExerciseError::DuplicateBucket(bucket.id.clone()));
            }
        }

        Ok(())
    }
}
