//! Derived grouping of cards by container.
//!
//! Grouping is a pure view over an exercise and its placements. Cards keep
//! authoring order inside each group, not the order they were moved in.

use rustc_hash::FxHashMap;

use crate::core::exercise::{Bucket, Card, SortingExercise};
use crate::core::ids::{BucketId, ContainerId};

use super::map::Placements;

/// Cards assigned to one bucket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketGroup<'a> {
    /// The bucket.
    pub bucket: &'a Bucket,
    /// Cards in the bucket, in authoring order.
    pub cards: Vec<&'a Card>,
}

/// Cards grouped into the bank and each bucket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grouping<'a> {
    /// Unplaced cards, plus any card whose bucket no longer exists.
    pub bank: Vec<&'a Card>,
    /// One group per bucket, in authoring order.
    pub buckets: Vec<BucketGroup<'a>>,
}

impl<'a> Grouping<'a> {
    /// Group the exercise's cards by their current placement.
    ///
    /// ## Example
    ///
    /// ```
    /// use ethics_bowl::core::{CardId, ContainerId, SortingExercise};
    /// use ethics_bowl::placement::{Grouping, Placements};
    ///
    /// let exercise = SortingExercise::new("s", "Sort")
    ///     .with_card("a", "A")
    ///     .with_card("b", "B")
    ///     .with_bucket("x", "X");
    /// let mut placements = Placements::all_in_bank(&exercise.cards);
    /// placements.move_to(&CardId::new("b"), ContainerId::bucket_id("x"));
    ///
    /// let grouping = Grouping::build(&exercise, &placements);
    /// assert_eq!(grouping.bank.len(), 1);
    /// assert_eq!(grouping.buckets[0].cards[0].text, "B");
    /// ```
    #[must_use]
    pub fn build(exercise: &'a SortingExercise, placements: &Placements) -> Self {
        let mut buckets: Vec<BucketGroup<'a>> = exercise
            .buckets
            .iter()
            .map(|bucket| BucketGroup {
                bucket,
                cards: Vec::new(),
            })
            .collect();

        let index: FxHashMap<&BucketId, usize> = exercise
            .buckets
            .iter()
            .enumerate()
            .map(|(i, b)| (&b.id, i))
            .collect();

        let mut bank = Vec::new();
        for card in &exercise.cards {
            match placements.get(&card.id) {
                Some(ContainerId::Bucket(id)) => match index.get(id) {
                    Some(&i) => buckets[i].cards.push(card),
                    // Bucket was removed from the exercise
                    None => bank.push(card),
                },
                Some(ContainerId::Bank) | None => bank.push(card),
            }
        }

        Self { bank, buckets }
    }

    /// Cards in a bucket, or `None` if the bucket doesn't exist.
    #[must_use]
    pub fn bucket(&self, id: &BucketId) -> Option<&[&'a Card]> {
        self.buckets
            .iter()
            .find(|g| &g.bucket.id == id)
            .map(|g| g.cards.as_slice())
    }

    /// Cards in a container, or `None` for an unknown bucket.
    #[must_use]
    pub fn container(&self, id: &ContainerId) -> Option<&[&'a Card]> {
        match id {
            ContainerId::Bank => Some(self.bank.as_slice()),
            ContainerId::Bucket(bucket) => self.bucket(bucket),
        }
    }

    /// Check if every card sits in a real bucket.
    #[must_use]
    pub fn all_placed(&self) -> bool {
        self.bank.is_empty()
    }

    /// Total cards across all groups.
    #[must_use]
    pub fn total(&self) -> usize {
        self.bank.len() + self.buckets.iter().map(|g| g.cards.len()).sum::<usize>()
    }
}
