//! Placement map: where each card currently sits.
//!
//! `Placements` tracks one container per card and handles movement between
//! containers. It supports:
//! - Initializing every card into the bank
//! - Moving a card to any container id
//! - Counting cards per container
//! - Re-syncing against an edited card list

use im::HashMap as ImHashMap;
use serde::{Deserialize, Serialize};

use crate::core::exercise::Card;
use crate::core::ids::{CardId, ContainerId};

/// Card locations: card id -> container id.
///
/// Uses an `im` persistent map so handing a snapshot to the host is O(1).
///
/// Every tracked card has exactly one entry. Moves do not check that a
/// bucket exists; grouping falls back to the bank for stale bucket ids.
///
/// ## Usage
///
/// ```
/// use ethics_bowl::core::{Card, CardId, ContainerId};
/// use ethics_bowl::placement::Placements;
///
/// let cards = vec![Card::new("a", "A"), Card::new("b", "B")];
/// let mut placements = Placements::all_in_bank(&cards);
///
/// assert_eq!(placements.count_in(&ContainerId::Bank), 2);
///
/// placements.move_to(&CardId::new("a"), ContainerId::bucket_id("x"));
/// assert_eq!(placements.count_in(&ContainerId::Bank), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Placements {
    locations: ImHashMap<CardId, ContainerId>,
}

impl Placements {
    /// Create an empty placement map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place every card in the bank.
    #[must_use]
    pub fn all_in_bank(cards: &[Card]) -> Self {
        Self {
            locations: cards
                .iter()
                .map(|card| (card.id.clone(), ContainerId::Bank))
                .collect(),
        }
    }

    /// Move a card to a container.
    ///
    /// Returns the old container, or `None` if the card isn't tracked.
    pub fn move_to(&mut self, card: &CardId, container: ContainerId) -> Option<ContainerId> {
        let slot = self.locations.get_mut(card)?;
        Some(std::mem::replace(slot, container))
    }

    /// Get the container a card is in.
    #[must_use]
    pub fn get(&self, card: &CardId) -> Option<&ContainerId> {
        self.locations.get(card)
    }

    /// Get the container a card is in, treating unknown cards as banked.
    #[must_use]
    pub fn container_of(&self, card: &CardId) -> ContainerId {
        self.get(card).cloned().unwrap_or_default()
    }

    /// Check if a card is in a specific container.
    #[must_use]
    pub fn is_in(&self, card: &CardId, container: &ContainerId) -> bool {
        self.locations.get(card) == Some(container)
    }

    /// Count cards whose stored placement equals `container`.
    ///
    /// This is a raw count: a card pointing at a removed bucket is counted
    /// under that bucket id, not the bank.
    #[must_use]
    pub fn count_in(&self, container: &ContainerId) -> usize {
        self.locations.values().filter(|c| *c == container).count()
    }

    /// Get all cards in a container (unordered).
    pub fn cards_in<'a>(&'a self, container: &'a ContainerId) -> impl Iterator<Item = &'a CardId> + 'a {
        self.locations
            .iter()
            .filter(move |(_, c)| *c == container)
            .map(|(card, _)| card)
    }

    /// Bring the map in line with an edited card list.
    ///
    /// Cards no longer present are dropped; new cards enter the bank;
    /// surviving cards keep their placement. Returns true if anything changed.
    pub fn sync_cards(&mut self, cards: &[Card]) -> bool {
        let mut synced = ImHashMap::new();
        for card in cards {
            let container = self.container_of(&card.id);
            synced.insert(card.id.clone(), container);
        }

        if synced == self.locations {
            return false;
        }
        self.locations = synced;
        true
    }

    /// Get total number of cards tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Check if no cards are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Check if the map tracks a card.
    #[must_use]
    pub fn contains(&self, card: &CardId) -> bool {
        self.locations.contains_key(card)
    }

    /// Iterate over all (card, container) entries.
    pub fn iter(&self) -> impl Iterator<Item = (&CardId, &ContainerId)> {
        self.locations.iter()
    }
}
