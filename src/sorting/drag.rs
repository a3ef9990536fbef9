//! Transient drag-and-drop state.
//!
//! Tracks the card being dragged and the single container currently
//! hovered. Knows nothing about locking or placement; the controller
//! decides when these transitions are allowed.

use serde::{Deserialize, Serialize};

use crate::core::ids::{CardId, ContainerId};

/// Drag source and hover target.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragState {
    source: Option<CardId>,
    hover: Option<ContainerId>,
}

impl DragState {
    /// Create an idle drag state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging a card. Replaces any previous source.
    pub fn begin(&mut self, card: CardId) {
        self.source = Some(card);
    }

    /// Hover a container. The latest hover wins.
    pub fn enter(&mut self, container: ContainerId) {
        self.hover = Some(container);
    }

    /// Leave a container. Only clears the hover if it matches.
    pub fn leave(&mut self, container: &ContainerId) {
        if self.hover.as_ref() == Some(container) {
            self.hover = None;
        }
    }

    /// Clear source and hover.
    pub fn clear(&mut self) {
        self.source = None;
        self.hover = None;
    }

    /// Card being dragged.
    #[must_use]
    pub fn source(&self) -> Option<&CardId> {
        self.source.as_ref()
    }

    /// Container being hovered.
    #[must_use]
    pub fn hover(&self) -> Option<&ContainerId> {
        self.hover.as_ref()
    }

    /// Check if nothing is being dragged or hovered.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.source.is_none() && self.hover.is_none()
    }
}
