//! Rejected state transitions.

use thiserror::Error;

use crate::core::ids::{CardId, ContainerId};

/// Why the controller refused a request.
///
/// Every rejection leaves the exercise state exactly as it was. Hosts that
/// prefer silent no-ops can ignore the `Err`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SortingError {
    /// The exercise was submitted with lock-after-submit enabled.
    #[error("exercise is locked after submission")]
    Locked,

    /// The card isn't part of the current exercise.
    #[error("unknown card `{0}`")]
    UnknownCard(CardId),

    /// The drop target is neither the bank nor an existing bucket.
    #[error("unknown container `{0}`")]
    UnknownContainer(ContainerId),

    /// A drop arrived with no card being dragged.
    #[error("no card is being dragged")]
    NoActiveDrag,

    /// Submit was requested while cards remain in the bank.
    #[error("{remaining} card(s) still need to be placed")]
    Incomplete {
        /// Cards left in the bank.
        remaining: usize,
    },

    /// Submit was requested twice.
    #[error("exercise is already submitted")]
    AlreadySubmitted,
}

impl SortingError {
    /// Short machine-readable reason, used as a log field.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Locked => "locked",
            Self::UnknownCard(_) => "unknown_card",
            Self::UnknownContainer(_) => "unknown_container",
            Self::NoActiveDrag => "no_active_drag",
            Self::Incomplete { .. } => "incomplete",
            Self::AlreadySubmitted => "already_submitted",
        }
    }
}
