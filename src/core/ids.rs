//! Identifier types for cards, buckets, and placement containers.
//!
//! Exercise content is authored in a document store, so every identifier
//! is an opaque string. The crate never interprets the text of an id apart
//! from one reserved value: `"bank"`, the pseudo-container holding cards
//! that have not been placed yet.
//!
//! ## Usage
//!
//! ```
//! use ethics_bowl::core::{BucketId, ContainerId};
//!
//! let bank = ContainerId::from("bank");
//! assert!(bank.is_bank());
//!
//! let ethical = ContainerId::from("ethical");
//! assert_eq!(ethical.bucket(), Some(&BucketId::new("ethical")));
//! ```

use serde::{Deserialize, Serialize};

/// Reserved container id for the unplaced card bank.
pub const BANK_ID: &str = "bank";

/// Identifier of a sortable card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Identifier of a bucket (a real placement target).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BucketId(pub String);

impl BucketId {
    /// Create a new bucket ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this id collides with the reserved bank id.
    #[must_use]
    pub fn is_reserved(&self) -> bool {
        self.0 == BANK_ID
    }
}

impl std::fmt::Display for BucketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bucket({})", self.0)
    }
}

impl From<&str> for BucketId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Where a card currently sits: the bank or a bucket.
///
/// Serialized as a bare string, `"bank"` or the bucket id, so placement
/// maps round-trip through the host's JSON unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContainerId {
    /// The unplaced card bank.
    #[default]
    Bank,
    /// A bucket. The bucket may no longer exist in the exercise.
    Bucket(BucketId),
}

impl ContainerId {
    /// Container for a bucket.
    #[must_use]
    pub fn bucket_id(id: impl Into<String>) -> Self {
        Self::from(id.into())
    }

    /// Check if this is the bank.
    #[must_use]
    pub fn is_bank(&self) -> bool {
        matches!(self, Self::Bank)
    }

    /// The bucket id, if this is a bucket.
    #[must_use]
    pub fn bucket(&self) -> Option<&BucketId> {
        match self {
            Self::Bank => None,
            Self::Bucket(id) => Some(id),
        }
    }

    /// Raw id text as the host sees it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bank => BANK_ID,
            Self::Bucket(id) => id.as_str(),
        }
    }
}

impl From<String> for ContainerId {
    fn from(id: String) -> Self {
        if id == BANK_ID {
            Self::Bank
        } else {
            Self::Bucket(BucketId(id))
        }
    }
}

impl From<&str> for ContainerId {
    fn from(id: &str) -> Self {
        Self::from(id.to_string())
    }
}

impl From<BucketId> for ContainerId {
    fn from(id: BucketId) -> Self {
        Self::from(id.0)
    }
}

impl From<ContainerId> for String {
    fn from(id: ContainerId) -> Self {
        match id {
            ContainerId::Bank => BANK_ID.to_string(),
            ContainerId::Bucket(bucket) => bucket.0,
        }
    }
}

impl std::fmt::Display for ContainerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bank => write!(f, "Bank"),
            Self::Bucket(id) => write!(f, "{}", id),
        }
    }
}
