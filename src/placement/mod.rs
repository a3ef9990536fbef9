//! Placement tracking for sorting exercises.
//!
//! ## Key Types
//!
//! - `Placements`: Card location tracking and movement
//! - `Grouping`: Cards grouped into the bank and each bucket
//! - `BucketGroup`: One bucket's cards

pub mod map;
pub mod grouping;

pub use map::Placements;
pub use grouping::{BucketGroup, Grouping};
