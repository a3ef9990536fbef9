//! Core types: identifiers, exercise definitions, configuration.
//!
//! Everything here is static data. Interaction state lives in `placement`
//! and `sorting`.

pub mod ids;
pub mod config;
pub mod exercise;

pub use ids::{CardId, BucketId, ContainerId, BANK_ID};
pub use config::SortingConfig;
pub use exercise::{ExerciseId, Card, Bucket, SortingExercise, ExerciseError};
