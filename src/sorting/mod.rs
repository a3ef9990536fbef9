//! Drag-and-drop sorting exercise interaction.
//!
//! `SortingController` is the state machine a host UI drives. Browser drag
//! events map onto four calls:
//!
//! - `begin_drag(card)` when a card is picked up
//! - `hover_enter(container)` / `hover_leave(container)` for highlighting
//! - `drop_on(container)` when the card is released over a container
//! - `end_drag()` when the drag finishes either way
//!
//! Invalid requests (moves while locked, drops with nothing dragged, drops
//! onto unknown containers, incomplete submissions) come back as
//! `SortingError` and leave state untouched.
//!
//! ## Example Usage
//!
//! ```
//! use ethics_bowl::core::{CardId, ContainerId, SortingConfig, SortingExercise};
//! use ethics_bowl::sorting::{RecordingObserver, SortingController, SortingError};
//!
//! let exercise = SortingExercise::new("s1", "Sort")
//!     .with_card("a", "A")
//!     .with_bucket("x", "X");
//! let config = SortingConfig::default().with_lock_after_submit(true);
//! let mut sorting = SortingController::new(exercise, config, RecordingObserver::new()).unwrap();
//!
//! sorting.begin_drag(&CardId::new("a")).unwrap();
//! sorting.drop_on(ContainerId::bucket_id("x")).unwrap();
//! sorting.submit().unwrap();
//!
//! assert!(sorting.is_locked());
//! assert_eq!(sorting.reset(), Err(SortingError::Locked));
//! assert_eq!(sorting.observer().submitted, vec![false, true]);
//! ```

mod controller;
mod drag;
mod error;
mod observer;

pub use controller::{SortingController, SortingView};
pub use drag::DragState;
pub use error::SortingError;
pub use observer::{ObserverFn, RecordingObserver, SortingObserver};
