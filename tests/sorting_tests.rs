//! Sorting controller integration tests.
//!
//! These tests drive the controller the way a host UI does: drag events,
//! button clicks, and observer callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use ethics_bowl::core::{CardId, ContainerId, SortingConfig, SortingExercise};
use ethics_bowl::placement::Placements;
use ethics_bowl::sorting::{ObserverFn, RecordingObserver, SortingController, SortingError};

fn ethics_exercise() -> SortingExercise {
    SortingExercise::new("sort-1", "Sort each statement by ethical theory")
        .with_card("c1", "Act only by rules you could will universally")
        .with_card("c2", "Maximize overall happiness")
        .with_card("c3", "Be the kind of person a virtuous agent would be")
        .with_card("c4", "Never use people merely as means")
        .with_bucket("deon", "Deontology")
        .with_bucket("cons", "Consequentialism")
        .with_bucket("virtue", "Virtue Ethics")
}

fn id(s: &str) -> CardId {
    CardId::new(s)
}

fn bucket(s: &str) -> ContainerId {
    ContainerId::bucket_id(s)
}

fn drag(sorting: &mut SortingController<RecordingObserver>, card: &str, to: ContainerId) {
    sorting.begin_drag(&id(card)).unwrap();
    sorting.hover_enter(to.clone()).unwrap();
    sorting.drop_on(to).unwrap();
    sorting.end_drag();
}

fn controller(lock: bool) -> SortingController<RecordingObserver> {
    SortingController::new(
        ethics_exercise(),
        SortingConfig::new().with_lock_after_submit(lock),
        RecordingObserver::new(),
    )
    .unwrap()
}

// =============================================================================
// Full Session
// =============================================================================

/// Test a learner sorting every card, submitting, then changing their mind.
#[test]
fn test_full_session() {
    let mut sorting = controller(false);

    drag(&mut sorting, "c1", bucket("deon"));
    drag(&mut sorting, "c2", bucket("cons"));
    drag(&mut sorting, "c3", bucket("virtue"));
    assert_eq!(sorting.remaining_to_place(), 1);
    assert_eq!(sorting.submit(), Err(SortingError::Incomplete { remaining: 1 }));

    drag(&mut sorting, "c4", bucket("deon"));
    assert!(sorting.can_submit());
    sorting.submit().unwrap();

    let grouping = sorting.group_by_container();
    let deon: Vec<_> = grouping.buckets[0].cards.iter().map(|c| c.id.clone()).collect();
    assert_eq!(deon, vec![id("c1"), id("c4")]);

    drag(&mut sorting, "c4", ContainerId::Bank);
    assert!(!sorting.is_submitted());
    assert_eq!(sorting.observer().submitted, vec![false, true, false]);
}

/// Test that placement notifications carry the full map each time.
#[test]
fn test_placement_notifications() {
    let mut sorting = controller(false);
    drag(&mut sorting, "c2", bucket("cons"));

    let observer = sorting.observer();
    // Baseline + one move
    assert_eq!(observer.placements.len(), 2);

    let last = observer.last_placements().unwrap();
    assert_eq!(last.len(), 4);
    assert_eq!(last.get(&id("c2")), Some(&bucket("cons")));
    assert_eq!(last.count_in(&ContainerId::Bank), 3);

    // Earlier snapshot is unaffected
    assert_eq!(observer.placements[0].count_in(&ContainerId::Bank), 4);
}

/// Test a host observer built from closures sharing state.
#[test]
fn test_closure_observer_host() {
    let gate = Rc::new(RefCell::new(false));
    let saved = Rc::new(RefCell::new(Placements::new()));

    let observer = {
        let gate = Rc::clone(&gate);
        let saved = Rc::clone(&saved);
        ObserverFn::new(
            move |submitted| *gate.borrow_mut() = submitted,
            move |placements: &Placements| *saved.borrow_mut() = placements.clone(),
        )
    };

    let exercise = SortingExercise::new("s", "Sort").with_card("a", "A").with_bucket("x", "X");
    let mut sorting = SortingController::new(exercise, SortingConfig::default(), observer).unwrap();

    sorting.move_card(&id("a"), bucket("x")).unwrap();
    sorting.submit().unwrap();

    assert!(*gate.borrow());
    assert_eq!(saved.borrow().get(&id("a")), Some(&bucket("x")));
}

// =============================================================================
// Locking
// =============================================================================

/// Test that a locked exercise ignores every mutation attempt.
#[test]
fn test_locked_session() {
    let mut sorting = controller(true);
    for (card, to) in [("c1", "deon"), ("c2", "cons"), ("c3", "virtue"), ("c4", "deon")] {
        drag(&mut sorting, card, bucket(to));
    }
    sorting.submit().unwrap();

    let before = sorting.placements().clone();
    let notified = sorting.observer().placements.len();

    assert_eq!(sorting.begin_drag(&id("c1")), Err(SortingError::Locked));
    assert_eq!(sorting.move_card(&id("c1"), ContainerId::Bank), Err(SortingError::Locked));
    assert_eq!(sorting.drop_on(ContainerId::Bank), Err(SortingError::Locked));
    assert_eq!(sorting.reset(), Err(SortingError::Locked));

    assert_eq!(sorting.placements(), &before);
    assert_eq!(sorting.observer().placements.len(), notified);
    assert!(sorting.view().locked);
}

/// Test that a new exercise unlocks the controller.
#[test]
fn test_next_exercise_unlocks() {
    let mut sorting = controller(true);
    for (card, to) in [("c1", "deon"), ("c2", "cons"), ("c3", "virtue"), ("c4", "deon")] {
        sorting.move_card(&id(card), bucket(to)).unwrap();
    }
    sorting.submit().unwrap();
    assert!(sorting.is_locked());

    let next = SortingExercise::new("sort-2", "Next").with_card("n1", "N").with_bucket("b", "B");
    sorting.load_exercise(next).unwrap();

    assert!(!sorting.is_locked());
    assert!(sorting.move_card(&id("n1"), bucket("b")).is_ok());
}

// =============================================================================
// Drag Edge Cases
// =============================================================================

/// Test dropping onto a container that doesn't exist.
#[test]
fn test_drop_on_missing_container() {
    let mut sorting = controller(false);
    sorting.begin_drag(&id("c1")).unwrap();

    let before = sorting.placements().clone();
    assert_eq!(
        sorting.drop_on(bucket("Y")),
        Err(SortingError::UnknownContainer(bucket("Y")))
    );
    assert_eq!(sorting.placements(), &before);
}

/// Test that a drop after the drag ended does nothing.
#[test]
fn test_drop_after_end_drag() {
    let mut sorting = controller(false);
    sorting.begin_drag(&id("c1")).unwrap();
    sorting.end_drag();

    assert_eq!(sorting.drop_on(bucket("deon")), Err(SortingError::NoActiveDrag));
    assert_eq!(sorting.placement(&id("c1")), Some(&ContainerId::Bank));
}

/// Test hover bookkeeping across several containers.
#[test]
fn test_hover_tracking() {
    let mut sorting = controller(false);
    sorting.begin_drag(&id("c1")).unwrap();

    sorting.hover_enter(bucket("deon")).unwrap();
    sorting.hover_enter(bucket("cons")).unwrap();
    // Late leave event from the first container
    sorting.hover_leave(&bucket("deon"));
    assert!(sorting.is_hovered(&bucket("cons")));

    sorting.hover_leave(&bucket("cons"));
    assert_eq!(sorting.hover(), None);

    assert_eq!(
        sorting.hover_enter(bucket("nowhere")),
        Err(SortingError::UnknownContainer(bucket("nowhere")))
    );
}

/// Test redragging a card that is already in a bucket.
#[test]
fn test_move_between_buckets() {
    let mut sorting = controller(false);
    drag(&mut sorting, "c1", bucket("deon"));
    drag(&mut sorting, "c1", bucket("virtue"));

    assert_eq!(sorting.count_in_container(&bucket("deon")), 0);
    assert_eq!(sorting.count_in_container(&bucket("virtue")), 1);
}
