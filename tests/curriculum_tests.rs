//! Module editing tests.
//!
//! These tests cover the draft workflow end to end: load a saved module,
//! edit its steps, and produce a save payload. Sorting steps are checked to
//! feed straight into a sorting controller.

use ethics_bowl::core::{CardId, ContainerId, SortingConfig, SortingExercise};
use ethics_bowl::curriculum::{EditorError, Module, ModuleDraft, Step, StepId, StepKind};
use ethics_bowl::sorting::SortingController;

fn sorting_exercise() -> SortingExercise {
    SortingExercise::new("ex-1", "Which principle applies?")
        .with_card("k1", "Keep promises")
        .with_card("k2", "Reduce suffering")
        .with_bucket("duty", "Duty")
        .with_bucket("outcome", "Outcome")
}

fn saved_modules() -> Vec<Module> {
    vec![
        Module::new("m1", "Foundations", 1)
            .with_step(Step::new("s1", "Welcome", StepKind::Video).with_order(0))
            .with_step(Step::new("s2", "Sort it", StepKind::Sorting(sorting_exercise())).with_order(1))
            .with_step(Step::new("s3", "Reflect", StepKind::FreeResponse).with_order(2)),
        Module::new("m2", "Case Analysis", 2),
    ]
}

/// Test a typical editing session on an existing module.
#[test]
fn test_edit_existing_module() {
    let modules = saved_modules();
    let mut draft = ModuleDraft::for_module(&modules[0]);

    let copy = draft.clone_step(&StepId::new("s2")).unwrap();
    draft.delete_step(&StepId::new("s1"));
    draft.begin_step_drag(2).unwrap();
    draft.drop_step(0).unwrap();
    draft.upsert_step(Step::new("s3", "Reflect deeply", StepKind::FreeResponse));

    let saved = draft.finalize(&modules).unwrap();

    let listing: Vec<_> = saved
        .steps
        .iter()
        .map(|s| (s.id.clone(), s.title.as_str(), s.order))
        .collect();
    assert_eq!(
        listing,
        vec![
            (copy, "Sort it (Copy)", 0),
            (StepId::new("s2"), "Sort it", 1),
            (StepId::new("s3"), "Reflect deeply", 2),
        ]
    );
}

/// Test creating a new module that collides with an existing order.
#[test]
fn test_new_module_validation() {
    let modules = saved_modules();
    let mut draft = ModuleDraft::new_module(&modules);
    assert_eq!(draft.order(), 3);

    assert_eq!(draft.finalize(&modules), Err(EditorError::EmptyTitle));

    draft.set_title("Applied Ethics");
    draft.set_order(1);
    assert!(matches!(
        draft.finalize(&modules),
        Err(EditorError::DuplicateOrder { order: 1, .. })
    ));

    draft.set_order(3);
    let saved = draft.finalize(&modules).unwrap();
    assert_eq!(saved.id, None);
    assert_eq!(saved.title, "Applied Ethics");
}

/// Test that a cloned sorting step drives a controller like its source step.
#[test]
fn test_cloned_sorting_step_is_playable() {
    let modules = saved_modules();
    let mut draft = ModuleDraft::for_module(&modules[0]);
    let copy = draft.clone_step(&StepId::new("s2")).unwrap();

    let step = draft.steps().iter().find(|s| s.id == copy).unwrap();
    let exercise = step.kind.sorting().unwrap().clone();

    let mut sorting = SortingController::new(exercise, SortingConfig::default(), ()).unwrap();
    sorting.move_card(&CardId::new("k1"), ContainerId::bucket_id("duty")).unwrap();
    sorting.move_card(&CardId::new("k2"), ContainerId::bucket_id("outcome")).unwrap();

    assert!(sorting.submit().is_ok());
}

/// Test that modules round-trip through the host's JSON.
#[test]
fn test_module_json_round_trip() {
    let module = saved_modules().remove(0);
    let json = serde_json::to_string(&module).unwrap();
    let back: Module = serde_json::from_str(&json).unwrap();

    assert_eq!(back, module);
}
