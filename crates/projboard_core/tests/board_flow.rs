use projboard_core::{
    DragPayload, Project, ProjectBoard, ProjectField, ProjectForm, ProjectStatus,
    TransitionOutcome, INVALID_INPUT_MESSAGE,
};
use std::sync::{Arc, Mutex};

#[test]
fn rejected_submission_leaves_store_untouched() {
    let mut board = ProjectBoard::new();

    let first = board
        .submit(&ProjectForm::new("Build API", "Design REST endpoints", "3"))
        .expect("first submission is valid");
    let err = board
        .submit(&ProjectForm::new("Write docs", "", "1"))
        .expect_err("empty description must be rejected");

    assert_eq!(err.field(), ProjectField::Description);
    assert_eq!(err.user_message(), INVALID_INPUT_MESSAGE);
    assert_eq!(board.store().len(), 1);
    let only = &board.store().projects()[0];
    assert_eq!(only.id(), first);
    assert_eq!(only.status(), ProjectStatus::Active);
}

#[test]
fn two_observers_see_one_identical_delivery_per_transition() {
    let mut board = ProjectBoard::new();
    let id = board
        .submit(&ProjectForm::new("Build API", "Design REST endpoints", "3"))
        .expect("valid form");

    let first: Arc<Mutex<Vec<Vec<Project>>>> = Arc::new(Mutex::new(Vec::new()));
    let second: Arc<Mutex<Vec<Vec<Project>>>> = Arc::new(Mutex::new(Vec::new()));
    for sink in [&first, &second] {
        let sink = Arc::clone(sink);
        board.subscribe(move |projects| sink.lock().unwrap().push(projects.to_vec()));
    }

    let outcome = board.drop_on(&DragPayload::encode(id), ProjectStatus::Finished);
    assert_eq!(outcome, TransitionOutcome::Applied);

    let first = first.lock().unwrap();
    let second = second.lock().unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_eq!(first[0], second[0]);
    assert_eq!(first[0][0].status(), ProjectStatus::Finished);
}

#[test]
fn drop_moves_card_between_columns() {
    let mut board = ProjectBoard::new();
    let api = board
        .submit(&ProjectForm::new("Build API", "Design REST endpoints", "3"))
        .expect("valid form");
    let docs = board
        .submit(&ProjectForm::new("Write docs", "User guide", "1"))
        .expect("valid form");

    assert_eq!(
        board.drop_on(&DragPayload::encode(api), ProjectStatus::Finished),
        TransitionOutcome::Applied
    );
    assert_eq!(
        board.drop_on(&DragPayload::encode(api), ProjectStatus::Finished),
        TransitionOutcome::Unchanged
    );

    let active = board.column(ProjectStatus::Active);
    let finished = board.column(ProjectStatus::Finished);
    assert_eq!(active.projects().len(), 1);
    assert_eq!(active.projects()[0].id(), docs);
    assert_eq!(active.projects()[0].assigned_label(), "1 person assigned");
    assert_eq!(finished.projects().len(), 1);
    assert_eq!(finished.projects()[0].id(), api);
    assert_eq!(finished.revision(), 3);
}

#[test]
fn move_project_back_to_active_restores_column_order() {
    let mut board = ProjectBoard::new();
    let ids: Vec<_> = ["Alpha work", "Bravo work", "Charlie work"]
        .into_iter()
        .map(|title| {
            board
                .submit(&ProjectForm::new(title, "body", "2"))
                .expect("valid form")
        })
        .collect();

    board.move_project(ids[0], ProjectStatus::Finished);
    board.move_project(ids[0], ProjectStatus::Active);

    let active: Vec<_> = board
        .column(ProjectStatus::Active)
        .projects()
        .iter()
        .map(Project::id)
        .collect();
    assert_eq!(active, ids);
}
