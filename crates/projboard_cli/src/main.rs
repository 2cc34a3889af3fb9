//! CLI smoke entry point.
//!
//! # Responsibility
//! - Drive the board core end-to-end without the Flutter/FFI runtime.
//! - Keep output deterministic apart from generated project ids.

use projboard_core::{DragPayload, ProjectBoard, ProjectForm, ProjectStatus};

fn main() {
    println!("projboard_core ping={}", projboard_core::ping());
    println!("projboard_core version={}", projboard_core::core_version());

    let mut board = ProjectBoard::new();
    board.subscribe(|projects| println!("board changed projects={}", projects.len()));

    let submissions = [
        ProjectForm::new("Build API", "Design REST endpoints", "3"),
        ProjectForm::new("Write docs", "", "1"),
        ProjectForm::new("Ship release", "Tag and publish 0.1", "1"),
    ];
    let mut created = Vec::new();
    for form in &submissions {
        match board.submit(form) {
            Ok(id) => created.push(id),
            Err(err) => println!(
                "rejected title={:?}: {err} ({})",
                form.title,
                err.user_message()
            ),
        }
    }

    if let Some(first) = created.first() {
        let outcome = board.drop_on(&DragPayload::encode(*first), ProjectStatus::Finished);
        println!("drop outcome={outcome:?}");
    }

    for status in ProjectStatus::ALL {
        let column = board.column(status);
        println!("{}", column.heading());
        for project in column.projects() {
            println!(
                "  {} | {} | {}",
                project.title(),
                project.assigned_label(),
                project.description()
            );
        }
    }
}
