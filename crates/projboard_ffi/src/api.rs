//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Own the one board instance for the running app.
//! - Expose project create/drop/column reads to Dart via FRB.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Project ids cross the boundary as hyphenated UUID strings.

use log::warn;
use once_cell::sync::Lazy;
use projboard_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    ColumnView, DragPayload, Project, ProjectBoard, ProjectForm, ProjectStatus,
};
use std::sync::{Mutex, MutexGuard};

static BOARD: Lazy<Mutex<ProjectBoard>> = Lazy::new(|| Mutex::new(ProjectBoard::new()));

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One project card as rendered by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardProjectItem {
    pub project_id: String,
    pub title: String,
    pub description: String,
    /// Pre-rendered headcount line, e.g. `3 persons assigned`.
    pub people_label: String,
    /// `active|finished`.
    pub status: String,
}

/// Column read envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumnResponse {
    pub heading: String,
    pub items: Vec<BoardProjectItem>,
    /// Bumped on every accepted board mutation; Dart re-renders on change.
    pub revision: u64,
    pub message: String,
}

/// Command result envelope for create/drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardActionResponse {
    pub ok: bool,
    pub project_id: Option<String>,
    pub message: String,
}

impl BoardActionResponse {
    fn success(message: impl Into<String>, project_id: Option<String>) -> Self {
        Self {
            ok: true,
            project_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            project_id: None,
            message: message.into(),
        }
    }
}

/// Submits the project form.
///
/// # FFI contract
/// - `people` is the raw text of the headcount field.
/// - On rejection returns `ok=false` with the user-facing message; nothing
///   is stored.
#[flutter_rust_bridge::frb(sync)]
pub fn board_create_project(
    title: String,
    description: String,
    people: String,
) -> BoardActionResponse {
    let form = ProjectForm::new(title, description, people);
    match with_board(|board| board.submit(&form)) {
        Ok(project_id) => {
            BoardActionResponse::success("Project created.", Some(project_id.to_string()))
        }
        Err(err) => BoardActionResponse::failure(err.user_message()),
    }
}

/// Handles a card dropped on the column for `target_status`.
///
/// # FFI contract
/// - `payload` is the plain-text drag data (the project id); the returned
///   `project_id` is always the canonical hyphenated lowercase form.
/// - Unknown `target_status` is a failure.
/// - Unknown ids and same-column drops succeed with `No change.`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_drop_project(payload: String, target_status: String) -> BoardActionResponse {
    let target = match target_status.parse::<ProjectStatus>() {
        Ok(target) => target,
        Err(err) => {
            warn!("event=ffi_drop module=ffi status=error reason=bad_status");
            return BoardActionResponse::failure(format!("board_drop_project failed: {err}"));
        }
    };

    let Some(project_id) = DragPayload::decode(payload.as_str()) else {
        return BoardActionResponse::success("No change.", None);
    };
    let outcome = with_board(|board| board.move_project(project_id, target));
    if outcome.is_applied() {
        BoardActionResponse::success(
            format!("Project moved to {target}."),
            Some(DragPayload::encode(project_id)),
        )
    } else {
        BoardActionResponse::success("No change.", None)
    }
}

/// Reads the current column for `status`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_column(status: String) -> BoardColumnResponse {
    match status.parse::<ProjectStatus>() {
        Ok(status) => to_column_response(&with_board(|board| board.column(status))),
        Err(err) => BoardColumnResponse {
            heading: String::new(),
            items: Vec::new(),
            revision: 0,
            message: format!("board_column failed: {err}"),
        },
    }
}

fn with_board<T>(f: impl FnOnce(&mut ProjectBoard) -> T) -> T {
    let mut guard = lock_board();
    f(&mut *guard)
}

fn lock_board() -> MutexGuard<'static, ProjectBoard> {
    BOARD
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn to_column_response(column: &ColumnView) -> BoardColumnResponse {
    let items = column
        .projects()
        .iter()
        .map(to_project_item)
        .collect::<Vec<_>>();
    let message = if items.is_empty() {
        "No projects.".to_string()
    } else {
        format!("{} project(s).", items.len())
    };
    BoardColumnResponse {
        heading: column.heading().to_string(),
        items,
        revision: column.revision(),
        message,
    }
}

fn to_project_item(project: &Project) -> BoardProjectItem {
    BoardProjectItem {
        project_id: project.id().to_string(),
        title: project.title().to_string(),
        description: project.description().to_string(),
        people_label: project.assigned_label(),
        status: project.status().as_str().to_string(),
    }
}
