//! Core domain logic for the project board.
//! This crate is the single source of truth for board invariants.

pub mod board;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod validation;

pub use board::column::ColumnView;
pub use board::drag::DragPayload;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::project::{ParseProjectStatusError, Project, ProjectId, ProjectStatus};
pub use service::board_service::ProjectBoard;
pub use store::project_store::{ProjectObserver, ProjectStore, TransitionOutcome};
pub use validation::constraint::{check, validate, ConstraintSet, ConstraintViolation, FieldValue};
pub use validation::project_form::{
    ProjectField, ProjectForm, ProjectFormError, ValidProject, INVALID_INPUT_MESSAGE,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
