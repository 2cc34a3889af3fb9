//! Per-status column projection.
//!
//! # Invariants
//! - A column only lists projects whose status equals its own.
//! - Column order follows store insertion order.
//! - `revision` increases by one per refresh.

use crate::model::project::{Project, ProjectStatus};

/// Filtered list rendered by one board column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView {
    status: ProjectStatus,
    projects: Vec<Project>,
    revision: u64,
}

impl ColumnView {
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            projects: Vec::new(),
            revision: 0,
        }
    }

    /// Re-derives the column from a full store snapshot.
    pub fn refresh(&mut self, all: &[Project]) {
        self.projects = all
            .iter()
            .filter(|project| project.status() == self.status)
            .cloned()
            .collect();
        self.revision += 1;
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn heading(&self) -> &'static str {
        self.status.heading()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Number of snapshots this column has consumed.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
