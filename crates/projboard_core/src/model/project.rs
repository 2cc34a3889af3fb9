//! Project domain model.
//!
//! # Responsibility
//! - Define the project record shared by the active/finished columns.
//! - Provide stable string forms for status values used by drag targets.
//!
//! # Invariants
//! - `id` is assigned once by the store and never reused.
//! - Fields are read-only outside this crate; only the store writes `status`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for one project card.
pub type ProjectId = Uuid;

/// Column a project currently lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work in progress. Every project starts here.
    Active,
    /// Work completed.
    Finished,
}

/// Status string for the active column.
pub const PROJECT_STATUS_ACTIVE: &str = "active";
/// Status string for the finished column.
pub const PROJECT_STATUS_FINISHED: &str = "finished";

impl ProjectStatus {
    /// All statuses in column display order.
    pub const ALL: [ProjectStatus; 2] = [ProjectStatus::Active, ProjectStatus::Finished];

    /// Stable string id used by drop targets and FFI callers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => PROJECT_STATUS_ACTIVE,
            Self::Finished => PROJECT_STATUS_FINISHED,
        }
    }

    /// Column heading rendered above the list.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE PROJECTS",
            Self::Finished => "FINISHED PROJECTS",
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status string parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseProjectStatusError(pub String);

impl Display for ParseProjectStatusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported project status `{}`; expected active|finished",
            self.0
        )
    }
}

impl Error for ParseProjectStatusError {}

impl FromStr for ProjectStatus {
    type Err = ParseProjectStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            PROJECT_STATUS_ACTIVE => Ok(Self::Active),
            PROJECT_STATUS_FINISHED => Ok(Self::Finished),
            other => Err(ParseProjectStatusError(other.to_string())),
        }
    }
}

/// Canonical project record.
///
/// Instances only come from `ProjectStore::create`; callers receive clones
/// through store reads and observer snapshots. Serialize-only: the wire
/// shape is output, never a way to build a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    people_count: u32,
    status: ProjectStatus,
}

impl Project {
    pub(crate) fn new(
        id: ProjectId,
        title: String,
        description: String,
        people_count: u32,
    ) -> Self {
        Self {
            id,
            title,
            description,
            people_count,
            status: ProjectStatus::Active,
        }
    }

    pub(crate) fn set_status(&mut self, status: ProjectStatus) {
        self.status = status;
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn people_count(&self) -> u32 {
        self.people_count
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Headcount line shown on a project card.
    pub fn assigned_label(&self) -> String {
        if self.people_count == 1 {
            "1 person assigned".to_string()
        } else {
            format!("{} persons assigned", self.people_count)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Project, ProjectStatus};
    use uuid::Uuid;

    #[test]
    fn new_project_starts_active() {
        let project = Project::new(Uuid::new_v4(), "title".into(), "desc".into(), 2);
        assert_eq!(project.status(), ProjectStatus::Active);
    }

    #[test]
    fn assigned_label_uses_singular_for_one_person() {
        let one = Project::new(Uuid::new_v4(), "solo".into(), "d".into(), 1);
        let many = Project::new(Uuid::new_v4(), "team".into(), "d".into(), 4);
        assert_eq!(one.assigned_label(), "1 person assigned");
        assert_eq!(many.assigned_label(), "4 persons assigned");
    }

    #[test]
    fn status_parses_trimmed_lowercase_only() {
        assert_eq!(
            " finished ".parse::<ProjectStatus>().expect("finished parse"),
            ProjectStatus::Finished
        );
        assert_eq!(
            "active".parse::<ProjectStatus>().expect("active parse"),
            ProjectStatus::Active
        );
        assert!("Active".parse::<ProjectStatus>().is_err());
        assert!("".parse::<ProjectStatus>().is_err());
    }
}
