//! Project form rules applied before `ProjectStore::create`.
//!
//! # Responsibility
//! - Hold the field limits for title, description and headcount.
//! - Turn raw form strings into a checked `ValidProject`.
//!
//! # Invariants
//! - Fields are checked in order title, description, people; the first
//!   failure wins.
//! - A `ValidProject` always satisfies every rule below.

use crate::validation::constraint::{check, ConstraintSet, ConstraintViolation, FieldValue};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const TITLE_MIN_CHARS: usize = 5;
pub const TITLE_MAX_CHARS: usize = 40;
pub const DESCRIPTION_MAX_CHARS: usize = 140;
pub const PEOPLE_MIN: i64 = 1;
pub const PEOPLE_MAX: i64 = 10;

/// User-facing message shown when a submission is rejected.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input, please try again!";

pub fn title_constraints() -> ConstraintSet {
    ConstraintSet::new()
        .required()
        .min_length(TITLE_MIN_CHARS)
        .max_length(TITLE_MAX_CHARS)
}

pub fn description_constraints() -> ConstraintSet {
    ConstraintSet::new()
        .required()
        .max_length(DESCRIPTION_MAX_CHARS)
}

pub fn people_constraints() -> ConstraintSet {
    ConstraintSet::new().required().min(PEOPLE_MIN).max(PEOPLE_MAX)
}

/// Form field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Title,
    Description,
    People,
}

impl ProjectField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }
}

/// Form rejection reasons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectFormError {
    /// A field failed one of its constraints.
    Constraint {
        field: ProjectField,
        violation: ConstraintViolation,
    },
    /// Headcount input is not an integer.
    PeopleNotNumeric(String),
}

impl ProjectFormError {
    pub fn field(&self) -> ProjectField {
        match self {
            Self::Constraint { field, .. } => *field,
            Self::PeopleNotNumeric(_) => ProjectField::People,
        }
    }

    /// Message surfaced to the user; details stay in `Display`.
    pub fn user_message(&self) -> &'static str {
        INVALID_INPUT_MESSAGE
    }
}

impl Display for ProjectFormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constraint { field, violation } => {
                write!(f, "invalid {}: {violation}", field.as_str())
            }
            Self::PeopleNotNumeric(value) => {
                write!(f, "invalid people: `{value}` is not a whole number")
            }
        }
    }
}

impl Error for ProjectFormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Constraint { violation, .. } => Some(violation),
            Self::PeopleNotNumeric(_) => None,
        }
    }
}

/// Raw input as captured from the project form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub people: String,
}

impl ProjectForm {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }

    /// Checks all fields and returns trimmed, parsed values.
    pub fn validate(&self) -> Result<ValidProject, ProjectFormError> {
        check_field(ProjectField::Title, self.title.as_str().into(), &title_constraints())?;
        check_field(
            ProjectField::Description,
            self.description.as_str().into(),
            &description_constraints(),
        )?;

        let people_raw = self.people.trim();
        if people_raw.is_empty() {
            return Err(ProjectFormError::Constraint {
                field: ProjectField::People,
                violation: ConstraintViolation::Required,
            });
        }
        let people = people_raw
            .parse::<i64>()
            .map_err(|_| ProjectFormError::PeopleNotNumeric(people_raw.to_string()))?;
        check_field(ProjectField::People, people.into(), &people_constraints())?;

        // Bounds above keep this in 1..=10.
        let people_count = u32::try_from(people)
            .map_err(|_| ProjectFormError::PeopleNotNumeric(people_raw.to_string()))?;

        Ok(ValidProject {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            people_count,
        })
    }
}

/// Form values that passed every project rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProject {
    pub title: String,
    pub description: String,
    pub people_count: u32,
}

fn check_field(
    field: ProjectField,
    value: FieldValue<'_>,
    constraints: &ConstraintSet,
) -> Result<(), ProjectFormError> {
    check(value, constraints).map_err(|violation| ProjectFormError::Constraint { field, violation })
}
