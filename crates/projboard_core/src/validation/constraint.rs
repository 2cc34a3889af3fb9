//! Declarative single-field constraints.
//!
//! # Invariants
//! - Constraints are conjunctive; an absent constraint always passes.
//! - Length bounds apply to text only and compare the trimmed char count.
//! - Numeric bounds apply to numbers only and compare the raw value.
//! - A number is always present for `required`, zero included.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Value captured from one input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(i64),
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// Optional rules applied to one field value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, value: usize) -> Self {
        self.min_length = Some(value);
        self
    }

    pub fn max_length(mut self, value: usize) -> Self {
        self.max_length = Some(value);
        self
    }

    pub fn min(mut self, value: i64) -> Self {
        self.min = Some(value);
        self
    }

    pub fn max(mut self, value: i64) -> Self {
        self.max = Some(value);
        self
    }
}

/// First constraint a value failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    Required,
    MinLength { min: usize, actual: usize },
    MaxLength { max: usize, actual: usize },
    Min { min: i64, actual: i64 },
    Max { max: i64, actual: i64 },
}

impl Display for ConstraintViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "value is required"),
            Self::MinLength { min, actual } => {
                write!(f, "length {actual} is shorter than {min}")
            }
            Self::MaxLength { max, actual } => {
                write!(f, "length {actual} is longer than {max}")
            }
            Self::Min { min, actual } => write!(f, "value {actual} is below {min}"),
            Self::Max { max, actual } => write!(f, "value {actual} is above {max}"),
        }
    }
}

impl Error for ConstraintViolation {}

/// Returns whether `value` satisfies every constraint in `constraints`.
pub fn validate(value: FieldValue<'_>, constraints: &ConstraintSet) -> bool {
    check(value, constraints).is_ok()
}

/// Checks `value` and reports the first violated constraint.
///
/// Order: required, min_length, max_length, min, max.
pub fn check(value: FieldValue<'_>, constraints: &ConstraintSet) -> Result<(), ConstraintViolation> {
    match value {
        FieldValue::Text(text) => check_text(text, constraints),
        FieldValue::Number(number) => check_number(number, constraints),
    }
}

fn check_text(text: &str, constraints: &ConstraintSet) -> Result<(), ConstraintViolation> {
    let trimmed = text.trim();
    if constraints.required && trimmed.is_empty() {
        return Err(ConstraintViolation::Required);
    }

    let length = trimmed.chars().count();
    if let Some(min) = constraints.min_length {
        if length < min {
            return Err(ConstraintViolation::MinLength {
                min,
                actual: length,
            });
        }
    }
    if let Some(max) = constraints.max_length {
        if length > max {
            return Err(ConstraintViolation::MaxLength {
                max,
                actual: length,
            });
        }
    }
    Ok(())
}

fn check_number(number: i64, constraints: &ConstraintSet) -> Result<(), ConstraintViolation> {
    if let Some(min) = constraints.min {
        if number < min {
            return Err(ConstraintViolation::Min {
                min,
                actual: number,
            });
        }
    }
    if let Some(max) = constraints.max {
        if number > max {
            return Err(ConstraintViolation::Max {
                max,
                actual: number,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{check, validate, ConstraintSet, ConstraintViolation, FieldValue};

    #[test]
    fn empty_constraint_set_accepts_anything() {
        let none = ConstraintSet::new();
        assert!(validate(FieldValue::Text(""), &none));
        assert!(validate(FieldValue::Number(-40), &none));
    }

    #[test]
    fn required_text_rejects_whitespace_only() {
        let rules = ConstraintSet::new().required();
        assert_eq!(
            check(FieldValue::Text("   \t"), &rules),
            Err(ConstraintViolation::Required)
        );
        assert!(validate(FieldValue::Text(" x "), &rules));
    }

    #[test]
    fn length_bounds_use_trimmed_char_count() {
        let rules = ConstraintSet::new().min_length(3).max_length(4);
        assert!(validate(FieldValue::Text("  abc  "), &rules));
        assert!(validate(FieldValue::Text("äöüß"), &rules));
        assert_eq!(
            check(FieldValue::Text(" ab "), &rules),
            Err(ConstraintViolation::MinLength { min: 3, actual: 2 })
        );
        assert_eq!(
            check(FieldValue::Text("abcde"), &rules),
            Err(ConstraintViolation::MaxLength { max: 4, actual: 5 })
        );
    }

    #[test]
    fn type_mismatched_constraints_are_vacuous() {
        let length_rules = ConstraintSet::new().min_length(5).max_length(6);
        assert!(validate(FieldValue::Number(1), &length_rules));

        let numeric_rules = ConstraintSet::new().min(10).max(20);
        assert!(validate(FieldValue::Text("3"), &numeric_rules));
    }

    #[test]
    fn zero_counts_as_present_for_required_numbers() {
        let rules = ConstraintSet::new().required();
        assert!(validate(FieldValue::Number(0), &rules));
    }

    #[test]
    fn required_is_reported_before_length() {
        let rules = ConstraintSet::new().required().min_length(5);
        assert_eq!(
            check(FieldValue::Text(""), &rules),
            Err(ConstraintViolation::Required)
        );
    }
}
