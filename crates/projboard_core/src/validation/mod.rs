//! Field validation.
//!
//! # Responsibility
//! - Check single field values against declarative constraint sets.
//! - Define the project form rules enforced before a project is created.
//!
//! # Invariants
//! - Validation is pure and never mutates board state.
//! - Constraints that do not apply to a value's type are vacuous.

pub mod constraint;
pub mod project_form;
