//! Board domain model.
//!
//! # Responsibility
//! - Define the canonical project record rendered by both board columns.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Projects are never deleted; only `status` changes after creation.

pub mod project;
