//! Project store and observer fan-out.
//!
//! # Responsibility
//! - Own the ordered project sequence for one running board.
//! - Notify observers with a fresh snapshot after each accepted mutation.
//!
//! # Invariants
//! - Only the store mutates `Project::status`.
//! - No-op transitions never notify.

pub mod project_store;
