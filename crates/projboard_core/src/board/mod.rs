//! Board-side projections of store data.
//!
//! # Responsibility
//! - Derive per-status column lists from store snapshots.
//! - Encode and decode the plain-text drag payload.

pub mod column;
pub mod drag;
