//! Flutter-facing bindings for the project board core.

pub mod api;
