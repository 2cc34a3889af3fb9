//! Board use-case services.
//!
//! # Responsibility
//! - Compose validation, store and column views into board commands.
//! - Keep UI/FFI layers away from store internals.

pub mod board_service;
