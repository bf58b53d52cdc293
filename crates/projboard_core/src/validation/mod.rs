//! Input validation.
//!
//! # Responsibility
//! - Evaluate field constraints for raw user input.
//! - Bundle per-field constraints into configurable rule profiles.
//!
//! # Invariants
//! - Validation is pure: same input, same verdict, no side effects.
//! - An unset constraint is never checked.

pub mod input_rules;
pub mod validatable;
