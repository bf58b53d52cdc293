//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record rendered by every board column.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Projects are never removed; only their status changes.

pub mod project;
