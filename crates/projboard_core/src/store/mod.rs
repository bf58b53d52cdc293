//! In-memory project state and change notification.
//!
//! # Responsibility
//! - Hold the authoritative project sequence for one board.
//! - Fan out full snapshots to subscribers after every accepted mutation.
//!
//! # Invariants
//! - Only the store mutates project status.
//! - Subscribers never see live storage, only owned snapshots.
//! - Mutations from inside a subscriber wait for the current round to finish.

pub mod project_store;
pub mod shared;
