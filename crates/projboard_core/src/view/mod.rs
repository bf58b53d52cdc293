//! Text views over a shared project store.
//!
//! # Responsibility
//! - Render projects per status column and accept form input.
//! - Translate drops onto a column into store status transitions.
//!
//! # Invariants
//! - Views never mutate records directly; every change goes through the store.
//! - `configure` runs once, when the view is attached to a board.

pub mod board;
pub mod input;
pub mod list;

/// Capability contract for board components.
pub trait Component {
    /// Wires subscriptions and handlers. Called once on attach.
    fn configure(&mut self);
    /// Renders the component as plain text.
    fn render(&self) -> String;
}

/// Configures `component` and hands it back, ready to render.
pub fn attach<C: Component>(mut component: C) -> C {
    component.configure();
    component
}
