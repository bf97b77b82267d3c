//! Drag-and-drop boundary between presentation and the assignment store.
//!
//! # Responsibility
//! - Parse container tags once, at the boundary.
//! - Map each drag outcome to exactly one store transition or a no-op.

pub mod container;
pub mod drag_resolver;
