//! Core domain logic for the single-day task board.
//! This crate is the single source of truth for assignment invariants.

pub mod logging;
pub mod model;
pub mod resolver;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::hour::{Hour, HOURS_PER_DAY};
pub use model::task::{CatalogError, Task, TaskCatalog, TaskId};
pub use resolver::container::ContainerId;
pub use resolver::drag_resolver::{
    resolve, DragEffect, DragIntent, DragLocation, DragOutcome, DragResolution, DragResolver,
};
pub use store::assignment_store::{AssignmentStore, InMemoryAssignmentStore, InvariantViolation};
pub use store::snapshot::{AssignmentSnapshot, TaskLocation};
pub use store::transition::{RejectedTransition, Transition, TransitionResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
