//! Domain model for the single-day task board.
//!
//! # Responsibility
//! - Define the task record and the fixed hour slot ids.
//! - Keep identity and slot bounds checks out of the store.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Hour ids are always in `0..=23`.

pub mod hour;
pub mod task;
