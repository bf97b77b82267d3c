//! Assignment state ownership and transitions.
//!
//! # Responsibility
//! - Hold the pool and hour slots for one session.
//! - Expose total transitions and an immutable snapshot.
//!
//! # Invariants
//! - Store code never parses container tags or calls the resolver.
//! - Rejected transitions are reported as values, never as panics.

pub mod assignment_store;
pub mod snapshot;
pub mod transition;
