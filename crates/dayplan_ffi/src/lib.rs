//! Flutter bridge for the day board core.

pub mod api;
