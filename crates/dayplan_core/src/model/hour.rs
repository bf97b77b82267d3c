//! Hour slot identifiers.
//!
//! # Responsibility
//! - Represent one of the fixed hour-of-day slots of a single day.
//!
//! # Invariants
//! - An `Hour` value is always in `0..HOURS_PER_DAY`.
//! - The set of hours never changes for the lifetime of the process.

use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Number of single-task slots in one day.
pub const HOURS_PER_DAY: usize = 24;

/// One hour-of-day slot id (`0..=23`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Hour(u8);

impl Hour {
    /// First slot of the day.
    pub const MIDNIGHT: Hour = Hour(0);

    /// Returns `None` when `value` is not a valid hour of day.
    pub fn new(value: u8) -> Option<Self> {
        if usize::from(value) < HOURS_PER_DAY {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Raw hour number.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Position of this hour in a day-sized array.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Iterates every hour of the day in ascending order.
    pub fn all() -> impl Iterator<Item = Hour> {
        (0..HOURS_PER_DAY as u8).map(Hour)
    }

    /// Slot header text, e.g. `9:00`.
    pub fn label(self) -> String {
        format!("{}:00", self.0)
    }
}

impl Display for Hour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Hour {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Hour::new)
            .ok_or(value)
    }
}
