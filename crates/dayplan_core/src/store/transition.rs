//! Transition results for assignment store mutations.
//!
//! # Responsibility
//! - Describe what an applied transition changed.
//! - Describe why a requested transition was rejected.
//!
//! # Invariants
//! - `Err(RejectedTransition)` always means the state is unchanged.
//! - An applied transition relocates one task or exchanges exactly two.

use crate::model::hour::Hour;
use crate::model::task::TaskId;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type returned by every store mutation.
pub type TransitionResult = Result<Transition, RejectedTransition>;

/// Applied state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Pool task moved into an empty slot.
    Placed { task_id: TaskId, hour: Hour },
    /// Slot occupant moved back into the pool at the effective index.
    Returned {
        task_id: TaskId,
        hour: Hour,
        pool_index: usize,
    },
    /// Slot occupant moved into an empty slot.
    Moved { task_id: TaskId, from: Hour, to: Hour },
    /// Two slot occupants exchanged places.
    Swapped {
        source_task_id: TaskId,
        destination_task_id: TaskId,
        source: Hour,
        destination: Hour,
    },
}

impl Transition {
    /// Stable short name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Placed { .. } => "place",
            Self::Returned { .. } => "return",
            Self::Moved { .. } => "move",
            Self::Swapped { .. } => "swap",
        }
    }
}

impl Display for Transition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Placed { task_id, hour } => write!(f, "task={task_id} hour={hour}"),
            Self::Returned {
                task_id,
                hour,
                pool_index,
            } => write!(f, "task={task_id} hour={hour} pool_index={pool_index}"),
            Self::Moved { task_id, from, to } => {
                write!(f, "task={task_id} from={from} to={to}")
            }
            Self::Swapped {
                source_task_id,
                destination_task_id,
                source,
                destination,
            } => write!(
                f,
                "source_task={source_task_id} destination_task={destination_task_id} source={source} destination={destination}"
            ),
        }
    }
}

/// Requested transition that would break an invariant or is malformed.
///
/// Always handled as a no-op; the variant is diagnostic only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectedTransition {
    /// Pool index does not address a pool task.
    TaskIndexOutOfRange { index: usize, pool_len: usize },
    /// Pool task cannot overwrite an occupied slot.
    SlotOccupied { hour: Hour, occupant: TaskId },
    /// Source slot has no task to move.
    SlotEmpty(Hour),
    /// Source and destination are the same slot.
    SameSlot(Hour),
    /// Container tag is neither the pool nor a valid hour slot.
    MalformedContainer(String),
    /// Container pair has no matching transition (e.g. pool to pool).
    UnsupportedRoute { source: String, destination: String },
}

impl RejectedTransition {
    /// Stable reason code used in log lines.
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::TaskIndexOutOfRange { .. } => "task_index_out_of_range",
            Self::SlotOccupied { .. } => "slot_occupied",
            Self::SlotEmpty(_) => "slot_empty",
            Self::SameSlot(_) => "same_slot",
            Self::MalformedContainer(_) => "malformed_container",
            Self::UnsupportedRoute { .. } => "unsupported_route",
        }
    }
}

impl Display for RejectedTransition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TaskIndexOutOfRange { index, pool_len } => {
                write!(f, "pool index {index} out of range for pool of {pool_len}")
            }
            Self::SlotOccupied { hour, occupant } => {
                write!(f, "hour {hour} is already occupied by {occupant}")
            }
            Self::SlotEmpty(hour) => write!(f, "hour {hour} is empty"),
            Self::SameSlot(hour) => write!(f, "source and destination are both hour {hour}"),
            Self::MalformedContainer(tag) => write!(f, "malformed container id `{tag}`"),
            Self::UnsupportedRoute {
                source,
                destination,
            } => write!(f, "no transition from `{source}` to `{destination}`"),
        }
    }
}

impl Error for RejectedTransition {}

#[cfg(test)]
mod tests {
    use super::{RejectedTransition, Transition};
    use crate::model::hour::Hour;

    #[test]
    fn reason_codes_are_snake_case() {
        let rejected = RejectedTransition::SlotOccupied {
            hour: Hour::new(9).unwrap(),
            occupant: "task-1".to_string(),
        };
        assert_eq!(rejected.reason_code(), "slot_occupied");
        assert_eq!(rejected.to_string(), "hour 9 is already occupied by task-1");
    }

    #[test]
    fn transition_display_is_metadata_only() {
        let moved = Transition::Moved {
            task_id: "task-2".to_string(),
            from: Hour::new(3).unwrap(),
            to: Hour::new(4).unwrap(),
        };
        assert_eq!(moved.kind(), "move");
        assert_eq!(moved.to_string(), "task=task-2 from=3 to=4");
    }
}
