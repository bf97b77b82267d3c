//! Immutable read model handed to the presentation layer.

use crate::model::hour::Hour;
use crate::model::task::Task;
use serde::Serialize;
use std::collections::BTreeMap;

/// Where one task currently lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "location", content = "at", rename_all = "snake_case")]
pub enum TaskLocation {
    /// Unassigned, at this pool position.
    Pool(usize),
    /// Assigned to this hour.
    Slot(Hour),
}

/// Owned copy of the pool and the full schedule.
///
/// `schedule` always contains one entry per hour of the day; empty slots map
/// to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentSnapshot {
    pub pool: Vec<Task>,
    pub schedule: BTreeMap<Hour, Option<Task>>,
}

impl AssignmentSnapshot {
    /// Occupant of `hour`, if any.
    pub fn occupant(&self, hour: Hour) -> Option<&Task> {
        self.schedule.get(&hour).and_then(Option::as_ref)
    }

    /// Occupied slots in hour order.
    pub fn assigned(&self) -> impl Iterator<Item = (Hour, &Task)> {
        self.schedule
            .iter()
            .filter_map(|(hour, task)| task.as_ref().map(|task| (*hour, task)))
    }

    /// Pool task ids in display order.
    pub fn pool_ids(&self) -> Vec<&str> {
        self.pool.iter().map(|task| task.id.as_str()).collect()
    }
}
