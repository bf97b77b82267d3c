//! Assignment store contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the pool and the 24 hour slots for one session.
//! - Expose the only legal transitions between task locations.
//!
//! # Invariants
//! - Every seeded task lives in exactly one place: the pool or one slot.
//! - A slot holds at most one task; the slot set is fixed at 24.
//! - Mutations are total: a rejected transition leaves state unchanged.

use crate::model::hour::{Hour, HOURS_PER_DAY};
use crate::model::task::{Task, TaskCatalog, TaskId};
use crate::store::snapshot::{AssignmentSnapshot, TaskLocation};
use crate::store::transition::{RejectedTransition, Transition, TransitionResult};
use log::{debug, info};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store interface used by the drag resolver.
pub trait AssignmentStore {
    /// Moves the pool task at `task_index` into `hour`.
    ///
    /// Rejected when `hour` is occupied or `task_index` is out of range.
    fn place_from_pool(&mut self, task_index: usize, hour: Hour) -> TransitionResult;
    /// Moves the occupant of `hour` into the pool at `insert_index`.
    ///
    /// `insert_index` is clamped to `[0, pool.len()]`. Rejected when `hour`
    /// is empty.
    fn return_to_pool(&mut self, hour: Hour, insert_index: usize) -> TransitionResult;
    /// Moves the occupant of `source` into `destination`, swapping when
    /// `destination` is occupied.
    ///
    /// Rejected when both hours are equal or `source` is empty.
    fn move_or_swap(&mut self, source: Hour, destination: Hour) -> TransitionResult;
    /// Returns an owned copy of the current state. Side-effect free.
    fn snapshot(&self) -> AssignmentSnapshot;
}

impl<S: AssignmentStore + ?Sized> AssignmentStore for &mut S {
    fn place_from_pool(&mut self, task_index: usize, hour: Hour) -> TransitionResult {
        (**self).place_from_pool(task_index, hour)
    }

    fn return_to_pool(&mut self, hour: Hour, insert_index: usize) -> TransitionResult {
        (**self).return_to_pool(hour, insert_index)
    }

    fn move_or_swap(&mut self, source: Hour, destination: Hour) -> TransitionResult {
        (**self).move_or_swap(source, destination)
    }

    fn snapshot(&self) -> AssignmentSnapshot {
        (**self).snapshot()
    }
}

/// Invariant check failures reported by `InMemoryAssignmentStore::validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Seeded task is neither in the pool nor in any slot.
    TaskMissing(TaskId),
    /// Seeded task appears in more than one place.
    TaskDuplicated { task_id: TaskId, occurrences: usize },
    /// State holds a task the catalog never seeded.
    UnknownTask(TaskId),
}

impl Display for InvariantViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TaskMissing(id) => write!(f, "task {id} is not placed anywhere"),
            Self::TaskDuplicated {
                task_id,
                occurrences,
            } => write!(f, "task {task_id} is placed {occurrences} times"),
            Self::UnknownTask(id) => write!(f, "task {id} is not in the catalog"),
        }
    }
}

impl Error for InvariantViolation {}

/// Session-scoped assignment state held in memory.
#[derive(Debug, Clone)]
pub struct InMemoryAssignmentStore {
    catalog: TaskCatalog,
    pool: Vec<Task>,
    slots: [Option<Task>; HOURS_PER_DAY],
}

impl InMemoryAssignmentStore {
    /// Seeds a board with every catalog task in the pool and all slots empty.
    pub fn new(catalog: TaskCatalog) -> Self {
        let pool = catalog.tasks().to_vec();
        info!(
            "event=board_seed module=store status=ok tasks={} hours={}",
            pool.len(),
            HOURS_PER_DAY
        );
        Self {
            catalog,
            pool,
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Unassigned tasks in display order.
    pub fn pool(&self) -> &[Task] {
        &self.pool
    }

    /// Task assigned to `hour`, if any.
    pub fn occupant(&self, hour: Hour) -> Option<&Task> {
        self.slots[hour.index()].as_ref()
    }

    /// Returns whether `hour` holds a task.
    pub fn is_occupied(&self, hour: Hour) -> bool {
        self.slots[hour.index()].is_some()
    }

    /// Empty hours in ascending order.
    pub fn free_hours(&self) -> impl Iterator<Item = Hour> + '_ {
        Hour::all().filter(|hour| !self.is_occupied(*hour))
    }

    /// Number of tasks currently on the board (pool plus slots).
    pub fn task_count(&self) -> usize {
        self.pool.len() + self.slots.iter().flatten().count()
    }

    /// Finds the single location of `task_id`.
    pub fn locate(&self, task_id: &str) -> Option<TaskLocation> {
        if let Some(index) = self.pool.iter().position(|task| task.id == task_id) {
            return Some(TaskLocation::Pool(index));
        }
        Hour::all()
            .find(|hour| {
                self.occupant(*hour)
                    .is_some_and(|task| task.id == task_id)
            })
            .map(TaskLocation::Slot)
    }

    /// Re-checks that every catalog task is placed exactly once.
    ///
    /// # Errors
    /// - `UnknownTask` when state holds a task outside the catalog.
    /// - `TaskDuplicated` when a task is placed more than once.
    /// - `TaskMissing` when a catalog task is placed nowhere.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let mut occurrences: HashMap<&str, usize> = HashMap::new();
        for task in self.pool.iter().chain(self.slots.iter().flatten()) {
            if !self.catalog.contains(&task.id) {
                return Err(InvariantViolation::UnknownTask(task.id.clone()));
            }
            *occurrences.entry(task.id.as_str()).or_default() += 1;
        }

        for task in self.catalog.tasks() {
            match occurrences.get(task.id.as_str()).copied().unwrap_or(0) {
                0 => return Err(InvariantViolation::TaskMissing(task.id.clone())),
                1 => {}
                count => {
                    return Err(InvariantViolation::TaskDuplicated {
                        task_id: task.id.clone(),
                        occurrences: count,
                    })
                }
            }
        }
        Ok(())
    }

    fn finish(&self, op: &'static str, result: TransitionResult) -> TransitionResult {
        match &result {
            Ok(transition) => {
                info!(
                    "event=transition module=store op={} status=ok kind={} {}",
                    op,
                    transition.kind(),
                    transition
                );
                debug_assert_eq!(self.validate(), Ok(()));
            }
            Err(rejected) => {
                debug!(
                    "event=transition module=store op={} status=rejected reason={} detail={}",
                    op,
                    rejected.reason_code(),
                    rejected
                );
            }
        }
        result
    }
}

impl Default for InMemoryAssignmentStore {
    fn default() -> Self {
        Self::new(TaskCatalog::default_catalog())
    }
}

impl AssignmentStore for InMemoryAssignmentStore {
    fn place_from_pool(&mut self, task_index: usize, hour: Hour) -> TransitionResult {
        const OP: &str = "place_from_pool";

        if let Some(occupant) = self.occupant(hour) {
            let rejected = RejectedTransition::SlotOccupied {
                hour,
                occupant: occupant.id.clone(),
            };
            return self.finish(OP, Err(rejected));
        }
        if task_index >= self.pool.len() {
            let rejected = RejectedTransition::TaskIndexOutOfRange {
                index: task_index,
                pool_len: self.pool.len(),
            };
            return self.finish(OP, Err(rejected));
        }

        let task = self.pool.remove(task_index);
        let task_id = task.id.clone();
        self.slots[hour.index()] = Some(task);
        self.finish(OP, Ok(Transition::Placed { task_id, hour }))
    }

    fn return_to_pool(&mut self, hour: Hour, insert_index: usize) -> TransitionResult {
        const OP: &str = "return_to_pool";

        let Some(task) = self.slots[hour.index()].take() else {
            return self.finish(OP, Err(RejectedTransition::SlotEmpty(hour)));
        };

        let pool_index = insert_index.min(self.pool.len());
        let task_id = task.id.clone();
        self.pool.insert(pool_index, task);
        self.finish(
            OP,
            Ok(Transition::Returned {
                task_id,
                hour,
                pool_index,
            }),
        )
    }

    fn move_or_swap(&mut self, source: Hour, destination: Hour) -> TransitionResult {
        const OP: &str = "move_or_swap";

        if source == destination {
            return self.finish(OP, Err(RejectedTransition::SameSlot(source)));
        }
        let Some(source_task_id) = self.occupant(source).map(|task| task.id.clone()) else {
            return self.finish(OP, Err(RejectedTransition::SlotEmpty(source)));
        };

        let transition = match self.occupant(destination).map(|task| task.id.clone()) {
            None => {
                self.slots[destination.index()] = self.slots[source.index()].take();
                Transition::Moved {
                    task_id: source_task_id,
                    from: source,
                    to: destination,
                }
            }
            Some(destination_task_id) => {
                self.slots.swap(source.index(), destination.index());
                Transition::Swapped {
                    source_task_id,
                    destination_task_id,
                    source,
                    destination,
                }
            }
        };
        self.finish(OP, Ok(transition))
    }

    fn snapshot(&self) -> AssignmentSnapshot {
        AssignmentSnapshot {
            pool: self.pool.clone(),
            schedule: Hour::all()
                .map(|hour| (hour, self.occupant(hour).cloned()))
                .collect(),
        }
    }
}
