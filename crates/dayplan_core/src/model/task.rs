//! Task domain model and the seeded task catalog.
//!
//! # Responsibility
//! - Define the opaque work item placed on the day board.
//! - Validate the fixed catalog supplied at session start.
//!
//! # Invariants
//! - `id` is stable and unique within one catalog.
//! - `id` and `label` are immutable from the core's perspective.
//! - A catalog never contains two tasks with the same id.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable task identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = String;

/// Opaque work item that can sit in the pool or in one hour slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    /// Stable id used to track the task across moves.
    pub id: TaskId,
    /// Display text. Never logged by core.
    pub label: String,
}

impl Task {
    /// Creates a task with a caller-provided stable id.
    ///
    /// Used by catalog seeding where identity already exists externally.
    pub fn with_id(id: impl Into<TaskId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Catalog seed validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Task id is blank after trim.
    EmptyTaskId { position: usize },
    /// Same id appears more than once in the seed.
    DuplicateTaskId(TaskId),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTaskId { position } => {
                write!(f, "task id must not be blank (catalog position {position})")
            }
            Self::DuplicateTaskId(id) => write!(f, "duplicate task id in catalog: {id}"),
        }
    }
}

impl Error for CatalogError {}

/// Fixed list of tasks seeded once per session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCatalog {
    tasks: Vec<Task>,
}

impl TaskCatalog {
    /// Validates and normalizes a seed list.
    ///
    /// # Errors
    /// - `EmptyTaskId` when an id is blank after trim.
    /// - `DuplicateTaskId` when two tasks share an id after trim.
    pub fn try_new(tasks: impl IntoIterator<Item = Task>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut normalized = Vec::new();
        for (position, task) in tasks.into_iter().enumerate() {
            let id = task.id.trim();
            if id.is_empty() {
                return Err(CatalogError::EmptyTaskId { position });
            }
            if !seen.insert(id.to_string()) {
                return Err(CatalogError::DuplicateTaskId(id.to_string()));
            }
            normalized.push(Task::with_id(id, task.label));
        }
        Ok(Self { tasks: normalized })
    }

    /// Demo catalog shown by a fresh board.
    pub fn default_catalog() -> Self {
        Self {
            tasks: (1..=3)
                .map(|n| Task::with_id(format!("task-{n}"), format!("Task {n}")))
                .collect(),
        }
    }

    /// Tasks in seed order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of seeded tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the seed is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns whether the catalog knows `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.tasks.iter().any(|task| task.id == id)
    }
}
