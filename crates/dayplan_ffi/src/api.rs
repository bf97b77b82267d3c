//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the day board to Dart via FRB as sync, string/struct calls.
//! - Own the single process-wide board session.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Drag handling never reports failure; rejected drops snap back.
//! - Every board response carries the full pool and all 24 slots.

use dayplan_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AssignmentSnapshot, DragEffect, DragLocation, DragOutcome, DragResolver,
    InMemoryAssignmentStore, Task, TaskCatalog,
};
use log::warn;
use std::sync::{Mutex, OnceLock, PoisonError};

type BoardSession = DragResolver<InMemoryAssignmentStore>;

static BOARD_SESSION: OnceLock<Mutex<BoardSession>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Catalog entry supplied by the UI when (re)seeding the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardTaskInput {
    pub id: String,
    pub label: String,
}

/// Task as rendered by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardTaskItem {
    pub id: String,
    pub label: String,
}

/// One hour row of the day view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSlotItem {
    /// Hour of day (`0..=23`).
    pub hour: u32,
    /// Row header, e.g. `9:00`.
    pub label: String,
    /// Occupant, `None` when the slot is empty.
    pub task: Option<BoardTaskItem>,
}

/// Board state envelope returned by every board call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardResponse {
    /// Whether the request itself was accepted.
    pub ok: bool,
    /// Whether the assignment state changed.
    pub changed: bool,
    /// Human-readable response message for diagnostics.
    pub message: String,
    /// Unassigned tasks in display order.
    pub pool: Vec<BoardTaskItem>,
    /// All hour slots in ascending order.
    pub slots: Vec<BoardSlotItem>,
}

/// Replaces the session board with a freshly seeded one.
///
/// # FFI contract
/// - On invalid catalog (blank or duplicate ids) the current board is kept
///   and `ok=false` is returned with the reason.
#[flutter_rust_bridge::frb(sync)]
pub fn board_reset(catalog: Vec<BoardTaskInput>) -> BoardResponse {
    let tasks = catalog
        .into_iter()
        .map(|input| Task::with_id(input.id, input.label));
    match TaskCatalog::try_new(tasks) {
        Ok(catalog) => reseed(catalog),
        Err(err) => with_board(|board| {
            warn!("event=board_reset module=ffi status=error error={err}");
            to_board_response(false, false, format!("board_reset failed: {err}"), &board.snapshot())
        }),
    }
}

/// Replaces the session board with the demo catalog.
#[flutter_rust_bridge::frb(sync)]
pub fn board_reset_demo() -> BoardResponse {
    reseed(TaskCatalog::default_catalog())
}

/// Returns the current board without changing it.
#[flutter_rust_bridge::frb(sync)]
pub fn board_snapshot() -> BoardResponse {
    with_board(|board| to_board_response(true, false, "Board loaded.", &board.snapshot()))
}

/// Applies one finished drag gesture.
///
/// Input semantics:
/// - `*_container`: `pool` or `hour-<h>`.
/// - `destination_container = None` means the drop was cancelled.
/// - `destination_index = None` is treated as index 0.
///
/// # FFI contract
/// - Never fails; malformed or conflicting drops return `changed=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_handle_drag(
    source_container: String,
    source_index: u32,
    destination_container: Option<String>,
    destination_index: Option<u32>,
) -> BoardResponse {
    let outcome = DragOutcome {
        source: DragLocation::new(source_container, source_index as usize),
        destination: destination_container.map(|container| {
            DragLocation::new(container, destination_index.unwrap_or(0) as usize)
        }),
    };

    with_board(|board| {
        let resolution = board.handle_drag_outcome(&outcome);
        let message = match &resolution.effect {
            DragEffect::Applied(transition) => format!("Applied {}.", transition.kind()),
            DragEffect::Rejected(rejected) => format!("Drop ignored: {rejected}."),
            DragEffect::Cancelled => "Drop cancelled.".to_string(),
        };
        to_board_response(
            true,
            resolution.effect.changed(),
            message,
            &resolution.snapshot,
        )
    })
}

fn reseed(catalog: TaskCatalog) -> BoardResponse {
    with_board(|board| {
        *board = DragResolver::new(InMemoryAssignmentStore::new(catalog));
        to_board_response(true, true, "Board seeded.", &board.snapshot())
    })
}

fn with_board<T>(f: impl FnOnce(&mut BoardSession) -> T) -> T {
    let session = BOARD_SESSION
        .get_or_init(|| Mutex::new(DragResolver::new(InMemoryAssignmentStore::default())));
    // Store mutations are all-or-nothing, so a poisoned board is still consistent.
    let mut guard = session.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

fn to_board_response(
    ok: bool,
    changed: bool,
    message: impl Into<String>,
    snapshot: &AssignmentSnapshot,
) -> BoardResponse {
    BoardResponse {
        ok,
        changed,
        message: message.into(),
        pool: snapshot.pool.iter().map(to_board_task_item).collect(),
        slots: snapshot
            .schedule
            .iter()
            .map(|(hour, task)| BoardSlotItem {
                hour: u32::from(hour.value()),
                label: hour.label(),
                task: task.as_ref().map(to_board_task_item),
            })
            .collect(),
    }
}

fn to_board_task_item(task: &Task) -> BoardTaskItem {
    BoardTaskItem {
        id: task.id.clone(),
        label: task.label.clone(),
    }
}
