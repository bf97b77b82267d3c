//! Drag outcome classification and application.
//!
//! # Responsibility
//! - Translate raw drag outcomes into one store transition.
//! - Degrade every malformed or conflicting outcome to "no visible change".
//!
//! # Invariants
//! - Classification is evaluated in a fixed order; first match wins.
//! - The resolver never panics or returns an error to its caller.
//! - The resolver keeps no state beyond the store it drives.

use crate::model::hour::Hour;
use crate::resolver::container::ContainerId;
use crate::store::assignment_store::AssignmentStore;
use crate::store::snapshot::AssignmentSnapshot;
use crate::store::transition::{RejectedTransition, Transition};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// One end of a drag gesture: container tag plus item position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragLocation {
    /// `pool` or `hour-<h>`.
    pub container: String,
    /// Item position inside the container.
    pub index: usize,
}

impl DragLocation {
    pub fn new(container: impl Into<String>, index: usize) -> Self {
        Self {
            container: container.into(),
            index,
        }
    }
}

/// Resolved drag gesture as delivered by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragOutcome {
    pub source: DragLocation,
    /// `None` when the drop was cancelled or landed outside any container.
    #[serde(default)]
    pub destination: Option<DragLocation>,
}

impl DragOutcome {
    pub fn new(source: DragLocation, destination: DragLocation) -> Self {
        Self {
            source,
            destination: Some(destination),
        }
    }

    /// Drop released outside any droppable area.
    pub fn cancelled(source: DragLocation) -> Self {
        Self {
            source,
            destination: None,
        }
    }
}

/// Closed set of things a drag outcome can mean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragIntent {
    /// No destination.
    Cancelled,
    PlaceFromPool { task_index: usize, hour: Hour },
    ReturnToPool { hour: Hour, insert_index: usize },
    MoveOrSwap { source: Hour, destination: Hour },
    /// Outcome could not be mapped to any transition.
    Rejected(RejectedTransition),
}

impl DragIntent {
    /// Stable short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cancelled => "cancelled",
            Self::PlaceFromPool { .. } => "place_from_pool",
            Self::ReturnToPool { .. } => "return_to_pool",
            Self::MoveOrSwap { .. } => "move_or_swap",
            Self::Rejected(_) => "rejected",
        }
    }
}

/// What applying an intent did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEffect {
    Cancelled,
    Applied(Transition),
    Rejected(RejectedTransition),
}

impl DragEffect {
    /// Returns whether the assignment state changed.
    pub fn changed(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Full result of handling one drag outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragResolution {
    pub intent: DragIntent,
    pub effect: DragEffect,
    /// State after the outcome was handled, ready to render.
    pub snapshot: AssignmentSnapshot,
}

/// Classifies one drag outcome without touching any state.
pub fn resolve(outcome: &DragOutcome) -> DragIntent {
    let Some(destination) = outcome.destination.as_ref() else {
        return DragIntent::Cancelled;
    };

    let source_container = match ContainerId::parse(&outcome.source.container) {
        Ok(container) => container,
        Err(rejected) => return DragIntent::Rejected(rejected),
    };
    let destination_container = match ContainerId::parse(&destination.container) {
        Ok(container) => container,
        Err(rejected) => return DragIntent::Rejected(rejected),
    };

    match (source_container, destination_container) {
        (ContainerId::Pool, ContainerId::Hour(hour)) => DragIntent::PlaceFromPool {
            task_index: outcome.source.index,
            hour,
        },
        (ContainerId::Hour(hour), ContainerId::Pool) => DragIntent::ReturnToPool {
            hour,
            insert_index: destination.index,
        },
        (ContainerId::Hour(from), ContainerId::Hour(to)) => DragIntent::MoveOrSwap {
            source: from,
            destination: to,
        },
        (ContainerId::Pool, ContainerId::Pool) => {
            DragIntent::Rejected(RejectedTransition::UnsupportedRoute {
                source: source_container.tag(),
                destination: destination_container.tag(),
            })
        }
    }
}

/// Drag-and-drop use-case facade over an assignment store.
pub struct DragResolver<S: AssignmentStore> {
    store: S,
}

impl<S: AssignmentStore> DragResolver<S> {
    /// Creates resolver driving the provided store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read access to the driven store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current state for rendering.
    pub fn snapshot(&self) -> AssignmentSnapshot {
        self.store.snapshot()
    }

    /// Classifies and applies one drag outcome.
    ///
    /// Never fails: rejected and cancelled outcomes leave state unchanged and
    /// are reported through `DragResolution::effect`.
    pub fn handle_drag_outcome(&mut self, outcome: &DragOutcome) -> DragResolution {
        let intent = resolve(outcome);
        let effect = self.apply(&intent);

        match &effect {
            DragEffect::Applied(transition) => info!(
                "event=drag_outcome module=resolver intent={} status=applied kind={}",
                intent.name(),
                transition.kind()
            ),
            DragEffect::Rejected(rejected) => debug!(
                "event=drag_outcome module=resolver intent={} status=rejected reason={}",
                intent.name(),
                rejected.reason_code()
            ),
            DragEffect::Cancelled => debug!(
                "event=drag_outcome module=resolver intent={} status=cancelled",
                intent.name()
            ),
        }

        DragResolution {
            intent,
            effect,
            snapshot: self.store.snapshot(),
        }
    }

    /// Applies an already classified intent.
    pub fn apply(&mut self, intent: &DragIntent) -> DragEffect {
        let result = match intent {
            DragIntent::Cancelled => return DragEffect::Cancelled,
            DragIntent::Rejected(rejected) => return DragEffect::Rejected(rejected.clone()),
            DragIntent::PlaceFromPool { task_index, hour } => {
                self.store.place_from_pool(*task_index, *hour)
            }
            DragIntent::ReturnToPool { hour, insert_index } => {
                self.store.return_to_pool(*hour, *insert_index)
            }
            DragIntent::MoveOrSwap {
                source,
                destination,
            } => self.store.move_or_swap(*source, *destination),
        };

        match result {
            Ok(transition) => DragEffect::Applied(transition),
            Err(rejected) => DragEffect::Rejected(rejected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve, DragIntent, DragLocation, DragOutcome};
    use crate::model::hour::Hour;
    use crate::store::transition::RejectedTransition;

    fn outcome(source: (&str, usize), destination: Option<(&str, usize)>) -> DragOutcome {
        DragOutcome {
            source: DragLocation::new(source.0, source.1),
            destination: destination.map(|(tag, index)| DragLocation::new(tag, index)),
        }
    }

    fn hour(value: u8) -> Hour {
        Hour::new(value).unwrap()
    }

    #[test]
    fn missing_destination_wins_over_malformed_source() {
        assert_eq!(resolve(&outcome(("garbage", 0), None)), DragIntent::Cancelled);
    }

    #[test]
    fn classifies_each_route() {
        assert_eq!(
            resolve(&outcome(("pool", 2), Some(("hour-9", 0)))),
            DragIntent::PlaceFromPool {
                task_index: 2,
                hour: hour(9)
            }
        );
        assert_eq!(
            resolve(&outcome(("hour-9", 0), Some(("pool", 1)))),
            DragIntent::ReturnToPool {
                hour: hour(9),
                insert_index: 1
            }
        );
        assert_eq!(
            resolve(&outcome(("hour-9", 0), Some(("hour-14", 0)))),
            DragIntent::MoveOrSwap {
                source: hour(9),
                destination: hour(14)
            }
        );
    }

    #[test]
    fn malformed_or_unsupported_routes_are_rejected() {
        assert_eq!(
            resolve(&outcome(("pool", 0), Some(("hour-24", 0)))),
            DragIntent::Rejected(RejectedTransition::MalformedContainer(
                "hour-24".to_string()
            ))
        );
        assert_eq!(
            resolve(&outcome(("pool", 0), Some(("pool", 2)))),
            DragIntent::Rejected(RejectedTransition::UnsupportedRoute {
                source: "pool".to_string(),
                destination: "pool".to_string(),
            })
        );
    }
}
