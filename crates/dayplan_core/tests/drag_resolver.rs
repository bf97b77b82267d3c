use dayplan_core::{
    DragEffect, DragIntent, DragLocation, DragOutcome, DragResolver, Hour, InMemoryAssignmentStore,
    RejectedTransition, Transition,
};

fn hour(value: u8) -> Hour {
    Hour::new(value).unwrap()
}

fn drag(source: (&str, usize), destination: (&str, usize)) -> DragOutcome {
    DragOutcome::new(
        DragLocation::new(source.0, source.1),
        DragLocation::new(destination.0, destination.1),
    )
}

fn resolver() -> DragResolver<InMemoryAssignmentStore> {
    DragResolver::new(InMemoryAssignmentStore::default())
}

#[test]
fn pool_to_hour_places_task() {
    let mut resolver = resolver();

    let resolution = resolver.handle_drag_outcome(&drag(("pool", 1), ("hour-8", 0)));

    assert_eq!(
        resolution.intent,
        DragIntent::PlaceFromPool {
            task_index: 1,
            hour: hour(8)
        }
    );
    assert!(resolution.effect.changed());
    assert_eq!(resolution.snapshot.pool_ids(), vec!["task-1", "task-3"]);
    assert_eq!(
        resolution.snapshot.occupant(hour(8)).map(|t| t.id.as_str()),
        Some("task-2")
    );
}

#[test]
fn hour_to_pool_inserts_at_drop_index() {
    let mut resolver = resolver();
    resolver.handle_drag_outcome(&drag(("pool", 2), ("hour-5", 0)));

    let resolution = resolver.handle_drag_outcome(&drag(("hour-5", 0), ("pool", 0)));

    assert_eq!(
        resolution.effect,
        DragEffect::Applied(Transition::Returned {
            task_id: "task-3".to_string(),
            hour: hour(5),
            pool_index: 0
        })
    );
    assert_eq!(
        resolution.snapshot.pool_ids(),
        vec!["task-3", "task-1", "task-2"]
    );
}

#[test]
fn hour_to_hour_swaps_occupants() {
    let mut resolver = resolver();
    resolver.handle_drag_outcome(&drag(("pool", 0), ("hour-9", 0)));
    resolver.handle_drag_outcome(&drag(("pool", 0), ("hour-14", 0)));

    let resolution = resolver.handle_drag_outcome(&drag(("hour-9", 0), ("hour-14", 0)));

    let occupant = |h: u8| {
        resolution
            .snapshot
            .occupant(hour(h))
            .map(|task| task.id.clone())
    };
    assert_eq!(occupant(9).as_deref(), Some("task-2"));
    assert_eq!(occupant(14).as_deref(), Some("task-1"));
}

#[test]
fn cancelled_and_malformed_outcomes_leave_state_unchanged() {
    let mut resolver = resolver();
    resolver.handle_drag_outcome(&drag(("pool", 0), ("hour-9", 0)));
    let before = resolver.snapshot();

    let cancelled = resolver.handle_drag_outcome(&DragOutcome::cancelled(DragLocation::new(
        "hour-9", 0,
    )));
    assert_eq!(cancelled.effect, DragEffect::Cancelled);
    assert_eq!(cancelled.snapshot, before);

    for outcome in [
        drag(("pool", 0), ("hour-24", 0)),
        drag(("hour-x", 0), ("pool", 0)),
        drag(("pool", 0), ("pool", 1)),
        drag(("pool", 0), ("hour-9", 0)),
        drag(("hour-3", 0), ("pool", 0)),
        drag(("hour-9", 0), ("hour-9", 0)),
        drag(("pool", 7), ("hour-10", 0)),
    ] {
        let resolution = resolver.handle_drag_outcome(&outcome);
        assert!(
            matches!(resolution.effect, DragEffect::Rejected(_)),
            "{outcome:?} should be rejected"
        );
        assert_eq!(resolution.snapshot, before, "{outcome:?} changed state");
    }
}

#[test]
fn legacy_pool_container_id_is_accepted() {
    let mut resolver = resolver();

    let resolution = resolver.handle_drag_outcome(&drag(("availableTasks", 0), ("hour-0", 0)));

    assert!(resolution.effect.changed());
    assert_eq!(resolver.store().occupant(Hour::MIDNIGHT).unwrap().id, "task-1");
}

#[test]
fn resolver_can_drive_borrowed_store() {
    let mut store = InMemoryAssignmentStore::default();
    {
        let mut resolver = DragResolver::new(&mut store);
        resolver.handle_drag_outcome(&drag(("pool", 0), ("hour-6", 0)));
    }
    assert_eq!(store.occupant(hour(6)).unwrap().id, "task-1");
}

#[test]
fn drag_outcome_deserializes_from_presentation_json() {
    let outcome: DragOutcome = serde_json::from_str(
        r#"{"source":{"container":"pool","index":0},"destination":{"container":"hour-9","index":0}}"#,
    )
    .unwrap();
    assert_eq!(outcome, drag(("pool", 0), ("hour-9", 0)));

    let cancelled: DragOutcome =
        serde_json::from_str(r#"{"source":{"container":"hour-2","index":0},"destination":null}"#)
            .unwrap();
    assert_eq!(cancelled.destination, None);

    let missing: DragOutcome =
        serde_json::from_str(r#"{"source":{"container":"hour-2","index":0}}"#).unwrap();
    assert_eq!(missing.destination, None);
}

#[test]
fn snapshot_serializes_pool_and_all_hours() {
    let mut resolver = resolver();
    resolver.handle_drag_outcome(&drag(("pool", 0), ("hour-9", 0)));

    let json = serde_json::to_value(resolver.snapshot()).unwrap();

    assert_eq!(json["pool"].as_array().unwrap().len(), 2);
    assert_eq!(json["pool"][0]["id"], "task-2");
    assert_eq!(json["schedule"].as_object().unwrap().len(), 24);
    assert_eq!(json["schedule"]["9"]["id"], "task-1");
    assert_eq!(json["schedule"]["9"]["label"], "Task 1");
    assert!(json["schedule"]["10"].is_null());
}

#[test]
fn rejected_intent_reports_reason() {
    let mut resolver = resolver();

    let resolution = resolver.handle_drag_outcome(&drag(("pool", 0), ("hour-99", 0)));

    assert_eq!(
        resolution.effect,
        DragEffect::Rejected(RejectedTransition::MalformedContainer(
            "hour-99".to_string()
        ))
    );
}
