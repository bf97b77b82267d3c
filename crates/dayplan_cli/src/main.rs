//! CLI smoke and replay entry point.
//!
//! # Responsibility
//! - Verify `dayplan_core` linkage with a deterministic probe.
//! - Replay drag outcomes against the demo board and print the result.
//!
//! Usage: `dayplan_cli [<source>:<index>><destination>:<index> ...]`
//! where `<destination>` may be `-` for a cancelled drop, e.g.
//! `dayplan_cli pool:0>hour-9:0 hour-9:0>hour-14:0`.

use dayplan_core::{
    default_log_level, init_logging, DragEffect, DragLocation, DragOutcome, DragResolver,
    InMemoryAssignmentStore,
};
use std::process::ExitCode;

const CANCELLED_DESTINATION: &str = "-";

fn main() -> ExitCode {
    println!("dayplan_core ping={}", dayplan_core::ping());
    println!("dayplan_core version={}", dayplan_core::core_version());

    if let Err(err) = init_logging_from_env() {
        eprintln!("logging disabled: {err}");
    }

    let mut outcomes = Vec::new();
    for arg in std::env::args().skip(1) {
        match parse_outcome(&arg) {
            Ok(outcome) => outcomes.push(outcome),
            Err(err) => {
                eprintln!("invalid drag `{arg}`: {err}");
                return ExitCode::from(2);
            }
        }
    }

    let mut resolver = DragResolver::new(InMemoryAssignmentStore::default());
    for outcome in &outcomes {
        let resolution = resolver.handle_drag_outcome(outcome);
        match resolution.effect {
            DragEffect::Applied(transition) => {
                println!("applied kind={} {transition}", transition.kind())
            }
            DragEffect::Rejected(rejected) => {
                println!("ignored reason={} ({rejected})", rejected.reason_code())
            }
            DragEffect::Cancelled => println!("cancelled"),
        }
    }

    match serde_json::to_string_pretty(&resolver.snapshot()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to render snapshot: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging_from_env() -> Result<(), String> {
    let Ok(log_dir) = std::env::var("DAYPLAN_LOG_DIR") else {
        return Ok(());
    };
    let level = std::env::var("DAYPLAN_LOG_LEVEL")
        .unwrap_or_else(|_| default_log_level().to_string());
    init_logging(&level, &log_dir)
}

fn parse_outcome(arg: &str) -> Result<DragOutcome, String> {
    let (source, destination) = arg
        .split_once('>')
        .ok_or_else(|| "expected `<source>:<index>><destination>:<index>`".to_string())?;
    let source = parse_location(source)?;
    if destination.trim() == CANCELLED_DESTINATION {
        return Ok(DragOutcome::cancelled(source));
    }
    Ok(DragOutcome::new(source, parse_location(destination)?))
}

fn parse_location(value: &str) -> Result<DragLocation, String> {
    let (container, index) = value
        .trim()
        .rsplit_once(':')
        .ok_or_else(|| format!("expected `<container>:<index>`, got `{value}`"))?;
    let index = index
        .parse::<usize>()
        .map_err(|err| format!("invalid index `{index}`: {err}"))?;
    Ok(DragLocation::new(container, index))
}
