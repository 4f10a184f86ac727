//! Integration tests for kinema-debug.

use kinema_body::{BodySet, InMemorySprite, RigidBody};
use kinema_debug::{BodySnapshot, TelemetryHook};
use kinema_math::Vec2;
use kinema_solver::{RigidBodySolver, SolverConfig};
use kinema_telemetry::EventKind;

fn body(x: f64, y: f64, mass: f64) -> RigidBody {
    RigidBody::new(
        Box::new(InMemorySprite::new(Vec2::new(x, y), 10.0, 10.0)),
        mass,
        0.5,
    )
}

// ─── Telemetry Hook ───────────────────────────────────────────

#[test]
fn telemetry_hook_records_the_step_lifecycle() {
    let config = SolverConfig {
        gravity: [0.0, 0.0],
        drag_coefficient: 0.0,
        ..SolverConfig::default()
    };
    let mut solver = RigidBodySolver::new(config).unwrap();
    let mut bodies = BodySet::new();
    bodies.attach(body(0.0, 0.0, 1.0));

    let mut hook = TelemetryHook::new();
    solver.advance_by(&mut bodies, 8.0, &mut hook); // 2 sub-steps

    let events = hook.drain_events();
    // StepBegin + 2×ContactDetection + Energy + StepEnd
    assert_eq!(events.len(), 5);
    assert!(matches!(events[0].kind, EventKind::StepBegin { substeps: 2 }));
    assert!(matches!(events[1].kind, EventKind::ContactDetection { .. }));
    assert!(matches!(events[3].kind, EventKind::Energy { .. }));
    assert!(matches!(events[4].kind, EventKind::StepEnd { .. }));

    // Draining empties the buffer.
    assert!(hook.drain_events().is_empty());
}

#[test]
fn telemetry_hook_reports_contacts() {
    let config = SolverConfig {
        gravity: [0.0, 0.0],
        drag_coefficient: 0.0,
        ..SolverConfig::default()
    };
    let mut solver = RigidBodySolver::new(config).unwrap();
    let mut bodies = BodySet::new();
    bodies.attach(body(0.0, 0.0, 1.0));
    bodies.attach(body(8.0, 0.0, 0.0)); // overlapping static partner

    let mut hook = TelemetryHook::new();
    solver.advance_by(&mut bodies, 4.0, &mut hook);

    let events = hook.drain_events();
    let detection = events
        .iter()
        .find_map(|e| match e.kind {
            EventKind::ContactDetection { contact_count, .. } => Some(contact_count),
            _ => None,
        })
        .expect("detection event must be emitted");
    assert_eq!(detection, 1);
}

// ─── Snapshots ────────────────────────────────────────────────

#[test]
fn snapshot_captures_positions_and_velocities() {
    let mut bodies = BodySet::new();
    let a = bodies.attach(body(1.0, 2.0, 1.0));
    bodies.attach(body(3.0, 4.0, 1.0));
    bodies.get_mut(a).unwrap().velocity = Vec2::new(5.0, 6.0);

    let snapshot = BodySnapshot::capture(42, &bodies);
    assert_eq!(snapshot.step, 42);
    assert_eq!(snapshot.body_count, 2);
    assert_eq!(snapshot.positions, vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(snapshot.velocities[0..2], [5.0, 6.0]);
}

#[test]
fn snapshot_round_trips_through_bincode() {
    let mut bodies = BodySet::new();
    bodies.attach(body(7.0, -3.0, 1.0));

    let snapshot = BodySnapshot::capture(9, &bodies);
    let bytes = snapshot.to_bytes().unwrap();
    let recovered = BodySnapshot::from_bytes(&bytes).unwrap();

    assert_eq!(recovered.step, 9);
    assert_eq!(recovered.body_count, 1);
    assert_eq!(recovered.positions, snapshot.positions);
    assert_eq!(recovered.velocities, snapshot.velocities);
}

#[test]
fn snapshot_rejects_garbage_bytes() {
    assert!(BodySnapshot::from_bytes(&[0xde, 0xad]).is_err());
}
