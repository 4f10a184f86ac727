//! Integration tests for kinema-solver.

use kinema_body::{BodySet, InMemorySprite, RigidBody};
use kinema_contact::CollisionStepResult;
use kinema_math::Vec2;
use kinema_solver::{InspectionHook, RigidBodySolver, SolverConfig, StepAccumulator, StepReport};

fn body(x: f64, y: f64, size: f64, mass: f64, restitution: f64) -> RigidBody {
    RigidBody::new(
        Box::new(InMemorySprite::new(Vec2::new(x, y), size, size)),
        mass,
        restitution,
    )
}

/// Config with gravity and drag disabled, for scenario isolation.
fn quiet_config() -> SolverConfig {
    SolverConfig {
        gravity: [0.0, 0.0],
        drag_coefficient: 0.0,
        ..SolverConfig::default()
    }
}

// ─── Accumulator ──────────────────────────────────────────────

#[test]
fn accumulator_floors_and_carries_remainder() {
    let mut acc = StepAccumulator::new(4.0, 10);
    assert_eq!(acc.advance(10.0), 2);
    assert!((acc.carryover_millis() - 2.0).abs() < 1e-12);
    assert_eq!(acc.advance(2.0), 1);
    assert!(acc.carryover_millis().abs() < 1e-12);
}

#[test]
fn accumulator_clamps_catchup_work() {
    let mut acc = StepAccumulator::new(4.0, 10);
    assert_eq!(acc.advance(100_000.0), 10);
    // Excess whole steps are dropped, not queued.
    assert!(acc.carryover_millis() < 4.0);
    assert_eq!(acc.advance(0.0), 0);
}

#[test]
fn accumulator_ignores_degenerate_elapsed_time() {
    let mut acc = StepAccumulator::new(4.0, 10);
    assert_eq!(acc.advance(-5.0), 0);
    assert_eq!(acc.advance(f64::NAN), 0);
    assert_eq!(acc.advance(f64::INFINITY), 0);
    assert_eq!(acc.carryover_millis(), 0.0);
}

#[test]
fn accumulator_reset_drops_carryover() {
    let mut acc = StepAccumulator::new(4.0, 10);
    acc.advance(3.0);
    acc.reset();
    assert_eq!(acc.carryover_millis(), 0.0);
    assert_eq!(acc.advance(3.0), 0);
}

// ─── Config ───────────────────────────────────────────────────

#[test]
fn default_config_is_valid() {
    assert!(SolverConfig::default().validate().is_ok());
    assert!(SolverConfig::debug().validate().is_ok());
    assert!(SolverConfig::high_accuracy().validate().is_ok());
}

#[test]
fn config_rejects_degenerate_step_size() {
    let mut config = SolverConfig::default();
    config.fixed_step_millis = 0.0;
    assert!(config.validate().is_err());

    let mut config = SolverConfig::default();
    config.max_substeps = 0;
    assert!(config.validate().is_err());

    let mut config = SolverConfig::default();
    config.impulse_decay = 1.5;
    assert!(config.validate().is_err());
}

#[test]
fn config_round_trips_through_json() {
    let config = SolverConfig::high_accuracy();
    let json = serde_json::to_string(&config).unwrap();
    let recovered: SolverConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.fixed_step_millis, config.fixed_step_millis);
    assert_eq!(recovered.max_substeps, config.max_substeps);
}

#[test]
fn dt_combines_step_size_and_scale() {
    let config = SolverConfig::default();
    assert!((config.dt() - 0.04).abs() < 1e-12);
}

// ─── Stepping State Machine ───────────────────────────────────

#[test]
fn zero_elapsed_time_changes_nothing() {
    let mut solver = RigidBodySolver::new(SolverConfig::default()).unwrap();
    let mut bodies = BodySet::new();
    let id = bodies.attach(body(5.0, 5.0, 10.0, 1.0, 0.5));
    {
        let b = bodies.get_mut(id).unwrap();
        b.velocity = Vec2::new(1.0, 2.0);
        b.apply_impulse(Vec2::new(3.0, 0.0));
    }

    let report = solver.advance(&mut bodies, 0.0);

    assert_eq!(report.substeps, 0);
    let b = bodies.get(id).unwrap();
    assert_eq!(b.position(), Vec2::new(5.0, 5.0));
    assert_eq!(b.velocity, Vec2::new(1.0, 2.0));
    assert_eq!(b.pending_impulse, Vec2::new(3.0, 0.0));
}

#[test]
fn stopped_solver_is_a_noop() {
    let mut solver = RigidBodySolver::new(SolverConfig::default()).unwrap();
    let mut bodies = BodySet::new();
    let id = bodies.attach(body(0.0, 0.0, 10.0, 1.0, 0.5));

    solver.stop();
    assert!(!solver.is_running());
    let report = solver.advance(&mut bodies, 100.0);
    assert_eq!(report.substeps, 0);
    assert_eq!(bodies.get(id).unwrap().position(), Vec2::ZERO);

    solver.start();
    assert!(solver.is_running());
    let report = solver.advance(&mut bodies, 8.0);
    assert_eq!(report.substeps, 2);
}

#[test]
fn first_wall_clock_step_establishes_baseline() {
    let mut solver = RigidBodySolver::new(SolverConfig::default()).unwrap();
    let mut bodies = BodySet::new();
    bodies.attach(body(0.0, 0.0, 10.0, 1.0, 0.5));

    let report = solver.step(&mut bodies);
    assert_eq!(report.substeps, 0);
}

// ─── Force Scenarios ──────────────────────────────────────────

#[test]
fn gravity_only_body_converges_to_g() {
    // Point sprite: zero footprint, so no drag either way.
    let mut solver = RigidBodySolver::new(SolverConfig::default()).unwrap();
    let mut bodies = BodySet::new();
    let id = bodies.attach(RigidBody::new(
        Box::new(InMemorySprite::at(Vec2::ZERO)),
        2.0,
        0.5,
    ));

    let dt = solver.config().dt();
    let mut previous_velocity = Vec2::ZERO;
    for _ in 0..60 {
        previous_velocity = bodies.get(id).unwrap().velocity;
        solver.advance(&mut bodies, 4.0);
    }

    let b = bodies.get(id).unwrap();
    // The averaged-acceleration scheme halves the error each sub-step.
    assert!((b.acceleration - Vec2::new(0.0, 9.8)).length() < 1e-9);
    let delta_v = b.velocity - previous_velocity;
    assert!((delta_v.y - 9.8 * dt).abs() < 1e-9);
    assert!(delta_v.x.abs() < 1e-12);
    assert!(b.velocity.y > 0.0);
}

#[test]
fn drag_opposes_motion() {
    let config = SolverConfig {
        gravity: [0.0, 0.0],
        ..SolverConfig::default()
    };
    let mut solver = RigidBodySolver::new(config).unwrap();
    let mut bodies = BodySet::new();
    let id = bodies.attach(body(0.0, 0.0, 50.0, 1.0, 0.5));
    bodies.get_mut(id).unwrap().velocity = Vec2::new(100.0, 0.0);

    for _ in 0..50 {
        solver.advance(&mut bodies, 4.0);
    }

    let v = bodies.get(id).unwrap().velocity;
    assert!(v.x > 0.0, "drag must not reverse motion");
    assert!(v.x < 100.0, "drag must slow the body");
    assert!(v.y.abs() < 1e-9);
}

#[test]
fn spring_linked_bodies_approach_rest_length() {
    let mut solver = RigidBodySolver::new(quiet_config()).unwrap();
    let mut bodies = BodySet::new();
    let a = bodies.attach(RigidBody::new(
        Box::new(InMemorySprite::at(Vec2::ZERO)),
        1.0,
        0.0,
    ));
    let b = bodies.attach(RigidBody::new(
        Box::new(InMemorySprite::at(Vec2::new(30.0, 0.0))),
        1.0,
        0.0,
    ));
    bodies.add_spring(a, b, 5.0, 20.0).unwrap();
    bodies.add_spring(b, a, 5.0, 20.0).unwrap();

    for _ in 0..25 {
        solver.advance(&mut bodies, 4.0);
    }

    let distance =
        (bodies.get(b).unwrap().position() - bodies.get(a).unwrap().position()).length();
    assert!(
        distance < 30.0,
        "stretched spring must pull bodies together, distance = {distance}"
    );
}

// ─── Impulses ─────────────────────────────────────────────────

#[test]
fn massive_body_consumes_impulse_as_force() {
    let mut solver = RigidBodySolver::new(quiet_config()).unwrap();
    let mut bodies = BodySet::new();
    let id = bodies.attach(body(0.0, 0.0, 10.0, 1.0, 0.5));
    bodies.get_mut(id).unwrap().apply_impulse(Vec2::new(10.0, 0.0));

    solver.advance(&mut bodies, 4.0);

    let b = bodies.get(id).unwrap();
    assert!(b.velocity.x > 0.0);
    assert_eq!(b.pending_impulse, Vec2::ZERO);
}

#[test]
fn unconsumed_impulse_decays_to_zero() {
    // A static body never runs a force pass, so its impulse can only
    // leave through decay.
    let mut solver = RigidBodySolver::new(quiet_config()).unwrap();
    let mut bodies = BodySet::new();
    let id = bodies.attach(body(0.0, 0.0, 10.0, 0.0, 0.5));
    bodies.get_mut(id).unwrap().apply_impulse(Vec2::new(1.0, 0.0));

    let mut ticks_to_zero = None;
    for tick in 0..400 {
        solver.advance(&mut bodies, 4.0);
        if bodies.get(id).unwrap().pending_impulse == Vec2::ZERO {
            ticks_to_zero = Some(tick);
            break;
        }
    }

    let ticks = ticks_to_zero.expect("impulse must decay to zero in bounded ticks");
    assert!(ticks > 0, "decay is gradual, not instant");
    // Velocity stays untouched throughout: the body is static.
    assert_eq!(bodies.get(id).unwrap().velocity, Vec2::ZERO);
}

// ─── Collision Scenario ───────────────────────────────────────

#[test]
fn closing_bodies_collide_and_bounce() {
    // Massive body sliding toward a static one: radii 5 + 5, centers
    // start 16 apart, closing 5 units of simulated distance per tick.
    let mut solver = RigidBodySolver::new(quiet_config()).unwrap();
    let mut bodies = BodySet::new();
    let a = bodies.attach(body(0.0, 0.0, 10.0, 1.0, 0.5));
    let b = bodies.attach(body(16.0, 0.0, 10.0, 0.0, 0.5));
    bodies.get_mut(a).unwrap().velocity = Vec2::new(125.0, 0.0);

    let mut contact_report: Option<StepReport> = None;
    for _ in 0..10 {
        let report = solver.advance(&mut bodies, 4.0);
        if report.contacts > 0 {
            contact_report = Some(report);
            break;
        }
        assert!(bodies.get(a).unwrap().velocity.x > 0.0);
    }

    let report = contact_report.expect("closing bodies must produce a contact");
    assert!(report.max_penetration > 0.0);
    assert!(report.candidate_pairs >= report.contacts);

    // The massive body's velocity component along the contact normal
    // reverses sign; the static body stays put.
    assert!(bodies.get(a).unwrap().velocity.x < 0.0);
    assert_eq!(bodies.get(b).unwrap().velocity, Vec2::ZERO);
    assert_eq!(bodies.get(b).unwrap().position(), Vec2::new(16.0, 0.0));
}

// ─── Hooks ────────────────────────────────────────────────────

#[derive(Default)]
struct RecordingHook {
    begins: u32,
    substeps: u32,
    ends: u32,
    contacts_seen: u32,
}

impl InspectionHook for RecordingHook {
    fn on_step_begin(&mut self, _step: u32, _substeps: u32) {
        self.begins += 1;
    }

    fn on_substep(&mut self, _step: u32, _substep: u32, collisions: &CollisionStepResult) {
        self.substeps += 1;
        self.contacts_seen += collisions.contacts_detected;
    }

    fn on_step_end(&mut self, _step: u32, _report: &StepReport) {
        self.ends += 1;
    }

    fn name(&self) -> &str {
        "recording_hook"
    }
}

#[test]
fn hooks_observe_the_step_lifecycle() {
    let mut solver = RigidBodySolver::new(quiet_config()).unwrap();
    let mut bodies = BodySet::new();
    bodies.attach(body(0.0, 0.0, 10.0, 1.0, 0.5));

    let mut hook = RecordingHook::default();
    solver.advance_by(&mut bodies, 12.0, &mut hook);

    assert_eq!(hook.begins, 1);
    assert_eq!(hook.substeps, 3);
    assert_eq!(hook.ends, 1);
    assert_eq!(hook.contacts_seen, 0);
}
