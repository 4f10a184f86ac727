//! The rigid-body stepping state machine.
//!
//! The host calls [`RigidBodySolver::step`] from its frame loop. The
//! solver converts elapsed wall-clock time into fixed sub-steps and
//! runs each one with strict phase ordering: integrate positions →
//! accumulate forces → detect and resolve collisions → integrate
//! velocities. Nothing in this path returns an error or panics; a
//! physics tick must never abort the host loop.

use std::time::Instant;

use tracing::{debug, trace};

use kinema_body::BodySet;
use kinema_contact::CollisionPipeline;
use kinema_types::{KinemaResult, Scalar};

use crate::accumulator::StepAccumulator;
use crate::config::SolverConfig;
use crate::forces;
use crate::hooks::{InspectionHook, NullHook};

/// Outcome of one `step` call.
#[derive(Debug, Clone, Default)]
pub struct StepReport {
    /// Sub-steps actually executed (0 when too little time elapsed).
    pub substeps: u32,
    /// Broad-phase candidate pairs, summed over sub-steps.
    pub candidate_pairs: u32,
    /// Narrow-phase contacts, summed over sub-steps.
    pub contacts: u32,
    /// Deepest penetration seen in any sub-step.
    pub max_penetration: Scalar,
    /// Kinetic energy of the body set after the step.
    pub kinetic_energy: Scalar,
    /// Wall-clock duration of the call (seconds).
    pub wall_time: f64,
}

/// Steps a set of rigid bodies at a fixed timestep.
pub struct RigidBodySolver {
    config: SolverConfig,
    accumulator: StepAccumulator,
    pipeline: CollisionPipeline,
    last_tick: Option<Instant>,
    running: bool,
    step_index: u32,
}

impl RigidBodySolver {
    /// Creates a solver from a validated configuration.
    pub fn new(config: SolverConfig) -> KinemaResult<Self> {
        config.validate()?;
        let accumulator = StepAccumulator::new(config.fixed_step_millis, config.max_substeps);
        let pipeline = CollisionPipeline::standard(config.restitution_mix);
        Ok(Self {
            config,
            accumulator,
            pipeline,
            last_tick: None,
            running: true,
            step_index: 0,
        })
    }

    /// Replaces the collision pipeline (custom phases, detect-only).
    pub fn with_pipeline(mut self, pipeline: CollisionPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Returns true while stepping is enabled.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Re-arms the wall clock and enables stepping. Time that passed
    /// while stopped is not replayed.
    pub fn start(&mut self) {
        self.running = true;
        self.last_tick = None;
        self.accumulator.reset();
    }

    /// Disables stepping; subsequent `step` calls are no-ops.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Steps using elapsed wall-clock time since the previous call.
    ///
    /// The first call after construction or `start` establishes the
    /// clock baseline and runs zero sub-steps.
    pub fn step(&mut self, bodies: &mut BodySet) -> StepReport {
        let now = Instant::now();
        let elapsed_millis = self
            .last_tick
            .map(|last| now.duration_since(last).as_secs_f64() * 1000.0)
            .unwrap_or(0.0);
        self.last_tick = Some(now);
        self.advance(bodies, elapsed_millis)
    }

    /// Steps with a hook, using elapsed wall-clock time.
    pub fn step_with_hook(
        &mut self,
        bodies: &mut BodySet,
        hook: &mut dyn InspectionHook,
    ) -> StepReport {
        let now = Instant::now();
        let elapsed_millis = self
            .last_tick
            .map(|last| now.duration_since(last).as_secs_f64() * 1000.0)
            .unwrap_or(0.0);
        self.last_tick = Some(now);
        self.advance_by(bodies, elapsed_millis, hook)
    }

    /// Deterministic entry point: steps as if `elapsed_millis` of
    /// wall-clock time had passed. Tests and replay tooling drive
    /// this directly.
    pub fn advance(&mut self, bodies: &mut BodySet, elapsed_millis: Scalar) -> StepReport {
        self.advance_by(bodies, elapsed_millis, &mut NullHook)
    }

    /// As [`advance`](Self::advance), with lifecycle hooks.
    pub fn advance_by(
        &mut self,
        bodies: &mut BodySet,
        elapsed_millis: Scalar,
        hook: &mut dyn InspectionHook,
    ) -> StepReport {
        if !self.running {
            return StepReport::default();
        }

        let start = Instant::now();
        let substeps = self.accumulator.advance(elapsed_millis);
        let step = self.step_index;
        self.step_index = self.step_index.wrapping_add(1);

        hook.on_step_begin(step, substeps);

        let dt = self.config.dt();
        let mut report = StepReport {
            substeps,
            ..StepReport::default()
        };

        for substep in 0..substeps {
            for (_, body) in bodies.iter_mut() {
                body.integrate_position(dt);
            }

            forces::accumulate(bodies, &self.config);

            let collisions = self.pipeline.step(bodies);
            report.candidate_pairs += collisions.candidate_pairs;
            report.contacts += collisions.contacts_detected;
            report.max_penetration = report.max_penetration.max(collisions.max_penetration);

            for (_, body) in bodies.iter_mut() {
                body.integrate_velocity(dt);
            }

            if self.config.debug_enabled {
                trace!(
                    step,
                    substep,
                    candidates = collisions.candidate_pairs,
                    contacts = collisions.contacts_detected,
                    "sub-step"
                );
            }
            hook.on_substep(step, substep, &collisions);
        }

        // A tick that ran no sub-steps must leave bodies untouched,
        // so residual impulses only decay on effective ticks.
        if substeps > 0 {
            for (_, body) in bodies.iter_mut() {
                body.decay_impulse(self.config.impulse_decay, self.config.impulse_epsilon);
            }
        }

        report.kinetic_energy = bodies.kinetic_energy();
        report.wall_time = start.elapsed().as_secs_f64();

        debug!(
            step,
            substeps,
            contacts = report.contacts,
            carryover_millis = self.accumulator.carryover_millis(),
            "solver step"
        );
        hook.on_step_end(step, &report);

        report
    }
}
