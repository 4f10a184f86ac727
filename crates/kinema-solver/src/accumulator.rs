//! Fixed-timestep accumulator.
//!
//! Converts irregular elapsed wall-clock time into a whole number of
//! fixed sub-steps, carrying the remainder to the next call. The
//! sub-step count is clamped: whole steps beyond the clamp are
//! discarded, not queued, so a suspension (backgrounded tab, debugger
//! pause) can never demand unbounded catch-up work.

use kinema_types::Scalar;

/// Accumulates elapsed milliseconds into fixed sub-steps.
#[derive(Debug, Clone)]
pub struct StepAccumulator {
    fixed_step_millis: Scalar,
    max_substeps: u32,
    carryover_millis: Scalar,
}

impl StepAccumulator {
    /// Creates an accumulator with the given step size and clamp.
    pub fn new(fixed_step_millis: Scalar, max_substeps: u32) -> Self {
        Self {
            fixed_step_millis,
            max_substeps,
            carryover_millis: 0.0,
        }
    }

    /// Consumes elapsed time and returns how many sub-steps to run.
    ///
    /// Non-finite or negative elapsed time counts as zero. The
    /// remainder smaller than one step is carried over; time beyond
    /// `max_substeps` whole steps is dropped.
    pub fn advance(&mut self, elapsed_millis: Scalar) -> u32 {
        let elapsed = if elapsed_millis.is_finite() && elapsed_millis > 0.0 {
            elapsed_millis
        } else {
            0.0
        };

        let total = self.carryover_millis + elapsed;
        let raw = (total / self.fixed_step_millis).floor();
        self.carryover_millis = total - raw * self.fixed_step_millis;

        if raw >= self.max_substeps as Scalar {
            self.max_substeps
        } else {
            raw as u32
        }
    }

    /// Milliseconds carried toward the next call.
    #[inline]
    pub fn carryover_millis(&self) -> Scalar {
        self.carryover_millis
    }

    /// Drops any carried time (solver restart).
    pub fn reset(&mut self) {
        self.carryover_millis = 0.0;
    }
}
