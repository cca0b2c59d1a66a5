//! Step counter. Lives on the dashboard, not in a tool session, so the
//! count survives closing the modal.

use tracing::debug;

use crate::constants::{STEPS_GOAL, STEPS_INCREMENT, STEPS_SEED};

/// Shared step count, floored at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCounter {
    value: u32,
}

impl StepCounter {
    /// Start from a given count.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { value: seed }
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.value
    }

    #[must_use]
    pub fn goal(self) -> u32 {
        STEPS_GOAL
    }

    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(STEPS_INCREMENT);
        debug!(steps = self.value, "steps incremented");
    }

    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(STEPS_INCREMENT);
        debug!(steps = self.value, "steps decremented");
    }

    /// Fraction of the goal reached, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn progress(self) -> f64 {
        (f64::from(self.value) / f64::from(STEPS_GOAL)).clamp(0.0, 1.0)
    }

    /// `"{steps}/{goal}"`, as shown on the card and in the modal.
    #[must_use]
    pub fn display(self) -> String {
        format!("{}/{}", self.value, STEPS_GOAL)
    }
}

impl Default for StepCounter {
    fn default() -> Self {
        Self::new(STEPS_SEED)
    }
}
