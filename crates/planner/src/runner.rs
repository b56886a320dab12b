//! Execution driver for the current action's task.
//!
//! The [`ActionRunner`] owns the "is a task in flight" bookkeeping so the
//! planner's tick stays synchronous and inspectable. It guarantees the
//! lifecycle contract: `stop` runs exactly once per run, whether the task
//! completed, failed, or was cancelled by a switch.

use tactical_core::{Agent, Battlefield};

use crate::action::{Action, ExecState};
use crate::status::StepStatus;

/// Drives one action's step-until-terminal sequence as a cancellable unit
/// of work.
#[derive(Debug, Default)]
pub struct ActionRunner {
    in_flight: bool,
}

impl ActionRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a run is currently in flight.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Marks a new run as in flight. The planner calls this right after
    /// `start`ing the action.
    pub fn begin(&mut self) {
        self.in_flight = true;
    }

    /// Advances the in-flight task by one tick.
    ///
    /// On a terminal status the runner finishes the run itself: `stop` is
    /// invoked and the in-flight marker cleared, so the caller only has to
    /// release its current-action slot.
    pub fn tick(
        &mut self,
        action: &dyn Action,
        agent: &mut Agent,
        field: &mut Battlefield,
        exec: &mut ExecState,
        dt: f32,
    ) -> StepStatus {
        debug_assert!(self.in_flight, "runner ticked without a run in flight");

        let status = action.step(agent, field, exec, dt);
        if status.is_terminal() {
            action.stop(agent, exec);
            self.in_flight = false;
        }
        status
    }

    /// Cancels the in-flight run, if any. Idempotent: a run that already
    /// finished is not stopped a second time.
    pub fn cancel(&mut self, action: &dyn Action, agent: &Agent, exec: &mut ExecState) {
        if self.in_flight {
            action.stop(agent, exec);
            self.in_flight = false;
        }
    }
}
