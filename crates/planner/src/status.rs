//! Status returned by action steps.

/// The result of advancing an action's task by one planning tick.
///
/// # Cooperative Semantics
///
/// Actions never block: a multi-tick task (move to cover, channel a heal)
/// returns `Running` and hands control back to the caller every tick.
/// Failure is an expected gameplay condition, not an error; the planner
/// responds by re-planning, never by propagating an exception.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepStatus {
    /// The task made progress and wants another step next tick.
    Running,

    /// The task reached its natural end.
    ///
    /// Example: a seek-cover move arriving within the arrival threshold.
    Completed,

    /// The task can no longer proceed.
    ///
    /// Example: ammunition ran out mid-attack, or a targeted pickup was
    /// removed from the world by someone else.
    Failed,
}

impl StepStatus {
    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, StepStatus::Running)
    }

    /// Returns `true` if this status is `Completed`.
    #[inline]
    pub fn is_completed(self) -> bool {
        matches!(self, StepStatus::Completed)
    }

    /// Returns `true` if this status is `Failed`.
    #[inline]
    pub fn is_failed(self) -> bool {
        matches!(self, StepStatus::Failed)
    }

    /// Returns `true` if the run is over, whether it completed or failed.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !self.is_running()
    }
}
