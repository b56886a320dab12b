//! Planner construction errors.
//!
//! Expected gameplay conditions (ineligible actions, failed steps, no viable
//! action) never surface as errors; only misconfiguration detected at
//! construction time does.

use crate::action::ActionKind;

/// Errors surfaced while building a [`Planner`](crate::Planner).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlannerError {
    /// No actions were registered.
    #[error("planner requires at least one registered action")]
    EmptyActionSet,

    /// Two registered actions share the same kind tag.
    #[error("duplicate action registered for kind {0}")]
    DuplicateAction(ActionKind),
}
