//! Utility-based tactical planner.
//!
//! An engine-agnostic decision core: each planning tick, every registered
//! action is gated by its preconditions, eligible actions are ranked by a
//! deterministic utility score, and the winner runs as an interruptible
//! poll-stepped task until it completes, fails, or a better action takes
//! over.
//!
//! The host loop drives the core with three calls per tick:
//!
//! 1. [`tactical_core::perceive`] — refresh the world snapshot
//! 2. [`Planner::tick`] — select and step the current action
//! 3. whatever world simulation the host performs between ticks

pub mod action;
pub mod error;
pub mod planner;
pub mod runner;
pub mod status;

pub use action::{
    Action, ActionKind, AttackAction, ExecState, SeekCoverAction, UseResourceAction,
};
pub use error::PlannerError;
pub use planner::Planner;
pub use runner::ActionRunner;
pub use status::StepStatus;
