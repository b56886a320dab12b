//! The action contract and its concrete variants.
//!
//! An [`Action`] value is immutable shared configuration (damage numbers,
//! cooldowns, movement speeds). Everything that changes while a run is in
//! flight — cooldown clocks, chosen waypoints, channel progress — lives in
//! a separate [`ExecState`] record owned by the planner, one slot per
//! registered action. Actions are identified by an explicit [`ActionKind`]
//! tag, never by runtime type identity.

mod attack;
mod seek_cover;
mod use_resource;

pub use attack::{AttackAction, AttackState};
pub use seek_cover::{SeekCoverAction, SeekCoverState};
pub use use_resource::{UseResourceAction, UseResourceState};

use tactical_core::{Agent, Battlefield, WorldSnapshot};

use crate::status::StepStatus;

/// Enum tag identifying an action variant.
///
/// Used as the registry key for execution-state slots and for
/// introspection (`Planner::current_action`, score tables).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
pub enum ActionKind {
    Attack,
    SeekCover,
    UseResource,
}

/// Per-run transient execution state.
///
/// The planner keeps one slot per registered action; [`Action::init_state`]
/// produces a fresh record whenever a run starts, and `stop` resets the
/// slot to [`ExecState::Idle`] so nothing leaks across runs.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ExecState {
    #[default]
    Idle,
    Attack(AttackState),
    SeekCover(SeekCoverState),
    UseResource(UseResourceState),
}

impl ExecState {
    /// The slot's variant, if a run has state in it.
    pub fn kind(&self) -> Option<ActionKind> {
        match self {
            ExecState::Idle => None,
            ExecState::Attack(_) => Some(ActionKind::Attack),
            ExecState::SeekCover(_) => Some(ActionKind::SeekCover),
            ExecState::UseResource(_) => Some(ActionKind::UseResource),
        }
    }

    pub(crate) fn attack_mut(&mut self) -> &mut AttackState {
        match self {
            ExecState::Attack(state) => state,
            other => panic!("execution state mismatch: expected Attack, got {other:?}"),
        }
    }

    pub(crate) fn seek_cover_mut(&mut self) -> &mut SeekCoverState {
        match self {
            ExecState::SeekCover(state) => state,
            other => panic!("execution state mismatch: expected SeekCover, got {other:?}"),
        }
    }

    pub(crate) fn use_resource_mut(&mut self) -> &mut UseResourceState {
        match self {
            ExecState::UseResource(state) => state,
            other => panic!("execution state mismatch: expected UseResource, got {other:?}"),
        }
    }
}

/// The abstract action contract the planner evaluates and runs.
///
/// # Purity Rules
///
/// - [`preconditions_met`](Action::preconditions_met) and
///   [`utility`](Action::utility) are pure: same `(agent, snapshot)` pair,
///   same answer, no mutation. Utility is clamped to be non-negative.
/// - All side effects (damage, movement, resource consumption) happen in
///   [`step`](Action::step), and nowhere else.
///
/// # Lifecycle
///
/// `start` is called exactly once when the action becomes current, on a
/// fresh record from `init_state`; `stop` is called exactly once when the
/// run completes, fails, or is interrupted, and must leave the agent
/// consistent (no dangling waypoints, no partial consumption).
pub trait Action: Send + Sync {
    /// The variant tag this action registers under.
    fn kind(&self) -> ActionKind;

    /// Eligibility gate. Pure function of agent configuration and the
    /// per-tick snapshot; ineligibility is not an error, the action is
    /// simply excluded from scoring.
    fn preconditions_met(&self, agent: &Agent, snapshot: &WorldSnapshot) -> bool;

    /// Desirability score, higher is better, never negative.
    ///
    /// Unresolvable dependencies (no cover anywhere, no pickup anywhere)
    /// score 0 rather than erroring, keeping the planner's scan total.
    fn utility(&self, agent: &Agent, snapshot: &WorldSnapshot) -> f32;

    /// Produces a fresh transient-state record for a new run.
    fn init_state(&self) -> ExecState;

    /// Called once when this action transitions to current. Initializes the
    /// fresh `exec` record (e.g. zeroes the cooldown clock so the first use
    /// is immediate, resolves the movement waypoint from the snapshot).
    fn start(&self, agent: &Agent, snapshot: &WorldSnapshot, exec: &mut ExecState);

    /// Advances the task by one tick. Side effects happen here only;
    /// failure is reported through the return value, never swallowed.
    fn step(
        &self,
        agent: &mut Agent,
        field: &mut Battlefield,
        exec: &mut ExecState,
        dt: f32,
    ) -> StepStatus;

    /// Complementary completion check polled by the planner in addition to
    /// `step`'s return value. Continuous actions (attack) report completion
    /// as "preconditions no longer hold"; fixed-length tasks report it
    /// through `step` and return `false` here.
    fn is_complete(&self, agent: &Agent, snapshot: &WorldSnapshot, exec: &ExecState) -> bool;

    /// Called once when the run is interrupted or finished. Clears the
    /// transient record; must not leave partial effects behind.
    fn stop(&self, agent: &Agent, exec: &mut ExecState);
}

/// Blanket implementation for boxed actions, enabling heterogeneous
/// registries of `Box<dyn Action>`.
impl Action for Box<dyn Action> {
    #[inline]
    fn kind(&self) -> ActionKind {
        (**self).kind()
    }

    #[inline]
    fn preconditions_met(&self, agent: &Agent, snapshot: &WorldSnapshot) -> bool {
        (**self).preconditions_met(agent, snapshot)
    }

    #[inline]
    fn utility(&self, agent: &Agent, snapshot: &WorldSnapshot) -> f32 {
        (**self).utility(agent, snapshot)
    }

    #[inline]
    fn init_state(&self) -> ExecState {
        (**self).init_state()
    }

    #[inline]
    fn start(&self, agent: &Agent, snapshot: &WorldSnapshot, exec: &mut ExecState) {
        (**self).start(agent, snapshot, exec)
    }

    #[inline]
    fn step(
        &self,
        agent: &mut Agent,
        field: &mut Battlefield,
        exec: &mut ExecState,
        dt: f32,
    ) -> StepStatus {
        (**self).step(agent, field, exec, dt)
    }

    #[inline]
    fn is_complete(&self, agent: &Agent, snapshot: &WorldSnapshot, exec: &ExecState) -> bool {
        (**self).is_complete(agent, snapshot, exec)
    }

    #[inline]
    fn stop(&self, agent: &Agent, exec: &mut ExecState) {
        (**self).stop(agent, exec)
    }
}
