//! Per-agent planner: precondition-gated, utility-ranked action selection.
//!
//! Each tick the planner scans every registered action in registration
//! order, scores the eligible ones, and selects the best under strict
//! greater-than — so the first-registered action wins ties, reproducibly.
//! Transitions are atomic: the outgoing action is always stopped before the
//! incoming one starts.

use tactical_core::{Agent, Battlefield, WorldSnapshot};

use crate::action::{Action, ActionKind, ExecState};
use crate::error::PlannerError;
use crate::runner::ActionRunner;
use crate::status::StepStatus;

/// Orchestrates action selection and execution for one agent.
///
/// # State Machine
///
/// The planner holds a single current-action slot: either `Idle` (no
/// eligible action) or `Running(action)`. At most one action is current at
/// any time, and a switch always observes `stop(old)` strictly before
/// `start(new)`.
pub struct Planner {
    actions: Vec<Box<dyn Action>>,
    /// Transient execution state, one slot per registered action.
    exec: Vec<ExecState>,
    /// Index of the current action, if any.
    current: Option<usize>,
    runner: ActionRunner,
    /// Scores computed during the latest evaluation pass (eligible actions
    /// only), in registration order.
    last_scores: Vec<(ActionKind, f32)>,
}

impl Planner {
    /// Builds a planner over a registered action set.
    ///
    /// # Errors
    ///
    /// - [`PlannerError::EmptyActionSet`] when no actions are given
    /// - [`PlannerError::DuplicateAction`] when two actions share a kind tag
    pub fn new(actions: Vec<Box<dyn Action>>) -> Result<Self, PlannerError> {
        if actions.is_empty() {
            return Err(PlannerError::EmptyActionSet);
        }
        for (i, action) in actions.iter().enumerate() {
            if actions[..i].iter().any(|a| a.kind() == action.kind()) {
                return Err(PlannerError::DuplicateAction(action.kind()));
            }
        }

        let exec = actions.iter().map(|_| ExecState::Idle).collect();
        Ok(Self {
            actions,
            exec,
            current: None,
            runner: ActionRunner::new(),
            last_scores: Vec::new(),
        })
    }

    /// The kind of the currently running action, if any.
    pub fn current_action(&self) -> Option<ActionKind> {
        self.current.map(|idx| self.actions[idx].kind())
    }

    /// Name of the currently running action, if any.
    pub fn current_action_name(&self) -> Option<&'static str> {
        self.current_action().map(|kind| kind.into())
    }

    /// Scores from the latest evaluation pass, eligible actions only, in
    /// registration order. For tooling and tests.
    pub fn last_evaluated_utilities(&self) -> &[(ActionKind, f32)] {
        &self.last_scores
    }

    /// Runs one planning tick: evaluate, transition, step.
    ///
    /// The host is expected to refresh `snapshot` via
    /// [`tactical_core::perceive`] before each call; all scoring in this
    /// tick reads that single snapshot instance.
    pub fn tick(
        &mut self,
        agent: &mut Agent,
        field: &mut Battlefield,
        snapshot: &WorldSnapshot,
        dt: f32,
    ) {
        let best = self.evaluate(agent, snapshot);

        match best {
            None => {
                // No viable action: Idle is a valid steady state.
                if let Some(idx) = self.current.take() {
                    tracing::debug!(
                        agent = agent.id.0,
                        action = %self.actions[idx].kind(),
                        "no eligible action, going idle"
                    );
                    self.runner
                        .cancel(&*self.actions[idx], agent, &mut self.exec[idx]);
                }
            }
            Some((idx, score)) => {
                let restart = self.current == Some(idx)
                    && self.actions[idx].is_complete(agent, snapshot, &self.exec[idx]);

                if self.current != Some(idx) || restart {
                    // Atomic switch: stop the outgoing run before the
                    // incoming one starts.
                    if let Some(old) = self.current.take() {
                        self.runner
                            .cancel(&*self.actions[old], agent, &mut self.exec[old]);
                    }

                    tracing::debug!(
                        agent = agent.id.0,
                        action = %self.actions[idx].kind(),
                        score,
                        restart,
                        "starting action"
                    );
                    self.exec[idx] = self.actions[idx].init_state();
                    self.actions[idx].start(agent, snapshot, &mut self.exec[idx]);
                    self.runner.begin();
                    self.current = Some(idx);
                }
            }
        }

        // Step the current action once per tick; a terminal status releases
        // the slot so the next tick re-plans.
        if let Some(idx) = self.current {
            let status =
                self.runner
                    .tick(&*self.actions[idx], agent, field, &mut self.exec[idx], dt);
            match status {
                StepStatus::Running => {}
                StepStatus::Completed => {
                    tracing::debug!(
                        agent = agent.id.0,
                        action = %self.actions[idx].kind(),
                        "action completed"
                    );
                    self.current = None;
                }
                StepStatus::Failed => {
                    tracing::debug!(
                        agent = agent.id.0,
                        action = %self.actions[idx].kind(),
                        "action failed, re-planning next tick"
                    );
                    self.current = None;
                }
            }
        }
    }

    /// Evaluation pass: score every eligible action and track the best
    /// under strict `>` so the first-registered action wins ties.
    fn evaluate(&mut self, agent: &Agent, snapshot: &WorldSnapshot) -> Option<(usize, f32)> {
        self.last_scores.clear();
        let mut best: Option<(usize, f32)> = None;

        for (idx, action) in self.actions.iter().enumerate() {
            if !action.preconditions_met(agent, snapshot) {
                tracing::trace!(agent = agent.id.0, action = %action.kind(), "ineligible");
                continue;
            }

            let score = action.utility(agent, snapshot);
            debug_assert!(score >= 0.0, "utility must be non-negative");
            self.last_scores.push((action.kind(), score));

            tracing::debug!(agent = agent.id.0, action = %action.kind(), score, "scored");

            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((idx, score));
            }
        }

        best
    }
}
