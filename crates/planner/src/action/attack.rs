//! Attack action: cooldown-gated shots that spend ammunition.
//!
//! # Scoring Policy
//!
//! - Eligible iff a target exists, is in attack range, is visible, and the
//!   agent holds at least one shot's worth of ammo.
//! - Utility: 0.6 base, +0.3 finishing bonus when the target is below 30%
//!   health, −0.4 when the agent itself is low-health, −0.2 when ammo is
//!   running low. Floored at 0.
//!
//! Attacking is continuous: `step` keeps returning `Running` while shots
//! land, and the run ends when preconditions stop holding (target dead,
//! out of range, ammo gone) — `is_complete` mirrors the precondition gate.

use tactical_core::{Agent, Battlefield, ResourceKind, WorldSnapshot};

use super::{Action, ActionKind, ExecState};
use crate::status::StepStatus;

/// Base desirability of attacking an eligible target.
const BASE_UTILITY: f32 = 0.6;
/// Bonus for finishing off a weakened target.
const FINISHING_BONUS: f32 = 0.3;
/// Target health fraction below which the finishing bonus applies.
const FINISHING_THRESHOLD: f32 = 0.3;
/// Penalty when the agent itself is low on health.
const LOW_HEALTH_PENALTY: f32 = 0.4;
/// Penalty when ammo is running low.
const LOW_RESOURCE_PENALTY: f32 = 0.2;

/// Immutable attack configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttackAction {
    /// Damage applied per shot.
    pub damage: f32,
    /// Seconds between shots.
    pub cooldown: f32,
    /// Resource spent per shot.
    pub ammo_kind: ResourceKind,
    pub ammo_cost: u32,
}

impl Default for AttackAction {
    fn default() -> Self {
        Self {
            damage: 10.0,
            cooldown: 1.0,
            ammo_kind: ResourceKind::Ammo,
            ammo_cost: 1,
        }
    }
}

/// Transient per-run attack state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AttackState {
    /// Seconds until the next shot may fire. Zero on start so the first
    /// shot is immediate.
    pub cooldown_remaining: f32,
}

impl Action for AttackAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Attack
    }

    fn preconditions_met(&self, agent: &Agent, snapshot: &WorldSnapshot) -> bool {
        snapshot.has_target
            && snapshot.target_in_range
            && snapshot.can_see_target
            && agent.resource_amount(self.ammo_kind) >= self.ammo_cost
    }

    fn utility(&self, _agent: &Agent, snapshot: &WorldSnapshot) -> f32 {
        let mut utility = BASE_UTILITY;
        if snapshot.target_health_fraction < FINISHING_THRESHOLD {
            utility += FINISHING_BONUS;
        }
        if snapshot.low_health {
            utility -= LOW_HEALTH_PENALTY;
        }
        if snapshot.resource_low {
            utility -= LOW_RESOURCE_PENALTY;
        }
        utility.max(0.0)
    }

    fn init_state(&self) -> ExecState {
        ExecState::Attack(AttackState::default())
    }

    fn start(&self, _agent: &Agent, _snapshot: &WorldSnapshot, exec: &mut ExecState) {
        // Fresh run: cooldown allows an immediate first shot.
        exec.attack_mut().cooldown_remaining = 0.0;
    }

    fn step(
        &self,
        agent: &mut Agent,
        field: &mut Battlefield,
        exec: &mut ExecState,
        dt: f32,
    ) -> StepStatus {
        let state = exec.attack_mut();

        if state.cooldown_remaining > 0.0 {
            state.cooldown_remaining -= dt;
            if state.cooldown_remaining > 0.0 {
                return StepStatus::Running;
            }
        }

        // Fire: check the target first so a whiff never spends ammo, then
        // consume all-or-nothing so a short pool is never partially drained.
        if field.target.is_none() {
            return StepStatus::Failed;
        }
        if !agent.try_consume(self.ammo_kind, self.ammo_cost) {
            return StepStatus::Failed;
        }
        field.apply_damage_to_target(self.damage);
        state.cooldown_remaining = self.cooldown;

        StepStatus::Running
    }

    fn is_complete(&self, agent: &Agent, snapshot: &WorldSnapshot, _exec: &ExecState) -> bool {
        // A continuously eligible attack never self-completes; the run ends
        // when the precondition gate closes.
        !self.preconditions_met(agent, snapshot)
    }

    fn stop(&self, _agent: &Agent, exec: &mut ExecState) {
        *exec = ExecState::Idle;
    }
}
