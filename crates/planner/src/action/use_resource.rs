//! Use-resource action: walk to a health pickup, channel, consume it.
//!
//! # Scoring Policy
//!
//! - Eligible iff the agent is low-health, a health pickup exists, and
//!   health is below maximum.
//! - Utility: 0.9 base, +0.5 when critical (below 15% health), −0.6 when
//!   above half health, −0.3 when the resolved pickup lies outside
//!   perception range. Collapses to 0 when no pickup resolves.
//!
//! The run has two phases: move to the pickup, then channel for a fixed
//! duration. Only after the channel finishes is the heal applied and the
//! pickup removed from the world; an interrupted or failed run leaves
//! health and the pickup untouched.

use tactical_core::{Agent, Battlefield, PickupId, Vec2, WorldSnapshot};

use super::{Action, ActionKind, ExecState};
use crate::status::StepStatus;

/// Base desirability of healing while wounded.
const BASE_UTILITY: f32 = 0.9;
/// Bonus when health is critical.
const CRITICAL_BONUS: f32 = 0.5;
/// Health fraction below which the critical bonus applies.
const CRITICAL_THRESHOLD: f32 = 0.15;
/// Penalty when the agent is still above half health.
const HEALTHY_PENALTY: f32 = 0.6;
/// Health fraction above which the healthy penalty applies.
const HEALTHY_THRESHOLD: f32 = 0.5;
/// Penalty when the resolved pickup is beyond perception range.
const OUT_OF_PERCEPTION_PENALTY: f32 = 0.3;

/// Immutable use-resource configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UseResourceAction {
    /// Movement speed towards the pickup, in world units per second.
    pub move_speed: f32,
    /// Seconds of channeling after arrival before the heal applies.
    pub channel_duration: f32,
}

impl Default for UseResourceAction {
    fn default() -> Self {
        Self {
            move_speed: 4.0,
            channel_duration: 1.5,
        }
    }
}

/// Transient per-run use-resource state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UseResourceState {
    /// Pickup pinned at start.
    pub pickup_id: Option<PickupId>,
    pub destination: Option<Vec2>,
    /// Seconds spent channeling since arrival.
    pub channel_elapsed: f32,
}

impl Action for UseResourceAction {
    fn kind(&self) -> ActionKind {
        ActionKind::UseResource
    }

    fn preconditions_met(&self, agent: &Agent, snapshot: &WorldSnapshot) -> bool {
        snapshot.low_health && snapshot.resource_available && !agent.health().is_full()
    }

    fn utility(&self, _agent: &Agent, snapshot: &WorldSnapshot) -> f32 {
        let Some(pickup) = snapshot.nearest_pickup else {
            return 0.0;
        };
        let mut utility = BASE_UTILITY;
        if snapshot.health_fraction < CRITICAL_THRESHOLD {
            utility += CRITICAL_BONUS;
        }
        if snapshot.health_fraction > HEALTHY_THRESHOLD {
            utility -= HEALTHY_PENALTY;
        }
        if !pickup.in_perception {
            utility -= OUT_OF_PERCEPTION_PENALTY;
        }
        utility.max(0.0)
    }

    fn init_state(&self) -> ExecState {
        ExecState::UseResource(UseResourceState::default())
    }

    fn start(&self, _agent: &Agent, snapshot: &WorldSnapshot, exec: &mut ExecState) {
        let state = exec.use_resource_mut();
        if let Some(pickup) = snapshot.nearest_pickup {
            state.pickup_id = Some(pickup.id);
            state.destination = Some(pickup.position);
        }
        state.channel_elapsed = 0.0;
    }

    fn step(
        &self,
        agent: &mut Agent,
        field: &mut Battlefield,
        exec: &mut ExecState,
        dt: f32,
    ) -> StepStatus {
        let state = exec.use_resource_mut();
        let (Some(id), Some(dest)) = (state.pickup_id, state.destination) else {
            return StepStatus::Failed;
        };

        // The pickup may have been consumed by someone else mid-run.
        if field.pickup(id).is_none() {
            return StepStatus::Failed;
        }

        if !agent.move_towards(dest, self.move_speed, dt) {
            return StepStatus::Running;
        }

        state.channel_elapsed += dt;
        if state.channel_elapsed < self.channel_duration {
            return StepStatus::Running;
        }

        // Channel finished: consume the pickup and apply its effects.
        let Some(pickup) = field.remove_pickup(id) else {
            return StepStatus::Failed;
        };
        agent.heal(pickup.heal_amount);
        agent.restore_resource(pickup.kind, pickup.restore_amount);

        StepStatus::Completed
    }

    fn is_complete(&self, _agent: &Agent, _snapshot: &WorldSnapshot, _exec: &ExecState) -> bool {
        // Fixed-length task; completion is reported through `step`.
        false
    }

    fn stop(&self, _agent: &Agent, exec: &mut ExecState) {
        // Drops channel progress; an interrupted heal applies nothing.
        *exec = ExecState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactical_core::{
        AgentId, AgentProfile, Health, PickupFact, ResourceKind, ResourcePickup, ResourcePool,
    };

    fn agent(health: f32) -> Agent {
        Agent::new(
            AgentId(0),
            AgentProfile::default(),
            Vec2::ORIGIN,
            Health::new(health, 100.0),
            ResourcePool::new(10, 0),
        )
    }

    fn pickup_at(x: f32) -> ResourcePickup {
        ResourcePickup {
            id: PickupId(1),
            kind: ResourceKind::Mana,
            position: Vec2::new(x, 0.0),
            heal_amount: 40.0,
            restore_amount: 0,
        }
    }

    fn snapshot_for(health_fraction: f32, distance: f32, in_perception: bool) -> WorldSnapshot {
        WorldSnapshot {
            low_health: health_fraction < 0.3,
            health_fraction,
            resource_available: true,
            nearest_pickup: Some(PickupFact {
                id: PickupId(1),
                position: Vec2::new(distance, 0.0),
                distance,
                in_perception,
            }),
            ..WorldSnapshot::default()
        }
    }

    #[test]
    fn utility_critical_bonus() {
        let action = UseResourceAction::default();
        let score = action.utility(&agent(10.0), &snapshot_for(0.1, 4.0, true));
        assert!((score - 1.4).abs() < 1e-6);
    }

    #[test]
    fn utility_healthy_penalty() {
        let action = UseResourceAction::default();
        let score = action.utility(&agent(60.0), &snapshot_for(0.6, 4.0, true));
        assert!((score - 0.3).abs() < 1e-6);
    }

    #[test]
    fn utility_out_of_perception_penalty() {
        let action = UseResourceAction::default();
        let score = action.utility(&agent(20.0), &snapshot_for(0.2, 25.0, false));
        assert!((score - 0.6).abs() < 1e-6);
    }

    #[test]
    fn utility_collapses_without_pickup() {
        let action = UseResourceAction::default();
        let snapshot = WorldSnapshot {
            nearest_pickup: None,
            ..snapshot_for(0.1, 4.0, true)
        };
        assert_eq!(action.utility(&agent(10.0), &snapshot), 0.0);
    }

    #[test]
    fn run_moves_channels_and_consumes() {
        let action = UseResourceAction {
            move_speed: 4.0,
            channel_duration: 1.5,
        };
        let mut agent = agent(10.0);
        let mut field = Battlefield::new();
        field.pickups.push(pickup_at(4.0));

        let snapshot = snapshot_for(0.1, 4.0, true);
        let mut exec = action.init_state();
        action.start(&agent, &snapshot, &mut exec);

        // Two move steps (2 units each) to reach x=4.
        assert!(action.step(&mut agent, &mut field, &mut exec, 0.5).is_running());
        assert!(action.step(&mut agent, &mut field, &mut exec, 0.5).is_running());
        // Channel for 1.0s.
        assert!(action.step(&mut agent, &mut field, &mut exec, 0.5).is_running());
        let status = action.step(&mut agent, &mut field, &mut exec, 0.5);
        assert!(status.is_completed());

        assert_eq!(agent.health().current(), 50.0);
        assert!(field.pickups.is_empty());
    }

    #[test]
    fn vanished_pickup_fails_without_partial_heal() {
        let action = UseResourceAction::default();
        let mut agent = agent(10.0);
        let mut field = Battlefield::new();
        field.pickups.push(pickup_at(4.0));

        let snapshot = snapshot_for(0.1, 4.0, true);
        let mut exec = action.init_state();
        action.start(&agent, &snapshot, &mut exec);

        assert!(action.step(&mut agent, &mut field, &mut exec, 0.5).is_running());

        // Someone else consumes the pickup mid-run.
        field.remove_pickup(PickupId(1));
        let status = action.step(&mut agent, &mut field, &mut exec, 0.5);
        assert!(status.is_failed());
        assert_eq!(agent.health().current(), 10.0);
    }
}
