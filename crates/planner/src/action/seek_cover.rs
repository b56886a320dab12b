//! Seek-cover action: retreat to the nearest cover point when wounded.
//!
//! # Scoring Policy
//!
//! - Eligible iff the agent is not already in cover, cover is available
//!   within perception, and the agent is low-health.
//! - Utility: 0.8 base, +0.2 while under fire, −0.5 when not actually
//!   low-health. Collapses to 0 when no cover waypoint resolves.
//!
//! The run is a plain move: `start` pins the nearest cover point from the
//! snapshot as the waypoint, each `step` advances towards it, and arrival
//! within the agent's arrival threshold completes the run.

use tactical_core::{Agent, Battlefield, Vec2, WorldSnapshot};

use super::{Action, ActionKind, ExecState};
use crate::status::StepStatus;

/// Base desirability of reaching cover while wounded and exposed.
const BASE_UTILITY: f32 = 0.8;
/// Bonus while actively taking fire.
const UNDER_FIRE_BONUS: f32 = 0.2;
/// Penalty when the agent is not actually low on health.
const HEALTHY_PENALTY: f32 = 0.5;

/// Immutable seek-cover configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeekCoverAction {
    /// Movement speed used for the retreat, in world units per second.
    pub move_speed: f32,
}

impl Default for SeekCoverAction {
    fn default() -> Self {
        Self { move_speed: 4.0 }
    }
}

/// Transient per-run seek-cover state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SeekCoverState {
    /// Cover waypoint pinned at start; the run keeps heading there even if
    /// a closer point appears later.
    pub destination: Option<Vec2>,
}

impl Action for SeekCoverAction {
    fn kind(&self) -> ActionKind {
        ActionKind::SeekCover
    }

    fn preconditions_met(&self, _agent: &Agent, snapshot: &WorldSnapshot) -> bool {
        !snapshot.in_cover && snapshot.cover_available && snapshot.low_health
    }

    fn utility(&self, _agent: &Agent, snapshot: &WorldSnapshot) -> f32 {
        if snapshot.nearest_cover.is_none() {
            return 0.0;
        }
        let mut utility = BASE_UTILITY;
        if snapshot.under_fire {
            utility += UNDER_FIRE_BONUS;
        }
        if !snapshot.low_health {
            utility -= HEALTHY_PENALTY;
        }
        utility.max(0.0)
    }

    fn init_state(&self) -> ExecState {
        ExecState::SeekCover(SeekCoverState::default())
    }

    fn start(&self, _agent: &Agent, snapshot: &WorldSnapshot, exec: &mut ExecState) {
        exec.seek_cover_mut().destination = snapshot.nearest_cover;
    }

    fn step(
        &self,
        agent: &mut Agent,
        _field: &mut Battlefield,
        exec: &mut ExecState,
        dt: f32,
    ) -> StepStatus {
        let state = exec.seek_cover_mut();
        match state.destination {
            Some(dest) => {
                if agent.move_towards(dest, self.move_speed, dt) {
                    StepStatus::Completed
                } else {
                    StepStatus::Running
                }
            }
            // Started without a resolvable waypoint; should have scored 0.
            None => StepStatus::Failed,
        }
    }

    fn is_complete(&self, agent: &Agent, _snapshot: &WorldSnapshot, exec: &ExecState) -> bool {
        match exec {
            ExecState::SeekCover(state) => state
                .destination
                .is_some_and(|dest| {
                    agent.position.distance_to(dest) <= agent.profile.arrival_threshold
                }),
            _ => false,
        }
    }

    fn stop(&self, _agent: &Agent, exec: &mut ExecState) {
        // Clears the waypoint so an interrupted retreat leaves no marker.
        *exec = ExecState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactical_core::{AgentId, AgentProfile, Health, ResourcePool};

    fn wounded_agent() -> Agent {
        Agent::new(
            AgentId(0),
            AgentProfile::default(),
            Vec2::ORIGIN,
            Health::new(15.0, 100.0),
            ResourcePool::new(10, 0),
        )
    }

    fn cover_snapshot(under_fire: bool) -> WorldSnapshot {
        WorldSnapshot {
            low_health: true,
            health_fraction: 0.15,
            cover_available: true,
            nearest_cover: Some(Vec2::new(3.0, 0.0)),
            under_fire,
            ..WorldSnapshot::default()
        }
    }

    #[test]
    fn utility_under_fire() {
        let action = SeekCoverAction::default();
        let score = action.utility(&wounded_agent(), &cover_snapshot(true));
        assert!((score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn utility_collapses_without_waypoint() {
        let action = SeekCoverAction::default();
        let snapshot = WorldSnapshot {
            nearest_cover: None,
            ..cover_snapshot(true)
        };
        assert_eq!(action.utility(&wounded_agent(), &snapshot), 0.0);
    }

    #[test]
    fn healthy_penalty_applies() {
        let action = SeekCoverAction::default();
        let snapshot = WorldSnapshot {
            low_health: false,
            ..cover_snapshot(false)
        };
        let score = action.utility(&wounded_agent(), &snapshot);
        assert!((score - 0.3).abs() < 1e-6);
    }

    #[test]
    fn run_completes_on_arrival() {
        let action = SeekCoverAction::default();
        let mut agent = wounded_agent();
        let mut field = Battlefield::new();
        let snapshot = cover_snapshot(true);

        let mut exec = action.init_state();
        action.start(&agent, &snapshot, &mut exec);

        // speed 4.0, dt 0.5 -> 2 units per step towards cover at x=3.
        assert!(action.step(&mut agent, &mut field, &mut exec, 0.5).is_running());
        assert!(action
            .step(&mut agent, &mut field, &mut exec, 0.5)
            .is_completed());
        assert!(action.is_complete(&agent, &snapshot, &exec));
    }
}
