//! The planned-for agent: immutable profile plus mutable combat state.
//!
//! The agent is the sole mutator of its own health and resources. Actions
//! request mutations through the public API here ([`Agent::take_damage`],
//! [`Agent::heal`], [`Agent::try_consume`], [`Agent::move_towards`]) and
//! never reach into fields directly.

use crate::geometry::Vec2;
use crate::health::Health;
use crate::resources::{ResourceKind, ResourcePool};

/// Identifier for an agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

/// Immutable per-agent configuration.
///
/// Profiles are set up once and shared for the agent's lifetime; everything
/// that changes at runtime lives on [`Agent`] itself.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentProfile {
    /// Maximum distance at which the agent's attacks connect.
    pub attack_range: f32,
    /// Maximum distance at which the agent can see its target.
    pub sight_range: f32,
    /// Radius inside which world props (cover, pickups) are considered known.
    pub perception_range: f32,
    /// Health fraction below which the agent counts as low-health.
    pub low_health_threshold: f32,
    /// Resource count at or below which the pool counts as running low.
    pub low_resource_threshold: u32,
    /// Movement speed in world units per second.
    pub move_speed: f32,
    /// Distance at which a movement destination counts as reached.
    pub arrival_threshold: f32,
}

impl Default for AgentProfile {
    fn default() -> Self {
        Self {
            attack_range: 10.0,
            sight_range: 20.0,
            perception_range: 15.0,
            low_health_threshold: 0.3,
            low_resource_threshold: 3,
            move_speed: 4.0,
            arrival_threshold: 0.5,
        }
    }
}

/// One agent's runtime state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id: AgentId,
    pub profile: AgentProfile,
    pub position: Vec2,
    health: Health,
    resources: ResourcePool,
}

impl Agent {
    pub fn new(
        id: AgentId,
        profile: AgentProfile,
        position: Vec2,
        health: Health,
        resources: ResourcePool,
    ) -> Self {
        Self {
            id,
            profile,
            position,
            health,
            resources,
        }
    }

    pub fn health(&self) -> Health {
        self.health
    }

    pub fn resources(&self) -> ResourcePool {
        self.resources
    }

    pub fn resource_amount(&self, kind: ResourceKind) -> u32 {
        self.resources.amount(kind)
    }

    /// Applies incoming damage, saturating at zero health.
    pub fn take_damage(&mut self, amount: f32) {
        self.health.damage(amount);
    }

    /// Restores health, saturating at the maximum.
    pub fn heal(&mut self, amount: f32) {
        self.health.heal(amount);
    }

    /// Consumes resources all-or-nothing. Returns `false` and leaves the
    /// pool untouched when the count is insufficient.
    pub fn try_consume(&mut self, kind: ResourceKind, amount: u32) -> bool {
        self.resources.try_consume(kind, amount)
    }

    pub fn restore_resource(&mut self, kind: ResourceKind, amount: u32) {
        self.resources.restore(kind, amount);
    }

    /// Advances the agent towards `dest` for one tick.
    ///
    /// Returns `true` once the agent is within its arrival threshold of the
    /// destination (including when the step itself lands there).
    pub fn move_towards(&mut self, dest: Vec2, speed: f32, dt: f32) -> bool {
        self.position = self.position.step_towards(dest, speed * dt.max(0.0));
        self.position.distance_to(dest) <= self.profile.arrival_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_agent() -> Agent {
        Agent::new(
            AgentId(1),
            AgentProfile::default(),
            Vec2::ORIGIN,
            Health::full(100.0),
            ResourcePool::new(10, 0),
        )
    }

    #[test]
    fn move_towards_arrives_within_threshold() {
        let mut agent = test_agent();
        let dest = Vec2::new(3.0, 0.0);

        // speed 4.0, dt 0.25 -> one unit per tick
        assert!(!agent.move_towards(dest, 4.0, 0.25));
        assert!(!agent.move_towards(dest, 4.0, 0.25));
        // Third step lands on the destination exactly.
        assert!(agent.move_towards(dest, 4.0, 0.25));
    }

    #[test]
    fn mutation_api_saturates() {
        let mut agent = test_agent();
        agent.take_damage(250.0);
        assert!(agent.health().is_depleted());
        agent.heal(40.0);
        assert_eq!(agent.health().current(), 40.0);
    }
}
