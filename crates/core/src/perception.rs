//! Perception: derives the per-tick snapshot from raw world state.
//!
//! This is the `RefreshWorldState` step the host calls before each planning
//! tick. Everything here is pure; the planner consumes the resulting
//! [`WorldSnapshot`] and never looks at the battlefield geometry itself.

use crate::agent::Agent;
use crate::battlefield::Battlefield;
use crate::resources::ResourceKind;
use crate::snapshot::{PickupFact, WorldSnapshot};

/// Builds the snapshot of derived facts for one planning tick.
///
/// Visibility rules:
/// - The target is perceived through `attack_range` / `sight_range`.
/// - Cover points only count as available within `perception_range`.
/// - Health pickups resolve at any distance; ones beyond perception range
///   are flagged so scoring can penalize them.
pub fn perceive(agent: &Agent, field: &Battlefield) -> WorldSnapshot {
    let profile = &agent.profile;
    let mut snapshot = WorldSnapshot {
        health_fraction: agent.health().fraction(),
        low_health: agent.health().fraction() < profile.low_health_threshold,
        resource_low: agent.resource_amount(ResourceKind::Ammo) <= profile.low_resource_threshold,
        under_fire: field.under_fire,
        ..WorldSnapshot::default()
    };

    if let Some(target) = &field.target {
        let distance = agent.position.distance_to(target.position);
        snapshot.has_target = true;
        snapshot.target_in_range = distance <= profile.attack_range;
        snapshot.can_see_target = distance <= profile.sight_range;
        snapshot.target_health_fraction = target.health.fraction();
    }

    snapshot.in_cover = field
        .cover_points
        .iter()
        .any(|c| agent.position.distance_to(c.position) <= profile.arrival_threshold);

    if let Some(cover) = field.nearest_cover(agent.position) {
        let distance = agent.position.distance_to(cover.position);
        if distance <= profile.perception_range {
            snapshot.cover_available = true;
            snapshot.nearest_cover = Some(cover.position);
        }
    }

    if let Some(pickup) = field.nearest_heal_pickup(agent.position) {
        let distance = agent.position.distance_to(pickup.position);
        snapshot.resource_available = true;
        snapshot.nearest_pickup = Some(PickupFact {
            id: pickup.id,
            position: pickup.position,
            distance,
            in_perception: distance <= profile.perception_range,
        });
    }

    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{AgentId, AgentProfile};
    use crate::battlefield::{CoverPoint, PickupId, ResourcePickup, Target};
    use crate::geometry::Vec2;
    use crate::health::Health;
    use crate::resources::ResourcePool;

    fn agent_at_origin(health: f32, ammo: u32) -> Agent {
        Agent::new(
            AgentId(0),
            AgentProfile::default(),
            Vec2::ORIGIN,
            Health::new(health, 100.0),
            ResourcePool::new(ammo, 0),
        )
    }

    #[test]
    fn empty_field_yields_default_facts() {
        let agent = agent_at_origin(100.0, 10);
        let snapshot = perceive(&agent, &Battlefield::new());

        assert!(!snapshot.has_target);
        assert!(!snapshot.cover_available);
        assert!(!snapshot.resource_available);
        assert!(snapshot.nearest_cover.is_none());
        assert!(snapshot.nearest_pickup.is_none());
    }

    #[test]
    fn target_facts_follow_ranges() {
        let agent = agent_at_origin(100.0, 10);
        let mut field = Battlefield::new();
        field.target = Some(Target::new(
            Vec2::new(12.0, 0.0),
            Health::new(20.0, 100.0),
        ));

        // Default ranges: attack 10, sight 20.
        let snapshot = perceive(&agent, &field);
        assert!(snapshot.has_target);
        assert!(!snapshot.target_in_range);
        assert!(snapshot.can_see_target);
        assert!((snapshot.target_health_fraction - 0.2).abs() < 1e-6);
    }

    #[test]
    fn cover_beyond_perception_is_invisible() {
        let agent = agent_at_origin(100.0, 10);
        let mut field = Battlefield::new();
        field
            .cover_points
            .push(CoverPoint::new(Vec2::new(30.0, 0.0)));

        let snapshot = perceive(&agent, &field);
        assert!(!snapshot.cover_available);
        assert!(snapshot.nearest_cover.is_none());
    }

    #[test]
    fn far_pickup_resolves_but_flags_perception() {
        let agent = agent_at_origin(10.0, 10);
        let mut field = Battlefield::new();
        field.pickups.push(ResourcePickup {
            id: PickupId(1),
            kind: ResourceKind::Mana,
            position: Vec2::new(25.0, 0.0),
            heal_amount: 40.0,
            restore_amount: 0,
        });

        let snapshot = perceive(&agent, &field);
        assert!(snapshot.resource_available);
        let fact = snapshot.nearest_pickup.unwrap();
        assert!(!fact.in_perception);
        assert!((fact.distance - 25.0).abs() < 1e-5);
    }

    #[test]
    fn low_health_and_low_ammo_thresholds() {
        let agent = agent_at_origin(15.0, 2);
        let snapshot = perceive(&agent, &Battlefield::new());
        assert!(snapshot.low_health);
        assert!(snapshot.resource_low);
    }
}
