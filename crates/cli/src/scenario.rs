//! Scenario files: a RON description of one agent's engagement.
//!
//! The scenario owns the file format; it builds the core types rather than
//! serializing them directly, so defaults can be filled in per field.

use serde::Deserialize;
use tactical_core::{
    Agent, AgentId, AgentProfile, Battlefield, CoverPoint, Health, PickupId, ResourceKind,
    ResourcePickup, ResourcePool, Target, Vec2,
};

/// Top-level scenario description.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Number of planning ticks to simulate.
    pub ticks: u32,
    /// Seconds per tick.
    pub dt: f32,
    pub agent: AgentSpec,
    pub battlefield: BattlefieldSpec,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AgentSpec {
    pub position: Vec2,
    pub health: f32,
    pub max_health: f32,
    pub ammo: u32,
    #[serde(default)]
    pub mana: u32,
    /// Profile overrides; unset fields keep their defaults.
    #[serde(default)]
    pub profile: ProfileSpec,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileSpec {
    pub attack_range: Option<f32>,
    pub sight_range: Option<f32>,
    pub perception_range: Option<f32>,
    pub low_health_threshold: Option<f32>,
    pub low_resource_threshold: Option<u32>,
    pub move_speed: Option<f32>,
    pub arrival_threshold: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BattlefieldSpec {
    #[serde(default)]
    pub target: Option<TargetSpec>,
    #[serde(default)]
    pub cover: Vec<Vec2>,
    #[serde(default)]
    pub pickups: Vec<PickupSpec>,
    #[serde(default)]
    pub under_fire: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TargetSpec {
    pub position: Vec2,
    pub health: f32,
    pub max_health: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PickupSpec {
    pub position: Vec2,
    #[serde(default)]
    pub kind: Option<ResourceKind>,
    #[serde(default)]
    pub heal_amount: f32,
    #[serde(default)]
    pub restore_amount: u32,
}

impl Scenario {
    /// A built-in skirmish used when no scenario file is given: a wounded
    /// agent that heals first, then re-engages its target.
    pub fn builtin() -> Self {
        Self {
            ticks: 60,
            dt: 0.25,
            agent: AgentSpec {
                position: Vec2::ORIGIN,
                health: 20.0,
                max_health: 100.0,
                ammo: 6,
                mana: 0,
                profile: ProfileSpec::default(),
            },
            battlefield: BattlefieldSpec {
                target: Some(TargetSpec {
                    position: Vec2::new(6.0, 0.0),
                    health: 80.0,
                    max_health: 100.0,
                }),
                cover: vec![Vec2::new(-3.0, 0.0)],
                pickups: vec![PickupSpec {
                    position: Vec2::new(2.0, 2.0),
                    kind: Some(ResourceKind::Mana),
                    heal_amount: 50.0,
                    restore_amount: 0,
                }],
                under_fire: true,
            },
        }
    }

    pub fn build_agent(&self) -> Agent {
        let spec = &self.agent;
        let defaults = AgentProfile::default();
        let overrides = &spec.profile;
        let profile = AgentProfile {
            attack_range: overrides.attack_range.unwrap_or(defaults.attack_range),
            sight_range: overrides.sight_range.unwrap_or(defaults.sight_range),
            perception_range: overrides
                .perception_range
                .unwrap_or(defaults.perception_range),
            low_health_threshold: overrides
                .low_health_threshold
                .unwrap_or(defaults.low_health_threshold),
            low_resource_threshold: overrides
                .low_resource_threshold
                .unwrap_or(defaults.low_resource_threshold),
            move_speed: overrides.move_speed.unwrap_or(defaults.move_speed),
            arrival_threshold: overrides
                .arrival_threshold
                .unwrap_or(defaults.arrival_threshold),
        };

        Agent::new(
            AgentId(0),
            profile,
            spec.position,
            Health::new(spec.health, spec.max_health),
            ResourcePool::new(spec.ammo, spec.mana),
        )
    }

    pub fn build_battlefield(&self) -> Battlefield {
        let spec = &self.battlefield;
        let mut field = Battlefield::new();

        field.target = spec
            .target
            .as_ref()
            .map(|t| Target::new(t.position, Health::new(t.health, t.max_health)));

        field.cover_points = spec.cover.iter().map(|&p| CoverPoint::new(p)).collect();

        field.pickups = spec
            .pickups
            .iter()
            .enumerate()
            .map(|(i, p)| ResourcePickup {
                id: PickupId(i as u32),
                kind: p.kind.unwrap_or(ResourceKind::Mana),
                position: p.position,
                heal_amount: p.heal_amount,
                restore_amount: p.restore_amount,
            })
            .collect();

        field.under_fire = spec.under_fire;
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_scenario_builds() {
        let scenario = Scenario::builtin();
        let agent = scenario.build_agent();
        let field = scenario.build_battlefield();

        assert_eq!(agent.health().current(), 20.0);
        assert!(field.target.is_some());
        assert_eq!(field.pickups.len(), 1);
    }

    #[test]
    fn ron_round_trip_with_defaults() {
        let text = r#"
            Scenario(
                ticks: 10,
                dt: 0.5,
                agent: (
                    position: (x: 0.0, y: 0.0),
                    health: 50.0,
                    max_health: 100.0,
                    ammo: 4,
                ),
                battlefield: (
                    target: Some((position: (x: 5.0, y: 0.0), health: 30.0, max_health: 100.0)),
                ),
            )
        "#;
        let scenario: Scenario = ron::from_str(text).expect("scenario parses");
        assert_eq!(scenario.ticks, 10);
        assert_eq!(scenario.agent.mana, 0);
        assert!(scenario.battlefield.cover.is_empty());
        assert!(!scenario.battlefield.under_fire);
    }
}
