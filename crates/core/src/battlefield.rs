//! The host world one agent plans against.
//!
//! A [`Battlefield`] holds everything outside the agent itself: the current
//! target, cover points, and consumable pickups. Execution-side mutation
//! (damaging the target, removing a consumed pickup) goes through the
//! methods here so the planner core never touches raw fields.

use crate::geometry::Vec2;
use crate::health::Health;
use crate::resources::ResourceKind;

/// The opposing combatant the agent is engaging.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    pub position: Vec2,
    pub health: Health,
}

impl Target {
    pub fn new(position: Vec2, health: Health) -> Self {
        Self { position, health }
    }
}

/// A static point the agent can take cover at.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverPoint {
    pub position: Vec2,
}

impl CoverPoint {
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }
}

/// Identifier for a resource pickup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupId(pub u32);

/// A consumable world prop: restores resources or health when used.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourcePickup {
    pub id: PickupId,
    pub kind: ResourceKind,
    pub position: Vec2,
    /// Health restored when the pickup is consumed.
    pub heal_amount: f32,
    /// Resource units restored when the pickup is consumed.
    pub restore_amount: u32,
}

/// World state for one agent's engagement.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Battlefield {
    pub target: Option<Target>,
    pub cover_points: Vec<CoverPoint>,
    pub pickups: Vec<ResourcePickup>,
    /// Set by the host when the agent took fire recently.
    pub under_fire: bool,
}

impl Battlefield {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nearest cover point to `from`, if any exist.
    pub fn nearest_cover(&self, from: Vec2) -> Option<CoverPoint> {
        self.cover_points
            .iter()
            .copied()
            .min_by(|a, b| {
                from.distance_to(a.position)
                    .total_cmp(&from.distance_to(b.position))
            })
    }

    /// Nearest pickup of the given kind to `from`, if any exist.
    pub fn nearest_pickup(&self, from: Vec2, kind: ResourceKind) -> Option<ResourcePickup> {
        self.pickups
            .iter()
            .filter(|p| p.kind == kind)
            .copied()
            .min_by(|a, b| {
                from.distance_to(a.position)
                    .total_cmp(&from.distance_to(b.position))
            })
    }

    /// Nearest pickup that restores health, if any exist.
    pub fn nearest_heal_pickup(&self, from: Vec2) -> Option<ResourcePickup> {
        self.pickups
            .iter()
            .filter(|p| p.heal_amount > 0.0)
            .copied()
            .min_by(|a, b| {
                from.distance_to(a.position)
                    .total_cmp(&from.distance_to(b.position))
            })
    }

    pub fn pickup(&self, id: PickupId) -> Option<&ResourcePickup> {
        self.pickups.iter().find(|p| p.id == id)
    }

    /// Removes a pickup from the world, returning it if it was still there.
    pub fn remove_pickup(&mut self, id: PickupId) -> Option<ResourcePickup> {
        let idx = self.pickups.iter().position(|p| p.id == id)?;
        Some(self.pickups.remove(idx))
    }

    /// Applies damage to the current target. Returns `false` when there is
    /// no target to hit.
    pub fn apply_damage_to_target(&mut self, amount: f32) -> bool {
        match &mut self.target {
            Some(target) => {
                target.health.damage(amount);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_cover_picks_closest() {
        let mut field = Battlefield::new();
        field.cover_points.push(CoverPoint::new(Vec2::new(8.0, 0.0)));
        field.cover_points.push(CoverPoint::new(Vec2::new(3.0, 0.0)));

        let nearest = field.nearest_cover(Vec2::ORIGIN).unwrap();
        assert_eq!(nearest.position, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn remove_pickup_is_idempotent() {
        let mut field = Battlefield::new();
        field.pickups.push(ResourcePickup {
            id: PickupId(7),
            kind: ResourceKind::Ammo,
            position: Vec2::ORIGIN,
            heal_amount: 0.0,
            restore_amount: 5,
        });

        assert!(field.remove_pickup(PickupId(7)).is_some());
        assert!(field.remove_pickup(PickupId(7)).is_none());
    }
}
