//! Per-tick world-state snapshot.
//!
//! A [`WorldSnapshot`] is the only view of the world the planner's scoring
//! functions see. It is built once per planning tick by
//! [`perceive`](crate::perceive) and never mutated afterwards, so every
//! action scores against the same facts.

use crate::battlefield::PickupId;
use crate::geometry::Vec2;

/// Derived facts about one resolvable pickup.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupFact {
    pub id: PickupId,
    pub position: Vec2,
    pub distance: f32,
    /// Whether the pickup lies within the agent's perception range.
    pub in_perception: bool,
}

/// Immutable per-tick facts about the agent's situation.
///
/// All fields are derived booleans/floats; none of them reference live world
/// state. [`WorldSnapshot::default`] is the all-false/zero snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldSnapshot {
    /// A target exists on the battlefield.
    pub has_target: bool,
    /// The target is within the agent's attack range.
    pub target_in_range: bool,
    /// The target is within the agent's sight range.
    pub can_see_target: bool,
    /// Target health as a fraction of its maximum (0 when no target).
    pub target_health_fraction: f32,

    /// Agent health as a fraction of its maximum.
    pub health_fraction: f32,
    /// Agent health fraction is below its low-health threshold.
    pub low_health: bool,
    /// Agent ammo is at or below its low-resource threshold.
    pub resource_low: bool,
    /// The agent took fire recently.
    pub under_fire: bool,

    /// The agent is standing at a cover point.
    pub in_cover: bool,
    /// A cover point exists within perception range.
    pub cover_available: bool,
    /// Nearest perceivable cover point, if any.
    pub nearest_cover: Option<Vec2>,

    /// A health-restoring pickup exists somewhere on the battlefield.
    pub resource_available: bool,
    /// Nearest health-restoring pickup, if any.
    pub nearest_pickup: Option<PickupFact>,
}
