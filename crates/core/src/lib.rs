//! Deterministic agent and world state for the tactical planner.
//!
//! `tactical-core` defines the data the planner reads (the per-tick
//! [`WorldSnapshot`]) and the state it mutates through a public API
//! ([`Agent`], [`Battlefield`]). All planner-visible facts are derived by
//! [`perceive`] once per tick; the planner itself never inspects raw world
//! geometry.

pub mod agent;
pub mod battlefield;
pub mod geometry;
pub mod health;
pub mod perception;
pub mod resources;
pub mod snapshot;

pub use agent::{Agent, AgentId, AgentProfile};
pub use battlefield::{Battlefield, CoverPoint, PickupId, ResourcePickup, Target};
pub use geometry::Vec2;
pub use health::Health;
pub use perception::perceive;
pub use resources::{ResourceKind, ResourcePool};
pub use snapshot::{PickupFact, WorldSnapshot};
