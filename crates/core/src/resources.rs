//! Consumable resource pools.
//!
//! Resources are keyed by an explicit [`ResourceKind`] tag rather than any
//! runtime type identity, so action configuration can reference them by
//! value. Consumption is all-or-nothing: a failed [`ResourcePool::try_consume`]
//! leaves the pool untouched.

/// Enum tag identifying an individual resource type.
///
/// Used in action costs and pickup definitions to reference a specific pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceKind {
    /// Ranged attack ammunition.
    Ammo,
    /// Casting resource.
    Mana,
}

/// Current resource counts for one agent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourcePool {
    ammo: u32,
    mana: u32,
}

impl ResourcePool {
    pub const fn new(ammo: u32, mana: u32) -> Self {
        Self { ammo, mana }
    }

    pub fn amount(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Ammo => self.ammo,
            ResourceKind::Mana => self.mana,
        }
    }

    /// Consumes `amount` units of `kind` if the pool holds at least that
    /// much. Returns `false` and leaves the count unchanged otherwise.
    pub fn try_consume(&mut self, kind: ResourceKind, amount: u32) -> bool {
        let slot = self.slot_mut(kind);
        if *slot < amount {
            return false;
        }
        *slot -= amount;
        true
    }

    /// Adds `amount` units of `kind` to the pool.
    pub fn restore(&mut self, kind: ResourceKind, amount: u32) {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_add(amount);
    }

    fn slot_mut(&mut self, kind: ResourceKind) -> &mut u32 {
        match kind {
            ResourceKind::Ammo => &mut self.ammo,
            ResourceKind::Mana => &mut self.mana,
        }
    }
}
