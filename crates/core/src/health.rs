//! Health pool with saturating mutation.
//!
//! Current and maximum values are stored together; damage and healing
//! saturate so `current` never leaves the `[0, max]` range.

/// A bounded health pool.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Health {
    current: f32,
    max: f32,
}

impl Health {
    /// Creates a health pool at full capacity.
    pub fn full(max: f32) -> Self {
        Self { current: max, max }
    }

    /// Creates a health pool with an explicit current value, clamped to
    /// `[0, max]`.
    pub fn new(current: f32, max: f32) -> Self {
        Self {
            current: current.clamp(0.0, max),
            max,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Current health as a fraction of maximum, in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        if self.max <= 0.0 {
            return 0.0;
        }
        self.current / self.max
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    /// Applies damage, saturating at zero.
    pub fn damage(&mut self, amount: f32) {
        self.current = (self.current - amount.max(0.0)).max(0.0);
    }

    /// Applies healing, saturating at maximum.
    pub fn heal(&mut self, amount: f32) {
        self.current = (self.current + amount.max(0.0)).min(self.max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_and_heal_saturate() {
        let mut hp = Health::new(30.0, 100.0);

        hp.damage(50.0);
        assert_eq!(hp.current(), 0.0);
        assert!(hp.is_depleted());

        hp.heal(250.0);
        assert_eq!(hp.current(), 100.0);
        assert!(hp.is_full());
    }

    #[test]
    fn fraction_tracks_current() {
        let hp = Health::new(15.0, 100.0);
        assert!((hp.fraction() - 0.15).abs() < 1e-6);
    }
}
