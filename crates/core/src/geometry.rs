//! Minimal 2D geometry shared by the world state and the planner.

/// A 2D position or offset in world units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ORIGIN: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Vec2) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Moves this point towards `dest` by at most `max_step`, clamping at
    /// the destination so movement never overshoots.
    pub fn step_towards(self, dest: Vec2, max_step: f32) -> Vec2 {
        let dist = self.distance_to(dest);
        if dist <= max_step || dist == 0.0 {
            return dest;
        }
        let t = max_step / dist;
        Vec2::new(self.x + (dest.x - self.x) * t, self.y + (dest.y - self.y) * t)
    }
}
