use super::vec2::Vec2;

/// Axis-aligned bounding box in world space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build from a bottom-left corner and a size
    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self { min: position, max: position + size }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Inset the box by `margin` on every side.
    /// Caller guarantees the margin is smaller than half the extents,
    /// so min <= max still holds afterwards.
    pub fn shrunk(&self, margin: f32) -> Self {
        Self {
            min: Vec2::new(self.min.x + margin, self.min.y + margin),
            max: Vec2::new(self.max.x - margin, self.max.y - margin),
        }
    }

    pub fn translated(&self, delta: Vec2) -> Self {
        Self { min: self.min + delta, max: self.max + delta }
    }
}
