//! Segment-soup collision world.
//!
//! Level geometry as a flat list of line segments, each tagged with a
//! category mask. Casts scan every segment and keep the nearest hit; no
//! acceleration structure, which is plenty for the handful of rays per
//! actor per tick the controller budgets.

use crate::core::vec2::Vec2;
use crate::domain::mask::CollisionMask;
use crate::systems::raycast::{CollisionWorld, RayHit};

/// Rays closer to parallel than this never intersect a segment
const PARALLEL_EPSILON: f32 = 1e-8;

/// One blocking surface
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
    pub category: CollisionMask,
}

/// Static collision world made of line segments
#[derive(Clone, Debug, Default)]
pub struct SegmentWorld {
    segments: Vec<Segment>,
}

impl SegmentWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_segment(&mut self, a: Vec2, b: Vec2, category: CollisionMask) {
        // Degenerate segments can never be hit; drop them at insertion
        if (b - a).length_squared() > 0.0 {
            self.segments.push(Segment { a, b, category });
        }
    }

    /// Add a connected run of segments through `points`
    pub fn add_chain(&mut self, points: &[Vec2], category: CollisionMask) {
        for pair in points.windows(2) {
            self.add_segment(pair[0], pair[1], category);
        }
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }
}

impl CollisionWorld for SegmentWorld {
    fn cast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: CollisionMask,
    ) -> Option<RayHit> {
        let mut nearest: Option<RayHit> = None;

        for segment in &self.segments {
            if !mask.contains(segment.category) {
                continue;
            }

            let edge = segment.b - segment.a;
            let denom = direction.cross(edge);
            if denom.abs() < PARALLEL_EPSILON {
                continue;
            }

            // origin + t*direction == a + s*edge
            let to_a = segment.a - origin;
            let t = to_a.cross(edge) / denom;
            let s = to_a.cross(direction) / denom;

            if t < 0.0 || t > max_distance || !(0.0..=1.0).contains(&s) {
                continue;
            }
            if nearest.is_some_and(|hit| hit.distance <= t) {
                continue;
            }

            // Orient the surface normal against the ray
            let mut normal = edge.perp().normalize();
            if normal.dot(direction) > 0.0 {
                normal = -normal;
            }

            nearest = Some(RayHit { distance: t, normal });
        }

        nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cast_reports_nearest_of_two_walls() {
        let mut world = SegmentWorld::new();
        world.add_segment(Vec2::new(5.0, -1.0), Vec2::new(5.0, 1.0), CollisionMask::layer(0));
        world.add_segment(Vec2::new(2.0, -1.0), Vec2::new(2.0, 1.0), CollisionMask::layer(0));

        let hit = world
            .cast(Vec2::zero(), Vec2::RIGHT, f32::INFINITY, CollisionMask::ALL)
            .expect("should hit the near wall");
        assert_eq!(hit.distance, 2.0);
        assert_eq!(hit.normal, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn cast_respects_max_distance_and_mask() {
        let mut world = SegmentWorld::new();
        world.add_segment(Vec2::new(3.0, -1.0), Vec2::new(3.0, 1.0), CollisionMask::layer(1));

        assert!(world
            .cast(Vec2::zero(), Vec2::RIGHT, 2.5, CollisionMask::ALL)
            .is_none());
        assert!(world
            .cast(Vec2::zero(), Vec2::RIGHT, 4.0, CollisionMask::layer(0))
            .is_none());
        assert!(world
            .cast(Vec2::zero(), Vec2::RIGHT, 4.0, CollisionMask::layer(1))
            .is_some());
    }

    #[test]
    fn combined_mask_hits_either_category() {
        let mut world = SegmentWorld::new();
        world.add_segment(Vec2::new(2.0, -1.0), Vec2::new(2.0, 1.0), CollisionMask::layer(1));
        world.add_segment(Vec2::new(4.0, -1.0), Vec2::new(4.0, 1.0), CollisionMask::layer(2));

        let filter = CollisionMask::layer(1) | CollisionMask::layer(2);
        let hit = world
            .cast(Vec2::zero(), Vec2::RIGHT, 10.0, filter)
            .expect("filter should admit both categories");
        assert_eq!(hit.distance, 2.0);

        assert!(world
            .cast(Vec2::zero(), Vec2::RIGHT, 10.0, CollisionMask::layer(3))
            .is_none());
    }

    #[test]
    fn cast_normal_faces_the_ray() {
        let mut world = SegmentWorld::new();
        world.add_segment(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0), CollisionMask::ALL);

        let from_above = world
            .cast(Vec2::new(0.0, 2.0), Vec2::DOWN, 5.0, CollisionMask::ALL)
            .unwrap();
        assert!(from_above.normal.y > 0.99);

        let from_below = world
            .cast(Vec2::new(0.0, -2.0), Vec2::UP, 5.0, CollisionMask::ALL)
            .unwrap();
        assert!(from_below.normal.y < -0.99);
    }

    #[test]
    fn parallel_ray_misses() {
        let mut world = SegmentWorld::new();
        world.add_segment(Vec2::new(-1.0, 1.0), Vec2::new(1.0, 1.0), CollisionMask::ALL);

        assert!(world
            .cast(Vec2::zero(), Vec2::RIGHT, 10.0, CollisionMask::ALL)
            .is_none());
    }

    #[test]
    fn degenerate_segments_are_dropped() {
        let mut world = SegmentWorld::new();
        world.add_segment(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0), CollisionMask::ALL);
        assert_eq!(world.segment_count(), 0);
    }
}
