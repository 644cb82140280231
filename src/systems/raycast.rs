//! Raycast query interface consumed by the controller resolvers.
//!
//! The spatial backend is a collaborator, not part of the controller: any
//! static index that can answer nearest-hit ray queries works. The crate
//! ships `spatial::SegmentWorld` as its own queryable backend.

use crate::core::vec2::Vec2;
use crate::domain::mask::CollisionMask;

use super::controller::perf::{PERF_RAYS_CAST, PERF_RAY_HITS};

/// Nearest intersection of a single ray with blocking geometry
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin along the ray direction
    pub distance: f32,
    /// Unit surface normal at the hit point, oriented against the ray
    pub normal: Vec2,
}

/// A static collision world the controller can query.
///
/// Queries are read-only; many actors may resolve against the same world
/// concurrently.
pub trait CollisionWorld {
    /// Nearest qualifying intersection within `max_distance`, or `None`.
    ///
    /// `direction` must be a unit vector; only geometry whose category
    /// intersects `mask` qualifies.
    fn cast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: CollisionMask,
    ) -> Option<RayHit>;
}

/// Cast through the perf counters. All resolver rays go through here so
/// the per-step ray budget is observable.
pub(crate) fn cast<W: CollisionWorld>(
    world: &W,
    origin: Vec2,
    direction: Vec2,
    max_distance: f32,
    mask: CollisionMask,
) -> Option<RayHit> {
    PERF_RAYS_CAST.with(|c| {
        let mut v = c.borrow_mut();
        *v = v.saturating_add(1);
    });
    let hit = world.cast(origin, direction, max_distance, mask);
    if hit.is_some() {
        PERF_RAY_HITS.with(|c| {
            let mut v = c.borrow_mut();
            *v = v.saturating_add(1);
        });
    }
    hit
}
