//! Raycast character controller.
//!
//! Resolves one desired displacement per simulation tick for an
//! axis-aligned rectangular actor against a static collision world:
//! - horizontal and vertical ray fans clamp the velocity against the
//!   nearest blocking surface (skin margin keeps origins off surfaces),
//! - slope climbing redirects horizontal intent up climbable inclines,
//! - slope descending keeps a falling actor glued to descendable inclines,
//! - per-side contact flags are reported back to the caller each tick.
//!
//! The resolvers are pure value-in/value-out functions composed by
//! `Controller::move_by`; later passes depend on values produced by
//! earlier ones (vertical ray origins shift by the resolved horizontal
//! velocity), so the sequence is fixed.

mod horizontal;
mod origins;
pub mod perf;
pub(crate) mod slopes;
mod types;
mod vertical;

pub use origins::{calculate_ray_spacing, update_raycast_origins};
pub use perf::{reset_controller_perf_counters, take_controller_perf_counters};
pub use types::{CollisionState, RaySpacing, RaycastOrigins};

use crate::core::aabb::Aabb;
use crate::core::vec2::Vec2;
use crate::domain::config::ControllerConfig;
use crate::systems::raycast::CollisionWorld;

/// Per-actor motion resolver.
///
/// Owns the actor's box and collision state; the raycast backend is passed
/// to each `move_by` call so one controller can be driven against any
/// `CollisionWorld`. Ray spacing is derived once from the box extents at
/// construction and re-derived only when the shape changes.
#[derive(Clone, Copy, Debug)]
pub struct Controller {
    config: ControllerConfig,
    spacing: RaySpacing,
    origins: RaycastOrigins,
    bounds: Aabb,
    collisions: CollisionState,
}

impl Controller {
    pub fn new(bounds: Aabb, config: ControllerConfig) -> Self {
        let config = config.sanitized();
        Self {
            spacing: calculate_ray_spacing(bounds, &config),
            origins: update_raycast_origins(bounds, config.skin_width),
            bounds,
            config,
            collisions: CollisionState::default(),
        }
    }

    /// Resolve `velocity` against the world and translate the actor's box
    /// by the result.
    ///
    /// Per-tick sequence: refresh ray origins, reset the collision state
    /// (carrying the previous slope angle), snapshot the incoming velocity,
    /// then descend -> horizontal -> vertical, each pass skipped when its
    /// velocity component is zero. Returns the clamped velocity (the
    /// positional delta that was applied) and the updated state.
    pub fn move_by<W: CollisionWorld>(
        &mut self,
        world: &W,
        velocity: Vec2,
    ) -> (Vec2, CollisionState) {
        self.origins = update_raycast_origins(self.bounds, self.config.skin_width);

        let mut state = self.collisions.reset();
        state.velocity_old = velocity;
        let mut velocity = velocity;

        if velocity.y < 0.0 {
            (velocity, state) = slopes::descend_slope(
                world,
                &self.config,
                &self.origins,
                velocity,
                state,
            );
        }
        if velocity.x != 0.0 {
            (velocity, state) = horizontal::horizontal_collisions(
                world,
                &self.config,
                self.spacing,
                &self.origins,
                velocity,
                state,
            );
        }
        if velocity.y != 0.0 {
            (velocity, state) = vertical::vertical_collisions(
                world,
                &self.config,
                self.spacing,
                &self.origins,
                velocity,
                state,
            );
        }

        self.collisions = state;
        self.bounds = self.bounds.translated(velocity);
        (velocity, state)
    }

    /// Contact flags and slope bookkeeping from the latest tick
    pub fn collisions(&self) -> CollisionState {
        self.collisions
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Move or resize the actor's box directly (e.g. teleport). Spacing is
    /// re-derived in case the extents changed.
    pub fn set_bounds(&mut self, bounds: Aabb) {
        self.bounds = bounds;
        self.spacing = calculate_ray_spacing(bounds, &self.config);
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn ray_spacing(&self) -> RaySpacing {
        self.spacing
    }
}
