use crate::core::vec2::Vec2;
use crate::domain::config::ControllerConfig;
use crate::systems::raycast::{cast, CollisionWorld};

use super::types::{CollisionState, RaySpacing, RaycastOrigins};

/// Resolve vertical motion against floors and ceilings.
///
/// The fan spans the horizontal footprint, with every origin additionally
/// shifted by the already-resolved `velocity.x` so the probes account for
/// this tick's horizontal motion. While climbing, a clamped vertical move
/// re-derives the horizontal component to stay geometrically consistent
/// with the slope, and one extra probe ahead detects a slope-angle change
/// cresting in front of the actor.
pub(crate) fn vertical_collisions<W: CollisionWorld>(
    world: &W,
    config: &ControllerConfig,
    spacing: RaySpacing,
    origins: &RaycastOrigins,
    mut velocity: Vec2,
    mut state: CollisionState,
) -> (Vec2, CollisionState) {
    let direction_y = Vec2::sign(velocity.y);
    let mut ray_length = velocity.y.abs() + config.skin_width;

    for i in 0..config.ver_ray_count {
        let mut ray_origin = if direction_y < 0.0 {
            origins.bottom_left
        } else {
            origins.top_left
        };
        ray_origin.x += spacing.vertical * i as f32 + velocity.x;

        let Some(hit) = cast(
            world,
            ray_origin,
            Vec2::new(0.0, direction_y),
            ray_length,
            config.collision_mask,
        ) else {
            continue;
        };

        velocity.y = (hit.distance - config.skin_width) * direction_y;
        ray_length = hit.distance;

        if state.climbing_slope {
            velocity.x =
                velocity.y / state.slope_angle.to_radians().tan() * Vec2::sign(velocity.x);
        }

        state.below = direction_y < 0.0;
        state.above = direction_y > 0.0;
    }

    if state.climbing_slope {
        // Probe straight ahead at the height the actor will reach this
        // tick; a different angle there means the slope changes before the
        // horizontal move completes
        let direction_x = Vec2::sign(velocity.x);
        if direction_x == 0.0 {
            // Horizontal motion fully clamped: nothing ahead to probe
            return (velocity, state);
        }
        let ray_length = velocity.x.abs() + config.skin_width;
        let base = if direction_x < 0.0 {
            origins.bottom_left
        } else {
            origins.bottom_right
        };
        let ray_origin = base + Vec2::UP * velocity.y;

        if let Some(hit) = cast(
            world,
            ray_origin,
            Vec2::new(direction_x, 0.0),
            ray_length,
            config.collision_mask,
        ) {
            let slope_angle = hit.normal.angle_from_up();
            if slope_angle != state.slope_angle {
                velocity.x = (hit.distance - config.skin_width) * direction_x;
                state.slope_angle = slope_angle;
            }
        }
    }

    (velocity, state)
}
