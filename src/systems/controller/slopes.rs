use crate::core::vec2::Vec2;
use crate::domain::config::ControllerConfig;
use crate::systems::raycast::{cast, CollisionWorld};

use super::types::{CollisionState, RaycastOrigins};

/// Convert horizontal intent into climb-consistent (x, y) velocity.
///
/// Skipped when the actor is already moving upward faster than the climb
/// would carry it (a jump off the slope keeps its velocity).
pub(crate) fn climb_slope(
    mut velocity: Vec2,
    slope_angle: f32,
    mut state: CollisionState,
) -> (Vec2, CollisionState) {
    let move_distance = velocity.x.abs();
    let climb_velocity_y = slope_angle.to_radians().sin() * move_distance;

    if velocity.y <= climb_velocity_y {
        velocity.y = climb_velocity_y;
        velocity.x = slope_angle.to_radians().cos() * move_distance * Vec2::sign(velocity.x);
        state.below = true;
        state.climbing_slope = true;
        state.slope_angle = slope_angle;
    }

    (velocity, state)
}

/// Detect a descendable slope beneath a falling actor and convert
/// horizontal intent into descend-consistent (x, y) velocity.
///
/// Only invoked while falling. An actor with zero horizontal velocity has
/// no trailing corner to probe from, so it is left unchanged.
pub(crate) fn descend_slope<W: CollisionWorld>(
    world: &W,
    config: &ControllerConfig,
    origins: &RaycastOrigins,
    mut velocity: Vec2,
    mut state: CollisionState,
) -> (Vec2, CollisionState) {
    let direction_x = Vec2::sign(velocity.x);
    if direction_x == 0.0 {
        return (velocity, state);
    }

    // Trailing bottom corner, opposite the motion direction
    let ray_origin = if direction_x < 0.0 {
        origins.bottom_right
    } else {
        origins.bottom_left
    };
    let Some(hit) = cast(world, ray_origin, Vec2::DOWN, f32::INFINITY, config.collision_mask)
    else {
        return (velocity, state);
    };

    let slope_angle = hit.normal.angle_from_up();
    if slope_angle == 0.0 || slope_angle > config.max_descend_angle {
        return (velocity, state);
    }
    // The slope must face downhill in the direction of travel
    if Vec2::sign(hit.normal.x) != direction_x {
        return (velocity, state);
    }
    // Only snap when falling past the slope this tick would otherwise
    // leave the actor hovering above it
    if hit.distance - config.skin_width
        <= slope_angle.to_radians().tan() * velocity.x.abs()
    {
        let move_distance = velocity.x.abs();
        let descend_velocity_y = slope_angle.to_radians().sin() * move_distance;
        velocity.x = slope_angle.to_radians().cos() * move_distance * direction_x;
        velocity.y -= descend_velocity_y;

        state.slope_angle = slope_angle;
        state.descending_slope = true;
        state.below = true;
    }

    (velocity, state)
}
