use crate::core::vec2::Vec2;
use crate::domain::config::ControllerConfig;
use crate::systems::raycast::{cast, CollisionWorld};

use super::slopes::climb_slope;
use super::types::{CollisionState, RaySpacing, RaycastOrigins};

/// Resolve horizontal motion against walls and slope starts.
///
/// Casts a fan of rays toward the motion direction, stepping up from the
/// bottom corner on the movement side. Ray 0 is the privileged ground-level
/// probe: it alone detects slope starts, because the upper rays may clear a
/// shallow slope entirely and would otherwise clamp against it as a wall.
/// Shrinking `ray_length` to each hit's distance makes the nearest hit win
/// across the fan without sorting.
pub(crate) fn horizontal_collisions<W: CollisionWorld>(
    world: &W,
    config: &ControllerConfig,
    spacing: RaySpacing,
    origins: &RaycastOrigins,
    mut velocity: Vec2,
    mut state: CollisionState,
) -> (Vec2, CollisionState) {
    let direction_x = Vec2::sign(velocity.x);
    let mut ray_length = velocity.x.abs() + config.skin_width;

    for i in 0..config.hor_ray_count {
        let mut ray_origin = if direction_x < 0.0 {
            origins.bottom_left
        } else {
            origins.bottom_right
        };
        ray_origin.y += spacing.horizontal * i as f32;

        let Some(hit) = cast(
            world,
            ray_origin,
            Vec2::new(direction_x, 0.0),
            ray_length,
            config.collision_mask,
        ) else {
            continue;
        };

        let slope_angle = hit.normal.angle_from_up();

        if i == 0 && slope_angle <= config.max_climb_angle {
            if state.descending_slope {
                // A climb beats a descend within the same tick: undo the
                // descend before applying the climb
                state.descending_slope = false;
                velocity = state.velocity_old;
            }
            let mut distance_to_slope_start = 0.0;
            if slope_angle != state.slope_angle_old {
                // New slope this tick: start the climb exactly at its foot
                distance_to_slope_start = hit.distance - config.skin_width;
                velocity.x -= distance_to_slope_start * direction_x;
            }
            (velocity, state) = climb_slope(velocity, slope_angle, state);
            velocity.x += distance_to_slope_start * direction_x;
        }

        if !state.climbing_slope || slope_angle > config.max_climb_angle {
            velocity.x = (hit.distance - config.skin_width) * direction_x;
            ray_length = hit.distance;

            if state.climbing_slope {
                // Clamped mid-climb: keep the vertical component glued to
                // the slope for the shortened horizontal move
                velocity.y = state.slope_angle.to_radians().tan() * velocity.x.abs();
            }

            state.left = direction_x < 0.0;
            state.right = direction_x > 0.0;
        }
    }

    (velocity, state)
}
