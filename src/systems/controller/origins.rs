use crate::core::aabb::Aabb;
use crate::domain::config::ControllerConfig;

use super::types::{RaySpacing, RaycastOrigins};

/// Compute the fixed ray spacing from the shrunk box extents.
///
/// Called once at setup (and again if the shape changes); the ray counts in
/// `config` are assumed already clamped to >= 2 by `sanitized()`.
pub fn calculate_ray_spacing(bounds: Aabb, config: &ControllerConfig) -> RaySpacing {
    let inner = bounds.shrunk(config.skin_width);
    RaySpacing {
        horizontal: inner.height() / (config.hor_ray_count - 1) as f32,
        vertical: inner.width() / (config.ver_ray_count - 1) as f32,
    }
}

/// Recompute the four corner ray origins from the live box position.
/// Must run before any resolver in a tick.
pub fn update_raycast_origins(bounds: Aabb, skin_width: f32) -> RaycastOrigins {
    let inner = bounds.shrunk(skin_width);
    RaycastOrigins {
        top_left: crate::core::vec2::Vec2::new(inner.min.x, inner.max.y),
        top_right: inner.max,
        bottom_left: inner.min,
        bottom_right: crate::core::vec2::Vec2::new(inner.max.x, inner.min.y),
    }
}
