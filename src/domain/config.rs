use serde::{Deserialize, Serialize};

use super::mask::CollisionMask;

/// Inward margin between the collider surface and the ray origins.
/// Keeps rays from starting exactly on a touching surface.
pub const DEFAULT_SKIN_WIDTH: f32 = 0.015;

/// Default limit for both climbable and descendable slopes, in degrees
pub const DEFAULT_MAX_SLOPE_ANGLE: f32 = 80.0;

/// Fewer than 2 rays per axis cannot cover both box corners
pub const MIN_RAYS_PER_AXIS: u32 = 2;

/// Resolvers take tan(angle); exactly-vertical slopes are out of contract,
/// so sanitization caps configured angles just below 90 degrees.
const MAX_SLOPE_ANGLE_LIMIT: f32 = 89.9;

/// Tuning parameters for a single controller.
///
/// All inputs are sanitized rather than rejected: out-of-range values are
/// clamped into contract by `sanitized()`, which every construction path
/// goes through.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Which geometry categories participate in collision
    pub collision_mask: CollisionMask,
    /// Rays cast when resolving horizontal motion (spread over box height)
    pub hor_ray_count: u32,
    /// Rays cast when resolving vertical motion (spread over box width)
    pub ver_ray_count: u32,
    /// Steepest slope the actor will climb, in degrees
    pub max_climb_angle: f32,
    /// Steepest slope the actor will follow downhill, in degrees
    pub max_descend_angle: f32,
    /// Skin margin, strictly positive
    pub skin_width: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            collision_mask: CollisionMask::ALL,
            hor_ray_count: 4,
            ver_ray_count: 4,
            max_climb_angle: DEFAULT_MAX_SLOPE_ANGLE,
            max_descend_angle: DEFAULT_MAX_SLOPE_ANGLE,
            skin_width: DEFAULT_SKIN_WIDTH,
        }
    }
}

impl ControllerConfig {
    /// Parse a config from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: ControllerConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Ok(config.sanitized())
    }

    /// Clamp every field into contract
    pub fn sanitized(mut self) -> Self {
        self.hor_ray_count = self.hor_ray_count.max(MIN_RAYS_PER_AXIS);
        self.ver_ray_count = self.ver_ray_count.max(MIN_RAYS_PER_AXIS);
        if !(self.skin_width > 0.0) || !self.skin_width.is_finite() {
            self.skin_width = DEFAULT_SKIN_WIDTH;
        }
        self.max_climb_angle = clamp_angle(self.max_climb_angle);
        self.max_descend_angle = clamp_angle(self.max_descend_angle);
        self
    }
}

fn clamp_angle(angle: f32) -> f32 {
    if angle.is_finite() {
        angle.clamp(0.0, MAX_SLOPE_ANGLE_LIMIT)
    } else {
        DEFAULT_MAX_SLOPE_ANGLE
    }
}
