use crate::core::vec2::Vec2;

/// Fixed spacing between parallel rays on each axis.
///
/// Computed once from the (shrunk) box extents and the clamped ray counts;
/// stable until the actor's shape changes.
#[derive(Clone, Copy, Debug, Default)]
pub struct RaySpacing {
    /// Vertical gap between the rays of the horizontal fan
    pub horizontal: f32,
    /// Horizontal gap between the rays of the vertical fan
    pub vertical: f32,
}

/// The four shrunk-box corners rays are cast from.
/// Transient - recomputed from the live box at the start of every tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct RaycastOrigins {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_left: Vec2,
    pub bottom_right: Vec2,
}

/// Per-tick contact flags and slope bookkeeping.
///
/// Persists across ticks on the controller; `reset()` runs at the start of
/// every resolution pass and carries the previous slope angle so the
/// resolvers can detect angle transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CollisionState {
    /// Ceiling contact this tick
    pub above: bool,
    /// Ground contact this tick (also set while on a slope)
    pub below: bool,
    pub left: bool,
    pub right: bool,

    /// Vertical velocity is being driven by an ascending slope
    pub climbing_slope: bool,
    /// Vertical velocity is being reduced to follow a downward slope
    pub descending_slope: bool,

    /// Angle of the surface currently driving the slope logic, degrees
    pub slope_angle: f32,
    /// Final slope angle of the previous tick
    pub slope_angle_old: f32,
    /// Velocity as it entered this tick's resolution pass; restored when a
    /// descend gets cancelled by a climb detected later in the same tick
    pub velocity_old: Vec2,
}

impl CollisionState {
    /// Start-of-tick transform: clear all flags and demote the current
    /// slope angle into `slope_angle_old`. Pure and total.
    #[must_use]
    pub fn reset(self) -> Self {
        Self {
            slope_angle_old: self.slope_angle,
            velocity_old: self.velocity_old,
            ..Self::default()
        }
    }

    /// Grounded or on a ceiling - the host typically zeroes vertical
    /// velocity on either contact
    pub fn vertical_contact(&self) -> bool {
        self.above || self.below
    }
}
