use wasm_bindgen::prelude::*;

use crate::core::aabb::Aabb;
use crate::core::vec2::Vec2;
use crate::domain::config::ControllerConfig;
use crate::domain::mask::CollisionMask;

use super::perf_stats::PerfStats;
use super::SceneCore;

/// JS-facing wrapper around the scene. Actor accessors take an id returned
/// by `add_actor`; out-of-range ids read as zero/false rather than trap.
#[wasm_bindgen]
pub struct World {
    core: SceneCore,
}

#[wasm_bindgen]
impl World {
    /// Create an empty scene
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { core: SceneCore::new() }
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    #[wasm_bindgen(getter)]
    pub fn actor_count(&self) -> u32 {
        self.core.actor_count() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn segment_count(&self) -> u32 {
        self.core.segment_count() as u32
    }

    /// Add a blocking surface from (ax, ay) to (bx, by) on the given layer bit
    pub fn add_segment(&mut self, ax: f32, ay: f32, bx: f32, by: f32, layer: u32) {
        self.core.add_segment(
            Vec2::new(ax, ay),
            Vec2::new(bx, by),
            CollisionMask::layer(layer),
        );
    }

    /// Spawn an actor box with bottom-left corner (x, y); returns its id
    pub fn add_actor(&mut self, x: f32, y: f32, width: f32, height: f32) -> u32 {
        self.core
            .add_actor(Aabb::from_position_size(Vec2::new(x, y), Vec2::new(width, height)))
            as u32
    }

    pub fn set_actor_velocity(&mut self, id: u32, vx: f32, vy: f32) {
        self.core.set_actor_velocity(id as usize, Vec2::new(vx, vy));
    }

    pub fn actor_x(&self, id: u32) -> f32 {
        self.core
            .actor(id as usize)
            .map(|a| a.controller.bounds().min.x)
            .unwrap_or(0.0)
    }

    pub fn actor_y(&self, id: u32) -> f32 {
        self.core
            .actor(id as usize)
            .map(|a| a.controller.bounds().min.y)
            .unwrap_or(0.0)
    }

    pub fn actor_velocity_x(&self, id: u32) -> f32 {
        self.core.actor(id as usize).map(|a| a.velocity.x).unwrap_or(0.0)
    }

    pub fn actor_velocity_y(&self, id: u32) -> f32 {
        self.core.actor(id as usize).map(|a| a.velocity.y).unwrap_or(0.0)
    }

    pub fn actor_below(&self, id: u32) -> bool {
        self.core
            .actor(id as usize)
            .map(|a| a.controller.collisions().below)
            .unwrap_or(false)
    }

    pub fn actor_above(&self, id: u32) -> bool {
        self.core
            .actor(id as usize)
            .map(|a| a.controller.collisions().above)
            .unwrap_or(false)
    }

    pub fn actor_left(&self, id: u32) -> bool {
        self.core
            .actor(id as usize)
            .map(|a| a.controller.collisions().left)
            .unwrap_or(false)
    }

    pub fn actor_right(&self, id: u32) -> bool {
        self.core
            .actor(id as usize)
            .map(|a| a.controller.collisions().right)
            .unwrap_or(false)
    }

    pub fn actor_climbing(&self, id: u32) -> bool {
        self.core
            .actor(id as usize)
            .map(|a| a.controller.collisions().climbing_slope)
            .unwrap_or(false)
    }

    pub fn actor_descending(&self, id: u32) -> bool {
        self.core
            .actor(id as usize)
            .map(|a| a.controller.collisions().descending_slope)
            .unwrap_or(false)
    }

    pub fn actor_slope_angle(&self, id: u32) -> f32 {
        self.core
            .actor(id as usize)
            .map(|a| a.controller.collisions().slope_angle)
            .unwrap_or(0.0)
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(x, y);
    }

    /// Load the controller config applied to subsequently spawned actors
    pub fn load_controller_config(&mut self, json: String) -> Result<(), JsValue> {
        let config = ControllerConfig::from_json(&json).map_err(config_error)?;
        self.core.set_default_config(config);
        Ok(())
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Remove all geometry and actors
    pub fn clear(&mut self) {
        self.core.clear();
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Building a `JsValue` from a string calls into the JS host and aborts on
/// other targets; off wasm the error carries no message, and native callers
/// should read it through `ControllerConfig::from_json` instead.
#[cfg(target_arch = "wasm32")]
fn config_error(message: String) -> JsValue {
    JsValue::from_str(&message)
}

#[cfg(not(target_arch = "wasm32"))]
fn config_error(_message: String) -> JsValue {
    JsValue::NULL
}
