//! Traversa Engine - Raycast character controller for 2D platformers
//!
//! Architecture:
//! - core/       - Math primitives (Vec2, Aabb)
//! - domain/     - Configuration and collision-mask vocabulary
//! - systems/    - Controller resolvers and the raycast query trait
//! - spatial/    - Segment-soup collision world backend
//! - simulation/ - Scene orchestration and the wasm-facing API
//!
//! The controller clamps an already-computed velocity vector against static
//! level geometry once per tick; it performs no dynamics of its own.

pub mod core;
pub mod domain;
pub mod simulation;
pub mod spatial;
pub mod systems;

// Compatibility re-exports (keeps call sites short)
pub use systems::controller;
pub use systems::raycast;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Traversa WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::aabb::Aabb;
pub use crate::core::vec2::Vec2;
pub use domain::config::{ControllerConfig, DEFAULT_MAX_SLOPE_ANGLE, DEFAULT_SKIN_WIDTH};
pub use domain::mask::CollisionMask;
pub use simulation::{PerfStats, SceneCore, World};
pub use spatial::segments::SegmentWorld;
pub use systems::controller::{CollisionState, Controller};
pub use systems::raycast::{CollisionWorld, RayHit};
