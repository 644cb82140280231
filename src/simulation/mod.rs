//! Scene - hosts any number of controller-driven actors in one
//! segment-soup collision world and steps them once per tick.
//!
//! The scene is the host loop around the controller core: it owns the
//! level geometry, applies per-tick gravity to each actor's intent
//! velocity, and hands the resolved contact flags back to callers. The
//! controller itself stays dynamics-free.

use crate::core::aabb::Aabb;
use crate::core::vec2::Vec2;
use crate::domain::config::ControllerConfig;
use crate::domain::mask::CollisionMask;
use crate::spatial::segments::SegmentWorld;
use crate::systems::controller::Controller;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// A controller plus the persistent intent velocity the host integrates
/// gravity into between ticks
pub struct Actor {
    pub controller: Controller,
    pub velocity: Vec2,
}

/// The simulation scene
pub struct SceneCore {
    world: SegmentWorld,
    actors: Vec<Actor>,

    // Settings
    gravity: Vec2,
    default_config: ControllerConfig,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SceneCore {
    pub fn new() -> Self {
        Self {
            world: SegmentWorld::new(),
            actors: Vec::new(),
            gravity: Vec2::zero(),
            default_config: ControllerConfig::default(),
            frame: 0,
            perf_enabled: false,
            perf_stats: PerfStats::default(),
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn segment_count(&self) -> usize {
        self.world.segment_count()
    }

    pub fn world(&self) -> &SegmentWorld {
        &self.world
    }

    /// Add a blocking surface to the level geometry
    pub fn add_segment(&mut self, a: Vec2, b: Vec2, category: CollisionMask) {
        self.world.add_segment(a, b, category);
    }

    /// Add a connected run of surfaces through `points`
    pub fn add_chain(&mut self, points: &[Vec2], category: CollisionMask) {
        self.world.add_chain(points, category);
    }

    /// Spawn an actor with the scene's default config; returns its id
    pub fn add_actor(&mut self, bounds: Aabb) -> usize {
        self.add_actor_with_config(bounds, self.default_config)
    }

    pub fn add_actor_with_config(&mut self, bounds: Aabb, config: ControllerConfig) -> usize {
        self.actors.push(Actor {
            controller: Controller::new(bounds, config),
            velocity: Vec2::zero(),
        });
        self.actors.len() - 1
    }

    pub fn actor(&self, id: usize) -> Option<&Actor> {
        self.actors.get(id)
    }

    pub fn actor_mut(&mut self, id: usize) -> Option<&mut Actor> {
        self.actors.get_mut(id)
    }

    /// Replace an actor's intent velocity (typically the horizontal input;
    /// gravity keeps integrating into it each tick)
    pub fn set_actor_velocity(&mut self, id: usize, velocity: Vec2) {
        if let Some(actor) = self.actors.get_mut(id) {
            actor.velocity = velocity;
        }
    }

    /// Per-tick velocity delta applied to every actor before resolution
    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    /// Config used for subsequently spawned actors
    pub fn set_default_config(&mut self, config: ControllerConfig) {
        settings::set_default_config(self, config);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Step every actor one tick forward
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Remove all geometry and actors
    pub fn clear(&mut self) {
        self.world.clear();
        self.actors.clear();
    }
}

impl Default for SceneCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
