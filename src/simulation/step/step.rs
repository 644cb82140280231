use crate::core::vec2::Vec2;
use crate::spatial::segments::SegmentWorld;
use crate::systems::controller::perf::{
    reset_controller_perf_counters, take_controller_perf_counters,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{Actor, PerfTimer, SceneCore};

pub(super) fn step(scene: &mut SceneCore) {
    let perf_on = scene.perf_enabled;
    if perf_on {
        scene.perf_stats.reset();
        scene.perf_stats.actor_count = scene.actors.len() as u32;
        scene.perf_stats.segment_count = scene.world.segment_count() as u32;
        reset_controller_perf_counters();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let gravity = scene.gravity;
    let world = &scene.world;

    // World queries are read-only; each actor's own state is touched by
    // exactly one resolution pass, so actors are independent.
    #[cfg(feature = "parallel")]
    scene
        .actors
        .par_iter_mut()
        .for_each(|actor| step_actor(actor, world, gravity));

    #[cfg(not(feature = "parallel"))]
    for actor in scene.actors.iter_mut() {
        step_actor(actor, world, gravity);
    }

    scene.frame += 1;

    if perf_on {
        // Thread-local counters: under `parallel` this only sees rays cast
        // on the calling thread.
        let (rays, hits) = take_controller_perf_counters();
        scene.perf_stats.rays_cast = rays as u32;
        scene.perf_stats.ray_hits = hits as u32;
        scene.perf_stats.actors_processed = scene.actors.len() as u32;
        if let Some(timer) = step_start {
            scene.perf_stats.step_ms = timer.elapsed_ms();
        }
    }
}

/// One actor tick: integrate gravity into the persistent intent velocity,
/// resolve it through the controller, and zero the vertical component on
/// floor/ceiling contact so it does not accumulate while grounded.
fn step_actor(actor: &mut Actor, world: &SegmentWorld, gravity: Vec2) {
    actor.velocity += gravity;
    let (_, state) = actor.controller.move_by(world, actor.velocity);
    if state.vertical_contact() {
        actor.velocity.y = 0.0;
    }
}
