use wasm_bindgen::prelude::*;

/// Snapshot of the last `step()` (zeros while perf metrics are disabled).
///
/// Ray counters come from thread-local counters and only cover the calling
/// thread; under the `parallel` feature they undercount.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) rays_cast: u32,
    pub(super) ray_hits: u32,
    pub(super) actors_processed: u32,
    pub(super) actor_count: u32,
    pub(super) segment_count: u32,
}

#[wasm_bindgen]
impl PerfStats {
    pub fn step_ms(&self) -> f64 {
        self.step_ms
    }

    pub fn rays_cast(&self) -> u32 {
        self.rays_cast
    }

    pub fn ray_hits(&self) -> u32 {
        self.ray_hits
    }

    pub fn actors_processed(&self) -> u32 {
        self.actors_processed
    }

    pub fn actor_count(&self) -> u32 {
        self.actor_count
    }

    pub fn segment_count(&self) -> u32 {
        self.segment_count
    }
}

impl PerfStats {
    pub(super) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}
