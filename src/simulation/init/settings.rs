use crate::core::vec2::Vec2;
use crate::domain::config::ControllerConfig;

use super::perf_stats::PerfStats;
use super::SceneCore;

pub(super) fn set_gravity(scene: &mut SceneCore, x: f32, y: f32) {
    scene.gravity = Vec2::new(x, y);
}

pub(super) fn enable_perf_metrics(scene: &mut SceneCore, enabled: bool) {
    scene.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(scene: &SceneCore) -> PerfStats {
    scene.perf_stats.clone()
}

pub(super) fn set_default_config(scene: &mut SceneCore, config: ControllerConfig) {
    scene.default_config = config.sanitized();
}
