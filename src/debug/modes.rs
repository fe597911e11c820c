use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct DebugState {
    pub overlay_visible: bool,
    pub log_interval: f32,
    pub time_accum: f32,
    pub frame_counter: u64,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            overlay_visible: false,
            log_interval: 1.0,
            time_accum: 0.0,
            frame_counter: 0,
        }
    }
}

#[derive(Resource, Default, Debug, Clone)]
pub struct DebugStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub elapsed_secs: f32,
    pub ball_count: usize,
    /// Running totals since startup.
    pub collisions: u64,
    pub bounces: u64,
    pub recolors: u64,
}
