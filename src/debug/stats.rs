use super::modes::{DebugState, DebugStats};
use crate::core::state::GameState;
use crate::gameplay::frame::FrameOutput;
use bevy::prelude::*;

/// Smoothed FPS / frame time, the live ball count, and event totals
/// taken from the frame just stepped.
pub fn debug_stats_collect_system(
    time: Res<Time>,
    game: Res<GameState>,
    frame: Option<Res<FrameOutput>>,
    mut state: ResMut<DebugState>,
    mut stats: ResMut<DebugStats>,
) {
    state.frame_counter += 1;
    let dt = time.delta_secs().max(1e-6);
    let inst_fps = 1.0 / dt;
    if stats.fps == 0.0 {
        stats.fps = inst_fps;
    } else {
        stats.fps = stats.fps * 0.9 + inst_fps * 0.1;
    }
    let inst_ms = dt * 1000.0;
    if stats.frame_time_ms == 0.0 {
        stats.frame_time_ms = inst_ms;
    } else {
        stats.frame_time_ms = stats.frame_time_ms * 0.9 + inst_ms * 0.1;
    }
    stats.elapsed_secs = time.elapsed_secs();
    stats.ball_count = game.balls.len();
    if let Some(frame) = frame {
        stats.collisions += frame.collisions as u64;
        stats.bounces += (frame.wall_bounces + frame.floor_bounces) as u64;
        stats.recolors += frame.recolors as u64;
    }
}
