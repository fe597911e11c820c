use bevy::prelude::*;
use rand::Rng;

use crate::core::components::{Ball, SpawnGesture, WindowBounds};
use crate::core::config::GameConfig;
use crate::core::palette::random_ball_color;

/// Radius is fixed at spawn from the window's smaller side.
#[inline]
pub fn spawn_radius(bounds: WindowBounds, radius_factor: f32) -> f32 {
    bounds.min_side() * radius_factor
}

/// Slingshot launch: direction of `drag`, speed capped at `max_speed`.
/// A zero drag yields a zero velocity.
pub fn launch_velocity(drag: Vec2, max_speed: f32) -> Vec2 {
    let speed = max_speed.min(drag.length());
    drag.normalize_or_zero() * speed
}

pub fn on_pressed(gesture: &mut SpawnGesture, position: Vec2) {
    gesture.anchor = position;
    gesture.is_spawning = true;
}

/// Finish a gesture. Returns the ball to append, if any.
///
/// The ball launches away from the drag (`anchor - cursor`). A release with
/// no gesture in progress is ignored.
pub fn on_released<R: Rng + ?Sized>(
    gesture: &mut SpawnGesture,
    cursor: Vec2,
    bounds: WindowBounds,
    cfg: &GameConfig,
    rng: &mut R,
) -> Option<Ball> {
    if !gesture.is_spawning {
        return None;
    }
    gesture.is_spawning = false;

    let drag = gesture.anchor - cursor;
    if drag == Vec2::ZERO && cfg.spawn.skip_zero_drag {
        debug!(target: "spawn", "click without drag at {:?}; skipped", gesture.anchor);
        return None;
    }
    Some(Ball::new(
        gesture.anchor,
        launch_velocity(drag, cfg.physics.max_ball_speed),
        spawn_radius(bounds, cfg.spawn.radius_factor),
        random_ball_color(rng),
    ))
}
