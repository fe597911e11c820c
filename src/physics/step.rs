//! Per-ball integration against the window walls and floor.
//!
//! Order inside one step:
//! 1. clamp the *current* position back inside the bounds (corrects last frame's overshoot)
//! 2. predict `next = position + velocity`
//! 3. bounce against the walls / floor using `next`
//! 4. gravity
//! 5. commit `next`
//!
//! The bounce test uses the predicted position while the clamp uses the current
//! one, so the positional correction for a bounce lands one frame after the
//! velocity flip. There is no ceiling.

use bevy::prelude::*;
use rand::Rng;

use crate::core::components::{Ball, WindowBounds};
use crate::core::config::PhysicsConfig;
use crate::core::palette::random_ball_color;

/// What happened to a ball during one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepEvents {
    pub wall_bounce: bool,
    pub floor_bounce: bool,
    pub recolored: bool,
}

pub fn advance_ball<R: Rng + ?Sized>(
    ball: &mut Ball,
    bounds: WindowBounds,
    dt: f32,
    params: &PhysicsConfig,
    rng: &mut R,
) -> StepEvents {
    let width = bounds.width as f32;
    let height = bounds.height as f32;
    let r = ball.radius;
    let mut events = StepEvents::default();

    if ball.position.x - r < 0.0 {
        ball.position.x = r;
    } else if ball.position.x + r > width {
        ball.position.x = width - r;
    }
    if ball.position.y + r > height {
        ball.position.y = height - r;
    }

    let next: Vec2 = ball.position + ball.velocity;

    if next.x + r > width || next.x - r < 0.0 {
        ball.velocity.x *= params.wall_bounce_factor();
        events.wall_bounce = true;
    }

    if next.y + r > height {
        ball.velocity.y *= params.floor_bounce_factor();
        events.floor_bounce = true;
        if ball.velocity.y.abs() > params.impact_flash_speed {
            ball.color = random_ball_color(rng);
            events.recolored = true;
        }
    }

    ball.velocity.y += params.gravity * dt;
    ball.position = next;
    events
}
