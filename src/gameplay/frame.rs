//! Per-frame orchestration.
//!
//! `step_frame` is the whole frame in one pure call; the Bevy systems below
//! only gather window / time / mouse state into a `FrameInput` and hand the
//! resulting draw list to the renderer through `FrameOutput`.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::components::{CircleDraw, WindowBounds};
use crate::core::config::GameConfig;
use crate::core::state::{GameState, StorageError};
use crate::core::system::system_order::FrameSet;
use crate::gameplay::spawn::{on_pressed, on_released};
use crate::physics::{advance_ball, resolve_against_later};
use crate::rendering::aim::aim_overlay;

/// Everything the core reads from the windowing side for one frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub bounds: WindowBounds,
    pub dt: f32,
    /// `None` while the cursor is outside the window.
    pub cursor: Option<Vec2>,
    pub pressed: bool,
    pub released: bool,
}

/// Draw commands for the frame, balls first (index order) then the aim guide.
#[derive(Resource, Debug, Default, Clone)]
pub struct FrameOutput {
    pub circles: Vec<CircleDraw>,
    pub collisions: usize,
    pub wall_bounces: usize,
    pub floor_bounces: usize,
    pub recolors: usize,
    pub spawned: Option<usize>,
}

pub fn step_frame(
    state: &mut GameState,
    input: &FrameInput,
    cfg: &GameConfig,
    out: &mut FrameOutput,
) -> Result<(), StorageError> {
    out.circles.clear();
    out.collisions = 0;
    out.wall_bounces = 0;
    out.floor_bounces = 0;
    out.recolors = 0;
    out.spawned = None;

    state.bounds = input.bounds;
    if let Some(c) = input.cursor {
        state.cursor = c;
    }

    for i in 0..state.balls.len() {
        out.collisions += resolve_against_later(&mut state.balls, i);
        out.circles.push(CircleDraw::from(&state.balls[i]));
        let events = advance_ball(
            &mut state.balls[i],
            state.bounds,
            input.dt,
            &cfg.physics,
            &mut state.rng,
        );
        out.wall_bounces += usize::from(events.wall_bounce);
        out.floor_bounces += usize::from(events.floor_bounce);
        out.recolors += usize::from(events.recolored);
    }

    if state.gesture.is_spawning {
        out.circles
            .extend(aim_overlay(state.gesture.anchor, state.cursor, &cfg.aim));
    }

    if input.pressed {
        on_pressed(&mut state.gesture, state.cursor);
    }
    if input.released {
        let cursor = state.cursor;
        let bounds = state.bounds;
        if let Some(ball) = on_released(&mut state.gesture, cursor, bounds, cfg, &mut state.rng) {
            out.spawned = Some(state.push_ball(ball)?);
        }
    }
    Ok(())
}

pub struct FramePlugin;

impl Plugin for FramePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameInput>()
            .init_resource::<FrameOutput>()
            .add_systems(
                Update,
                (collect_frame_input, run_frame).chain().in_set(FrameSet),
            );
    }
}

pub fn collect_frame_input(
    time: Res<Time>,
    windows: Query<&Window, With<PrimaryWindow>>,
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    mut input: ResMut<FrameInput>,
) {
    input.dt = time.delta_secs();
    if let Ok(window) = windows.single() {
        input.bounds = WindowBounds::new(
            window.width().round() as u32,
            window.height().round() as u32,
        );
        input.cursor = window.cursor_position();
    }
    let (pressed, released) = buttons
        .map(|b| {
            (
                b.just_pressed(MouseButton::Left),
                b.just_released(MouseButton::Left),
            )
        })
        .unwrap_or_default();
    input.pressed = pressed;
    input.released = released;
}

pub fn run_frame(
    cfg: Res<GameConfig>,
    input: Res<FrameInput>,
    mut state: ResMut<GameState>,
    mut out: ResMut<FrameOutput>,
) {
    if let Err(e) = step_frame(&mut state, &input, &cfg, &mut out) {
        error!("fatal: {e}");
        std::process::exit(1);
    }
    if let Some(idx) = out.spawned {
        let b = &state.balls[idx];
        info!(
            target: "spawn",
            "ball #{idx} at ({:.1}, {:.1}) vel ({:.2}, {:.2}) r={:.2}",
            b.position.x, b.position.y, b.velocity.x, b.velocity.y, b.radius
        );
    }
}
