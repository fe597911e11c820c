use bevy::prelude::*;

use gravity_balls::debug::keys::TOGGLE_OVERLAY_KEY;
use gravity_balls::debug::{DebugBallLabel, DebugPlugin, DebugState, DebugStats};
use gravity_balls::gameplay::frame::FrameOutput;
use gravity_balls::{Ball, GameConfig, GameState, WindowBounds};

fn app_with_overlay(enabled: bool) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(ButtonInput::<KeyCode>::default());
    app.insert_resource(GameConfig {
        debug_overlay: enabled,
        ..Default::default()
    });
    app.insert_resource(GameState::new(WindowBounds::new(800, 600), Some(1)));
    app.add_plugins(DebugPlugin);
    app
}

fn overlay_text(app: &mut App) -> String {
    let mut q = app.world_mut().query::<&Text>();
    q.iter(app.world()).map(|t| t.0.clone()).collect()
}

#[test]
fn overlay_off_by_default() {
    let mut app = app_with_overlay(false);
    app.update();
    assert!(!app.world().resource::<DebugState>().overlay_visible);
    assert!(overlay_text(&mut app).is_empty());
}

#[test]
fn config_flag_turns_overlay_on() {
    let mut app = app_with_overlay(true);
    app.update();
    app.update();
    assert!(app.world().resource::<DebugState>().overlay_visible);
    let text = overlay_text(&mut app);
    assert!(text.starts_with("FPS: "), "{text:?}");
    assert!(text.contains("Time elapsed: "), "{text:?}");
}

#[test]
fn toggle_key_flips_visibility() {
    let mut app = app_with_overlay(false);
    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(TOGGLE_OVERLAY_KEY);
    app.update();
    assert!(app.world().resource::<DebugState>().overlay_visible);
}

#[test]
fn stats_track_ball_count() {
    let mut app = app_with_overlay(false);
    {
        let mut state = app.world_mut().resource_mut::<GameState>();
        let b = Ball::new(Vec2::ZERO, Vec2::ZERO, 4.0, Color::WHITE);
        state.balls.extend([b, b, b]);
    }
    app.update();
    assert_eq!(app.world().resource::<DebugStats>().ball_count, 3);
}

#[test]
fn stats_accumulate_frame_events() {
    let mut app = app_with_overlay(false);
    app.insert_resource(FrameOutput {
        collisions: 1,
        wall_bounces: 2,
        floor_bounces: 1,
        recolors: 1,
        ..Default::default()
    });
    app.update();
    app.update();
    let stats = app.world().resource::<DebugStats>();
    assert_eq!((stats.collisions, stats.bounces, stats.recolors), (2, 6, 2));
}

fn ball_labels(app: &mut App) -> Vec<(String, Visibility)> {
    let mut q = app
        .world_mut()
        .query_filtered::<(&Text2d, &Visibility), With<DebugBallLabel>>();
    q.iter(app.world()).map(|(t, v)| (t.0.clone(), *v)).collect()
}

#[test]
fn ball_labels_follow_overlay() {
    let mut app = app_with_overlay(true);
    app.world_mut().resource_mut::<GameState>().balls.push(Ball::new(
        Vec2::new(100.0, 100.0),
        Vec2::new(1.0, 2.0),
        8.0,
        Color::WHITE,
    ));
    app.update();
    let labels = ball_labels(&mut app);
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].0, "Pos: (100.00, 100.00);\nVel: (1.00, 2.00)");
    assert_eq!(labels[0].1, Visibility::Visible);

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(TOGGLE_OVERLAY_KEY);
    app.update();
    assert!(!app.world().resource::<DebugState>().overlay_visible);
    let labels = ball_labels(&mut app);
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].1, Visibility::Hidden);
}
