use bevy::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use gravity_balls::core::config::config::PhysicsConfig;
use gravity_balls::gameplay::spawn::{launch_velocity, on_pressed, on_released};
use gravity_balls::physics::{advance_ball, resolve_collision};
use gravity_balls::{Ball, GameConfig, SpawnGesture, WindowBounds};

const EPS: f32 = 1e-4;

fn ball(pos: (f32, f32), vel: (f32, f32), r: f32) -> Ball {
    Ball::new(Vec2::new(pos.0, pos.1), Vec2::new(vel.0, vel.1), r, Color::WHITE)
}

#[test]
fn resting_ball_gains_gravity_only() {
    let mut b = ball((100.0, 100.0), (0.0, 0.0), 10.0);
    let mut rng = StdRng::seed_from_u64(1);
    advance_ball(&mut b, WindowBounds::new(800, 600), 0.1, &PhysicsConfig::default(), &mut rng);
    assert!((b.velocity - Vec2::new(0.0, 1.0)).length() < EPS, "{:?}", b.velocity);
    assert_eq!(b.position, Vec2::new(100.0, 100.0));
}

#[test]
fn gravity_is_exact_without_bounces() {
    let params = PhysicsConfig::default();
    let mut rng = StdRng::seed_from_u64(2);
    for (vy, dt) in [(0.0, 0.016), (-3.5, 0.008), (2.25, 0.033)] {
        let mut b = ball((400.0, 200.0), (1.0, vy), 10.0);
        advance_ball(&mut b, WindowBounds::new(800, 600), dt, &params, &mut rng);
        assert_eq!(b.velocity.y, vy + params.gravity * dt);
        assert_eq!(b.velocity.x, 1.0);
    }
}

#[test]
fn right_wall_flips_and_damps() {
    let params = PhysicsConfig::default();
    let mut b = ball((785.0, 300.0), (8.0, 0.0), 10.0);
    let mut rng = StdRng::seed_from_u64(3);
    let ev = advance_ball(&mut b, WindowBounds::new(800, 600), 0.0, &params, &mut rng);
    assert!(ev.wall_bounce);
    assert!(b.velocity.x < 0.0);
    let expected = 8.0 * (1.0 - params.friction_x / 100.0);
    assert!((b.velocity.x.abs() - expected).abs() < EPS);
    // position follows the pre-bounce velocity this frame; next frame clamps it
    assert_eq!(b.position.x, 793.0);
    advance_ball(&mut b, WindowBounds::new(800, 600), 0.0, &params, &mut rng);
    assert!((b.position.x - (790.0 - expected)).abs() < EPS);
}

#[test]
fn horizontal_clamp_holds_after_overshoot() {
    let params = PhysicsConfig::default();
    let bounds = WindowBounds::new(640, 480);
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..500 {
        let r = 8.0;
        let vx = rng.gen_range(-10.0..10.0);
        // anywhere within one frame's displacement outside the walls
        let x = rng.gen_range(-10.0..650.0);
        let mut b = ball((x, 240.0), (vx, 0.0), r);
        let before = b.position.x;
        advance_ball(&mut b, bounds, 0.016, &params, &mut rng);
        // the step clamps first, then moves by the (possibly flipped) old velocity
        let clamped = before.clamp(r, 640.0 - r);
        assert!((b.position.x - (clamped + vx)).abs() < EPS);
    }
}

#[test]
fn fast_floor_hit_recolors() {
    let params = PhysicsConfig::default();
    let mut b = ball((300.0, 585.0), (0.0, 9.0), 10.0);
    let mut rng = StdRng::seed_from_u64(5);
    let ev = advance_ball(&mut b, WindowBounds::new(800, 600), 0.0, &params, &mut rng);
    assert!(ev.floor_bounce && ev.recolored);
    assert_ne!(b.color, Color::WHITE);
    assert_eq!(b.velocity.y, -9.0);
}

#[test]
fn collision_conserves_momentum() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..200 {
        let mut a = ball(
            (rng.gen_range(0.0..20.0), rng.gen_range(0.0..20.0)),
            (rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)),
            10.0,
        );
        let mut b = ball(
            (rng.gen_range(0.0..20.0), rng.gen_range(0.0..20.0)),
            (rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)),
            10.0,
        );
        let before = a.velocity + b.velocity;
        resolve_collision(&mut a, &mut b);
        assert!((a.velocity + b.velocity - before).length() < EPS);
    }
}

#[test]
fn separated_balls_do_not_interact() {
    let mut a = ball((0.0, 0.0), (3.0, 1.0), 10.0);
    let mut b = ball((30.0, 0.0), (-3.0, 2.0), 10.0);
    assert!(!resolve_collision(&mut a, &mut b));
    assert_eq!(a.velocity, Vec2::new(3.0, 1.0));
    assert_eq!(b.velocity, Vec2::new(-3.0, 2.0));
}

#[test]
fn overlapping_head_on_reverses() {
    let mut a = ball((100.0, 100.0), (1.0, 0.0), 10.0);
    let mut b = ball((105.0, 100.0), (-1.0, 0.0), 10.0);
    resolve_collision(&mut a, &mut b);
    assert!((a.velocity - Vec2::new(-1.0, 0.0)).length() < EPS);
    assert!((b.velocity - Vec2::new(1.0, 0.0)).length() < EPS);
}

#[test]
fn launch_speed_is_capped() {
    let max = PhysicsConfig::default().max_ball_speed;
    for drag in [Vec2::new(10.0, 0.0), Vec2::new(300.0, -400.0), Vec2::new(-8.0, 8.0)] {
        let v = launch_velocity(drag, max);
        assert!((v.length() - max).abs() < EPS, "{drag:?} -> {v:?}");
    }
    let v = launch_velocity(Vec2::new(0.0, 4.0), max);
    assert!((v.length() - 4.0).abs() < EPS);
}

#[test]
fn slingshot_launches_away_from_drag() {
    let cfg = GameConfig::default();
    let mut g = SpawnGesture::default();
    let mut rng = StdRng::seed_from_u64(7);
    on_pressed(&mut g, Vec2::new(500.0, 500.0));
    assert!(g.is_spawning);
    let b = on_released(
        &mut g,
        Vec2::new(500.0, 400.0),
        WindowBounds::new(1280, 720),
        &cfg,
        &mut rng,
    )
    .expect("ball");
    assert!(!g.is_spawning);
    assert_eq!(b.position, Vec2::new(500.0, 500.0));
    assert!((b.velocity - Vec2::new(0.0, cfg.physics.max_ball_speed)).length() < EPS);
    assert!((b.radius - 720.0 * 0.0168).abs() < EPS);
}
