//! Process-level session concerns: frame-rate cap and optional timed exit.

use bevy::prelude::*;
use std::time::{Duration, Instant};

use crate::core::config::GameConfig;

/// Sleep-based pacer; `target` of `None` runs uncapped.
#[derive(Resource, Debug)]
pub struct FrameLimiter {
    pub target: Option<Duration>,
    last: Instant,
}

impl FrameLimiter {
    pub fn from_fps(max_fps: u32) -> Self {
        Self {
            target: (max_fps > 0).then(|| Duration::from_secs_f64(1.0 / f64::from(max_fps))),
            last: Instant::now(),
        }
    }

    /// Time left in the current frame budget.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.target {
            Some(t) => t.saturating_sub(now.saturating_duration_since(self.last)),
            None => Duration::ZERO,
        }
    }
}

/// Elapsed-time deadline after which the app exits (`window.autoClose`).
#[derive(Resource, Debug, Clone, Copy)]
pub struct AutoCloseAfter(pub f32);

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        let (max_fps, auto_close) = app
            .world()
            .get_resource::<GameConfig>()
            .map(|c| (c.window.max_fps, c.window.auto_close))
            .unwrap_or((120, 0.0));
        app.insert_resource(FrameLimiter::from_fps(max_fps))
            .add_systems(Last, pace_frame);
        if auto_close > 0.0 {
            info!(seconds = auto_close, "AutoClose: will exit after {auto_close} seconds");
            app.insert_resource(AutoCloseAfter(auto_close))
                .add_systems(Update, check_auto_close);
        }
    }
}

fn pace_frame(mut limiter: ResMut<FrameLimiter>) {
    let wait = limiter.remaining(Instant::now());
    if !wait.is_zero() {
        std::thread::sleep(wait);
    }
    limiter.last = Instant::now();
}

fn check_auto_close(
    time: Res<Time>,
    deadline: Res<AutoCloseAfter>,
    mut ev_exit: EventWriter<AppExit>,
    mut requested: Local<bool>,
) {
    if !*requested && time.elapsed_secs() >= deadline.0 {
        *requested = true;
        info!("AutoClose: deadline reached, requesting app exit");
        ev_exit.write(AppExit::Success);
    }
}
