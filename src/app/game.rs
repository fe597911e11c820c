// This file is part of Gravity Balls.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::app::session::SessionPlugin;
use crate::core::components::WindowBounds;
use crate::core::config::GameConfig;
use crate::core::state::GameState;
use crate::core::system::system_order::{FrameSet, RenderSyncSet};
use crate::debug::DebugPlugin;
use crate::gameplay::frame::FramePlugin;
use crate::rendering::camera::CameraPlugin;
use crate::rendering::circles::CirclesPlugin;

/// Warnings gathered while loading the config, logged once the log plugin is up.
#[derive(Resource, Debug, Default, Clone)]
pub struct ConfigReport {
    pub sources: Vec<String>,
    pub warnings: Vec<String>,
}

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        let cfg = app
            .world()
            .get_resource::<GameConfig>()
            .cloned()
            .unwrap_or_default();
        let bounds = WindowBounds::new(
            cfg.window.width.max(0.0) as u32,
            cfg.window.height.max(0.0) as u32,
        );
        app.insert_resource(GameState::new(bounds, cfg.seed))
            .init_resource::<ConfigReport>()
            .configure_sets(Update, (FrameSet, RenderSyncSet.after(FrameSet)))
            .add_plugins((FramePlugin, CameraPlugin, CirclesPlugin, DebugPlugin, SessionPlugin))
            .add_systems(Startup, log_config_report);
    }
}

fn log_config_report(report: Res<ConfigReport>, cfg: Res<GameConfig>) {
    if report.sources.is_empty() {
        info!("Config: built-in defaults");
    } else {
        info!("Config: loaded {}", report.sources.join(", "));
    }
    for w in &report.warnings {
        warn!("CONFIG warning: {w}");
    }
    info!(
        "Physics: gravity={} friction_x={}% friction_y={}% max_speed={}",
        cfg.physics.gravity, cfg.physics.friction_x, cfg.physics.friction_y, cfg.physics.max_ball_speed
    );
}
