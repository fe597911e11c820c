use bevy::prelude::*;

use crate::core::config::{hex_color, GameConfig};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_camera, setup_clear_color));
    }
}

fn setup_camera(mut commands: Commands) {
    // Bevy 0.16+: spawn Camera2d component directly; Required Components supply defaults.
    commands.spawn(Camera2d);
}

fn setup_clear_color(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.insert_resource(ClearColor(hex_color(cfg.appearance.background)));
}
