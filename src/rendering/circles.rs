//! Filled circles for every `CircleDraw` of the frame.
//!
//! A pool of unit-circle meshes is reused frame to frame: slot `k` shows draw
//! command `k`, unused slots are hidden. Each slot owns its material so a ball
//! recolor only touches one asset.

use bevy::prelude::*;
use bevy::sprite::MeshMaterial2d;

use crate::core::components::WindowBounds;
use crate::core::state::GameState;
use crate::core::system::system_order::RenderSyncSet;
use crate::gameplay::frame::FrameOutput;

/// Later draw commands sit slightly in front of earlier ones.
const Z_STEP: f32 = 0.001;

#[derive(Resource)]
pub struct CircleMesh(pub Handle<Mesh>);

#[derive(Component)]
pub struct CircleSprite;

#[derive(Resource, Default)]
pub struct CirclePool(pub Vec<(Entity, Handle<ColorMaterial>)>);

pub struct CirclesPlugin;

impl Plugin for CirclesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CirclePool>()
            .add_systems(Startup, setup_circle_mesh)
            .add_systems(Update, sync_circle_sprites.in_set(RenderSyncSet));
    }
}

/// Screen space (top-left origin, y down) to the centered, y-up 2D world.
#[inline]
pub fn screen_to_world(p: Vec2, bounds: WindowBounds) -> Vec2 {
    let half = bounds.size() * 0.5;
    Vec2::new(p.x - half.x, half.y - p.y)
}

fn setup_circle_mesh(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    let circle = Mesh::from(Circle { radius: 0.5 });
    commands.insert_resource(CircleMesh(meshes.add(circle)));
}

fn sync_circle_sprites(
    mut commands: Commands,
    frame: Res<FrameOutput>,
    state: Res<GameState>,
    circle_mesh: Option<Res<CircleMesh>>,
    mut pool: ResMut<CirclePool>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut q: Query<(&mut Transform, &mut Visibility), With<CircleSprite>>,
) {
    let Some(circle_mesh) = circle_mesh else {
        return;
    };
    let bounds = state.bounds;
    for (k, cmd) in frame.circles.iter().enumerate() {
        let translation = screen_to_world(cmd.center, bounds).extend(k as f32 * Z_STEP);
        let scale = Vec3::splat(cmd.radius * 2.0);
        if k >= pool.0.len() {
            let material = materials.add(cmd.color);
            let entity = commands
                .spawn((
                    Mesh2d(circle_mesh.0.clone()),
                    MeshMaterial2d(material.clone()),
                    Transform::from_translation(translation).with_scale(scale),
                    Visibility::Visible,
                    CircleSprite,
                ))
                .id();
            pool.0.push((entity, material));
            continue;
        }
        let (entity, material) = &pool.0[k];
        if let Ok((mut tf, mut vis)) = q.get_mut(*entity) {
            tf.translation = translation;
            tf.scale = scale;
            vis.set_if_neq(Visibility::Visible);
        }
        let stale = materials
            .get(material.id())
            .is_some_and(|m| m.color != cmd.color);
        if stale {
            if let Some(m) = materials.get_mut(material.id()) {
                m.color = cmd.color;
            }
        }
    }
    for (entity, _) in pool.0.iter().skip(frame.circles.len()) {
        if let Ok((_, mut vis)) = q.get_mut(*entity) {
            vis.set_if_neq(Visibility::Hidden);
        }
    }
}
