//! Per-ball `Pos` / `Vel` readout drawn at each ball while the overlay is on.

use bevy::prelude::*;
use bevy::sprite::Anchor;

use super::modes::DebugState;
use crate::core::components::Ball;
use crate::core::config::GameConfig;
use crate::core::state::GameState;
use crate::rendering::circles::screen_to_world;

/// Labels sit in front of every circle.
const LABEL_Z: f32 = 10.0;
const LABEL_FONT_SCALE: f32 = 0.8;

#[derive(Component)]
pub struct DebugBallLabel;

/// Label entities reused frame to frame; slot `k` follows ball `k`.
#[derive(Resource, Default)]
pub struct BallLabelPool(pub Vec<Entity>);

pub fn ball_label(ball: &Ball) -> String {
    format!(
        "Pos: ({:.2}, {:.2});\nVel: ({:.2}, {:.2})",
        ball.position.x, ball.position.y, ball.velocity.x, ball.velocity.y
    )
}

pub fn debug_ball_labels_sync(
    mut commands: Commands,
    state: Res<DebugState>,
    game: Res<GameState>,
    cfg: Res<GameConfig>,
    mut pool: ResMut<BallLabelPool>,
    mut q: Query<(&mut Text2d, &mut Transform, &mut Visibility), With<DebugBallLabel>>,
) {
    let shown = if state.overlay_visible { game.balls.len() } else { 0 };
    for (k, ball) in game.balls.iter().take(shown).enumerate() {
        let translation = screen_to_world(ball.position, game.bounds).extend(LABEL_Z);
        let text = ball_label(ball);
        if k >= pool.0.len() {
            let entity = commands
                .spawn((
                    Text2d::new(text),
                    TextFont {
                        font_size: cfg.appearance.font_size * LABEL_FONT_SCALE,
                        ..Default::default()
                    },
                    TextColor(Color::WHITE),
                    Anchor::TopLeft,
                    Transform::from_translation(translation),
                    Visibility::Visible,
                    DebugBallLabel,
                ))
                .id();
            pool.0.push(entity);
            continue;
        }
        if let Ok((mut label, mut tf, mut vis)) = q.get_mut(pool.0[k]) {
            label.0 = text;
            tf.translation = translation;
            *vis = Visibility::Visible;
        }
    }
    for entity in pool.0.iter().skip(shown) {
        if let Ok((_, _, mut vis)) = q.get_mut(*entity) {
            if *vis != Visibility::Hidden {
                *vis = Visibility::Hidden;
            }
        }
    }
}
