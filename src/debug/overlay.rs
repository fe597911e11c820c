use bevy::prelude::*;

use super::modes::{DebugState, DebugStats};
use crate::core::config::GameConfig;

#[derive(Component)]
pub(crate) struct DebugOverlayText;

pub fn overlay_text(stats: &DebugStats) -> String {
    format!(
        "FPS: {}\nTime elapsed: {:.1}\n",
        stats.fps.round() as u32,
        stats.elapsed_secs
    )
}

pub fn debug_overlay_spawn(mut commands: Commands, cfg: Res<GameConfig>) {
    // Top-left anchored UI text node, default font.
    commands.spawn((
        Text::new(String::new()),
        TextFont {
            font_size: cfg.appearance.font_size,
            ..Default::default()
        },
        TextColor(Color::srgb(0.0, 0.89, 0.19)),
        bevy::ui::Node {
            position_type: bevy::ui::PositionType::Absolute,
            top: Val::Px(0.0),
            left: Val::Px(0.0),
            ..Default::default()
        },
        DebugOverlayText,
    ));
}

pub fn debug_overlay_update(
    state: Res<DebugState>,
    stats: Res<DebugStats>,
    mut q_text: Query<&mut Text, With<DebugOverlayText>>,
) {
    let Ok(mut text) = q_text.single_mut() else {
        return;
    };
    if !state.overlay_visible {
        if !text.0.is_empty() {
            text.0.clear();
        }
        return;
    }
    text.0 = overlay_text(&stats);
}
