use super::modes::DebugState;
use bevy::prelude::*;

pub const TOGGLE_OVERLAY_KEY: KeyCode = KeyCode::F3;

pub fn debug_key_input_system(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut state: ResMut<DebugState>,
) {
    let Some(keys) = keys else {
        return;
    };
    if keys.just_pressed(TOGGLE_OVERLAY_KEY) {
        state.overlay_visible = !state.overlay_visible;
        info!(
            "Debug overlay {}",
            if state.overlay_visible { "ON" } else { "OFF" }
        );
    }
}
