//! Runtime debug overlay (FPS + elapsed time, per-ball readouts) and a
//! periodic stats log.
//! Off by default; `debug_overlay` in the config or F3 turns it on.

pub mod keys; // pub for testing
mod labels;
mod logging;
mod modes;
mod overlay;
mod stats;

pub use modes::*;
pub use labels::{ball_label, BallLabelPool, DebugBallLabel};
pub use overlay::overlay_text;

use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::system::system_order::{FrameSet, RenderSyncSet};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use keys::debug_key_input_system;
        use labels::debug_ball_labels_sync;
        use logging::debug_logging_system;
        use overlay::{debug_overlay_spawn, debug_overlay_update};
        use stats::debug_stats_collect_system;

        let overlay_visible = app
            .world()
            .get_resource::<GameConfig>()
            .map(|c| c.debug_overlay)
            .unwrap_or(false);
        app.insert_resource(DebugState {
            overlay_visible,
            ..Default::default()
        })
        .init_resource::<DebugStats>()
        .init_resource::<BallLabelPool>()
        .add_systems(Startup, debug_overlay_spawn)
        .add_systems(
            Update,
            (
                debug_key_input_system,
                debug_stats_collect_system.after(FrameSet),
                debug_logging_system.after(debug_stats_collect_system),
                debug_overlay_update
                    .after(debug_stats_collect_system)
                    .in_set(RenderSyncSet),
                debug_ball_labels_sync
                    .after(debug_key_input_system)
                    .in_set(RenderSyncSet),
            ),
        );
    }
}
