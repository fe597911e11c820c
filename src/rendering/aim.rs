//! Aim marker and dotted guide line shown while a throw is being aimed.

use bevy::prelude::*;

use crate::core::components::CircleDraw;
use crate::core::config::{hex_color, AimConfig, MAX_GUIDE_DOTS};

/// Dot centers walking from `from` toward `to`, spaced `2 * dot_size` apart,
/// while the progress fraction stays below 1.0. At most `MAX_GUIDE_DOTS`
/// dots; tiny dot sizes spread that many evenly instead.
pub fn guide_dots(from: Vec2, to: Vec2, dot_size: f32) -> Vec<Vec2> {
    let distance = from.distance(to);
    if distance <= 0.0 || dot_size <= 0.0 {
        return Vec::new();
    }
    let wanted = (distance / (2.0 * dot_size)).ceil();
    let count = if wanted.is_finite() {
        (wanted as usize).min(MAX_GUIDE_DOTS)
    } else {
        MAX_GUIDE_DOTS
    };
    let step = (2.0 * dot_size / distance).max(1.0 / count as f32);
    (0..count)
        .map(|k| k as f32 * step)
        .take_while(|t| *t < 1.0)
        .map(|t| from.lerp(to, t))
        .collect()
}

/// Marker at the anchor followed by the guide dots from the cursor.
pub fn aim_overlay(anchor: Vec2, cursor: Vec2, cfg: &AimConfig) -> Vec<CircleDraw> {
    let color = hex_color(cfg.color);
    let mut out = vec![CircleDraw {
        center: anchor,
        radius: cfg.marker_radius,
        color,
    }];
    out.extend(guide_dots(cursor, anchor, cfg.dot_size).into_iter().map(|c| CircleDraw {
        center: c,
        radius: cfg.dot_size,
        color,
    }));
    out
}
