//! Ball color helpers.

use bevy::prelude::*;
use rand::Rng;

/// Uniformly random hue at full saturation and value, stored as sRGB.
pub fn random_ball_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    let hue = rng.gen::<f32>() * 360.0;
    hue_color(hue)
}

#[inline]
pub fn hue_color(hue: f32) -> Color {
    Color::Srgba(Color::hsv(hue, 1.0, 1.0).to_srgba())
}
