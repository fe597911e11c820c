use bevy::prelude::*;

/// One physical circle. Positions are in screen space (origin top-left, +y down).
///
/// `velocity` is a per-frame displacement rather than a rate: the physics step
/// adds it to `position` once per frame without scaling by the frame time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub radius: f32,
    pub color: Color,
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Ball {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, color: Color) -> Self {
        Self {
            radius,
            color,
            position,
            velocity,
        }
    }
}

/// Live window size, refreshed once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowBounds {
    pub width: u32,
    pub height: u32,
}

impl WindowBounds {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn min_side(&self) -> f32 {
        self.width.min(self.height) as f32
    }
}

/// Filled-circle draw command handed to the renderer (screen space).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleDraw {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl From<&Ball> for CircleDraw {
    fn from(b: &Ball) -> Self {
        Self {
            center: b.position,
            radius: b.radius,
            color: b.color,
        }
    }
}

/// Press-drag-release tracking. `Idle --press--> Aiming --release--> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpawnGesture {
    pub is_spawning: bool,
    pub anchor: Vec2,
}
