use bevy::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use std::collections::TryReserveError;
use std::fmt;

use crate::core::components::{Ball, SpawnGesture, WindowBounds};

/// All mutable game state. Owned by the app as a single resource and only
/// mutated from systems in `FrameSet`.
#[derive(Resource)]
pub struct GameState {
    pub balls: Vec<Ball>,
    pub bounds: WindowBounds,
    pub gesture: SpawnGesture,
    /// Last cursor position seen inside the window (screen space).
    pub cursor: Vec2,
    pub rng: StdRng,
}

impl GameState {
    pub fn new(bounds: WindowBounds, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self {
            balls: Vec::new(),
            bounds,
            gesture: SpawnGesture::default(),
            cursor: Vec2::ZERO,
            rng,
        }
    }

    /// Append a ball, returning its index. Growth failure is reported rather
    /// than aborting so the caller decides how to die.
    pub fn push_ball(&mut self, ball: Ball) -> Result<usize, StorageError> {
        self.balls.try_reserve(1).map_err(|source| StorageError {
            len: self.balls.len(),
            source,
        })?;
        self.balls.push(ball);
        Ok(self.balls.len() - 1)
    }
}

/// The ball collection could not grow.
#[derive(Debug)]
pub struct StorageError {
    pub len: usize,
    pub source: TryReserveError,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not grow ball storage beyond {} balls: {}",
            self.len, self.source
        )
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
