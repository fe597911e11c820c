//! Central system ordering labels to make the per-frame sequence explicit.
//! Stages (high-level):
//! 1. Frame (bounds refresh, collisions, physics, aim guide, spawn input)
//! 2. RenderSync (push the frame's draw list into sprites / overlay text)
//! 3. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct FrameSet; // owns every mutation of GameState

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct RenderSyncSet; // reads the finished frame, never touches GameState
