pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use app::game::{ConfigReport, GamePlugin};
pub use crate::core::components::{Ball, CircleDraw, SpawnGesture, WindowBounds};
pub use crate::core::config::{config::GameConfig, config::WindowConfig};
pub use crate::core::state::GameState;
pub use gameplay::frame::{step_frame, FrameInput, FrameOutput};
