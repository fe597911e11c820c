pub mod config;

pub use config::{
    hex_color, AimConfig, AppearanceConfig, GameConfig, PhysicsConfig, SpawnConfig, WindowConfig,
    MAX_GUIDE_DOTS, MIN_DOT_SIZE,
};
