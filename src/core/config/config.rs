use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub resizable: bool,
    pub max_fps: u32,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Gravity Balls".into(),
            resizable: true,
            max_fps: 120,
            auto_close: 0.0,
        }
    }
}

/// Frictions are percentages of speed removed on a bounce (0 = perfectly elastic).
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub friction_x: f32,
    pub friction_y: f32,
    pub max_ball_speed: f32,
    /// Post-bounce vertical speed above which a floor hit re-rolls the ball color.
    pub impact_flash_speed: f32,
}
impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 10.0,
            friction_x: 5.0,
            friction_y: 0.0,
            max_ball_speed: 10.0,
            impact_flash_speed: 1.0,
        }
    }
}
impl PhysicsConfig {
    /// Multiplier applied to the horizontal velocity on a wall hit.
    pub fn wall_bounce_factor(&self) -> f32 {
        self.friction_x * 0.01 - 1.0
    }

    /// Multiplier applied to the vertical velocity on a floor hit.
    pub fn floor_bounce_factor(&self) -> f32 {
        self.friction_y * 0.01 - 1.0
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SpawnConfig {
    /// Ball radius as a fraction of the smaller window side at spawn time.
    pub radius_factor: f32,
    /// A release without any drag spawns nothing instead of a motionless ball.
    pub skip_zero_drag: bool,
}
impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            radius_factor: 0.0168,
            skip_zero_drag: false,
        }
    }
}

/// Dot sizes below this are accepted but flagged by `validate`.
pub const MIN_DOT_SIZE: f32 = 0.5;
/// Upper bound on guide dots drawn per frame.
pub const MAX_GUIDE_DOTS: usize = 4096;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct AimConfig {
    pub dot_size: f32,
    pub marker_radius: f32,
    /// sRGBA packed as 0xRRGGBBAA.
    pub color: u32,
}
impl Default for AimConfig {
    fn default() -> Self {
        Self {
            dot_size: 2.0,
            marker_radius: 5.0,
            color: 0xFFFF_FFFF,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct AppearanceConfig {
    /// sRGBA packed as 0xRRGGBBAA.
    pub background: u32,
    pub font_size: f32,
}
impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            background: 0x1818_18FF,
            font_size: 24.0,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub spawn: SpawnConfig,
    pub aim: AimConfig,
    pub appearance: AppearanceConfig,
    pub debug_overlay: bool,
    pub seed: Option<u64>,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            physics: Default::default(),
            spawn: Default::default(),
            aim: Default::default(),
            appearance: Default::default(),
            debug_overlay: false,
            seed: None,
        }
    }
}

/// Unpack a 0xRRGGBBAA literal into an sRGB color.
pub fn hex_color(rgba: u32) -> Color {
    let [r, g, b, a] = rgba.to_be_bytes();
    Color::srgba_u8(r, g, b, a)
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Merge several RON files, later keys overriding earlier ones.
    /// Returns the config, the paths that contributed, and any errors hit along the way.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                if let Some(val) = incoming.take() {
                                    merge_value(ev, val);
                                }
                                break;
                            }
                        }
                        if let Some(val) = incoming {
                            bm.insert(k, val);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        match &mut merged {
                            Some(cur) => merge_value(cur, val),
                            None => merged = Some(val),
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse RON: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read config: {e}", path_ref.display())),
            }
        }
        let cfg = match merged {
            Some(v) => match v.into_rust::<GameConfig>() {
                Ok(cfg) => cfg,
                Err(e) => {
                    errors.push(format!("merged config: {e}"));
                    GameConfig::default()
                }
            },
            None => GameConfig::default(),
        };
        (cfg, used, errors)
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.max_fps == 0 {
            w.push("window.max_fps is 0 -> frame cap disabled".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        let p = &self.physics;
        if p.gravity < 0.0 {
            w.push(format!(
                "physics.gravity is negative ({}); screen space is y-down so balls will rise",
                p.gravity
            ));
        }
        for (label, f) in [("physics.friction_x", p.friction_x), ("physics.friction_y", p.friction_y)] {
            if !(0.0..=100.0).contains(&f) {
                w.push(format!("{label} {f} outside 0..=100 (percent)"));
            }
        }
        if p.max_ball_speed <= 0.0 {
            w.push("physics.max_ball_speed must be > 0; balls spawn motionless".into());
        }
        if self.spawn.radius_factor <= 0.0 {
            w.push("spawn.radius_factor must be > 0".into());
        }
        if self.aim.dot_size <= 0.0 {
            w.push("aim.dot_size must be > 0; guide line disabled".into());
        } else if self.aim.dot_size < MIN_DOT_SIZE {
            w.push(format!(
                "aim.dot_size {} below {MIN_DOT_SIZE}; guide line capped at {MAX_GUIDE_DOTS} dots",
                self.aim.dot_size
            ));
        }
        if self.appearance.font_size <= 0.0 {
            w.push("appearance.font_size must be > 0".into());
        }
        w
    }
}
