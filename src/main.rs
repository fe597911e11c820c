use std::path::PathBuf;

use anyhow::{bail, Result};
use bevy::prelude::*;
use clap::Parser;

use gravity_balls::{ConfigReport, GameConfig, GamePlugin};

const DEFAULT_CONFIG_PATHS: [&str; 2] = ["assets/config/game.ron", "assets/config/game.local.ron"];

#[derive(Parser, Debug)]
#[command(about = "Throw colorful balls that bounce off the walls and floor", version)]
struct Args {
    /// RON config file; repeat to layer several (later files win).
    #[arg(long = "config")]
    config: Vec<PathBuf>,
    /// Show the FPS / elapsed-time overlay from the start.
    #[arg(long)]
    debug_overlay: bool,
    /// Seed for ball colors.
    #[arg(long)]
    seed: Option<u64>,
    /// Exit after this many seconds.
    #[arg(long)]
    auto_close: Option<f32>,
}

fn load_config(args: &Args) -> Result<(GameConfig, ConfigReport)> {
    let (mut cfg, sources) = if args.config.is_empty() {
        // Defaults are optional: only layer the files that exist.
        let present: Vec<PathBuf> = DEFAULT_CONFIG_PATHS
            .iter()
            .map(PathBuf::from)
            .filter(|p| p.exists())
            .collect();
        let (cfg, used, errors) = GameConfig::load_layered(&present);
        if !errors.is_empty() {
            bail!("config: {}", errors.join("; "));
        }
        (cfg, used)
    } else {
        let (cfg, used, errors) = GameConfig::load_layered(&args.config);
        if !errors.is_empty() {
            bail!("config: {}", errors.join("; "));
        }
        (cfg, used)
    };

    if args.debug_overlay {
        cfg.debug_overlay = true;
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    if let Some(secs) = args.auto_close {
        cfg.window.auto_close = secs;
    }
    let warnings = cfg.validate();
    Ok((cfg, ConfigReport { sources, warnings }))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let (cfg, report) = load_config(&args)?;

    let exit = App::new()
        .insert_resource(cfg.clone())
        .insert_resource(report)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: cfg.window.resizable,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(GamePlugin)
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("app exited with code {code}"),
    }
}
