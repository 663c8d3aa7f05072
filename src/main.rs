use std::path::PathBuf;

use anyhow::ensure;
use bevy::prelude::*;
use clap::Parser;

use kickup::core::config::{ConfigLoadReport, ConfigOverrides, GameConfig, SceneVariant};
use kickup::interaction::session::config_hot_reload::ConfigReloadSettings;
use kickup::GamePlugin;

const BASE_CONFIG: &str = "assets/config/game.ron";
const LOCAL_CONFIG: &str = "assets/config/game.local.ron";

#[derive(Parser, Debug)]
#[command(author, version, about = "Keep the ball off the ground", long_about = None)]
struct Cli {
    /// Extra RON config layers, applied after the defaults in order
    #[arg(long = "config", value_name = "PATH")]
    config: Vec<PathBuf>,
    /// Scene variant (classic|spin), overrides every config file
    #[arg(long)]
    variant: Option<SceneVariant>,
    /// Exit after this many seconds
    #[arg(long = "auto-close", value_name = "SECS")]
    auto_close: Option<f32>,
}

fn main() -> anyhow::Result<()> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let cli = Cli::parse();
    for p in &cli.config {
        ensure!(p.exists(), "config file {} does not exist", p.display());
    }

    // Base file, optional local overrides, then anything passed on the command line.
    let mut layers = vec![PathBuf::from(BASE_CONFIG)];
    let local = PathBuf::from(LOCAL_CONFIG);
    if local.exists() {
        layers.push(local);
    }
    layers.extend(cli.config.iter().cloned());

    let (mut cfg, used, errors) = GameConfig::load_layered(&layers);
    let overrides = ConfigOverrides {
        variant: cli.variant,
        auto_close: cli.auto_close,
    };
    overrides.apply(&mut cfg);

    let mut reload_paths = vec![PathBuf::from(BASE_CONFIG), PathBuf::from(LOCAL_CONFIG)];
    reload_paths.extend(cli.config.iter().cloned());

    App::new()
        .insert_resource(cfg.clone())
        .insert_resource(ConfigLoadReport { used, errors })
        .insert_resource(overrides)
        .insert_resource(ConfigReloadSettings {
            paths: reload_paths,
            ..Default::default()
        })
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(GamePlugin)
        .run();
    Ok(())
}
