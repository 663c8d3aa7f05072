use bevy::prelude::*;

use super::GameConfig;

/// Outcome of layered config loading, logged once the log plugin is up.
#[derive(Resource, Debug, Clone, Default)]
pub struct ConfigLoadReport {
    pub used: Vec<String>,
    pub errors: Vec<String>,
}

pub fn log_config_report(report: Option<Res<ConfigLoadReport>>, cfg: Res<GameConfig>) {
    if let Some(report) = report {
        if report.used.is_empty() {
            info!(target: "config", "no config files loaded; using defaults");
        } else {
            info!(target: "config", "loaded config layers: {}", report.used.join(", "));
        }
        for e in &report.errors {
            warn!(target: "config", "{e}");
        }
    }
    for w in cfg.validate() {
        warn!(target: "config", "validation: {w}");
    }
    info!(
        target: "config",
        "variant={:?} force={} radius={} scale={} gravity_y={}",
        cfg.variant, cfg.kick.force, cfg.ball.radius, cfg.ball.scale, cfg.physics.gravity_y
    );
}
