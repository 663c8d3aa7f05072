use crate::core::config::GameConfig;
use bevy::prelude::*;

/// Countdown to a clean exit, present only when `window.autoClose` is positive.
#[derive(Resource, Deref, DerefMut)]
struct AutoCloseTimer(Timer);

/// Exits after `window.autoClose` seconds (smoke runs, `--auto-close`).
pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_auto_close)
            .add_systems(Update, exit_when_elapsed.run_if(resource_exists::<AutoCloseTimer>));
    }
}

fn arm_auto_close(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs <= 0.0 {
        return;
    }
    info!(target: "session", "auto close armed: exiting after {secs:.1}s");
    commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
}

fn exit_when_elapsed(
    time: Res<Time>,
    mut timer: ResMut<AutoCloseTimer>,
    mut exit: EventWriter<AppExit>,
) {
    if timer.tick(time.delta()).finished() {
        info!(target: "session", "auto close elapsed; requesting exit");
        exit.write(AppExit::Success);
    }
}
