use bevy::prelude::*;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    // World origin at the window center, one unit per pixel.
    commands.spawn((Name::new("MainCamera"), Camera2d));
}
