use bevy::prelude::*;

use crate::core::events::PointerReleased;

fn cursor_world_pos(
    camera_q: &Query<(&Camera, &GlobalTransform)>,
    screen_pos: Vec2,
) -> Option<Vec2> {
    let (camera, cam_tf) = camera_q.iter().next()?;
    camera.viewport_to_world_2d(cam_tf, screen_pos).ok()
}

/// Screen position of this frame's release: the first finger lifted wins,
/// otherwise a left-button release at the window cursor.
pub fn released_screen_position(
    touches: &Touches,
    buttons: &ButtonInput<MouseButton>,
    window: Option<&Window>,
) -> Option<Vec2> {
    if let Some(touch) = touches.iter_just_released().next() {
        return Some(touch.position());
    }
    if buttons.just_released(MouseButton::Left) {
        return window.and_then(Window::cursor_position);
    }
    None
}

/// Turns the end of a touch (first finger only) or a left-button release
/// into a world-space `PointerReleased`.
pub fn capture_pointer_releases(
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows_q: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    mut released: EventWriter<PointerReleased>,
) {
    let Some(screen_pos) = released_screen_position(&touches, &buttons, windows_q.single().ok())
    else {
        return;
    };
    if let Some(world_pos) = cursor_world_pos(&camera_q, screen_pos) {
        released.write(PointerReleased { world_pos });
    }
}
