use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::schedule::InGameSet;

pub struct InputsPlugin;

impl Plugin for InputsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PointerAction>()
            .add_systems(Update, (touch_input, mouse_input).in_set(InGameSet::UserInput));
    }
}

/// A pointer gesture in world coordinates. Touches and the left mouse button
/// both end up here.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    Pressed(Vec2),
    Moved(Vec2),
    Released(Vec2),
}

impl PointerAction {
    pub fn position(&self) -> Vec2 {
        match *self {
            PointerAction::Pressed(position) | PointerAction::Moved(position) | PointerAction::Released(position) => {
                position
            }
        }
    }

    fn with_position(self, position: Vec2) -> Self {
        match self {
            PointerAction::Pressed(_) => PointerAction::Pressed(position),
            PointerAction::Moved(_) => PointerAction::Moved(position),
            PointerAction::Released(_) => PointerAction::Released(position),
        }
    }
}

fn to_world(camera: &Query<(&Camera, &GlobalTransform)>, screen_position: Vec2) -> Option<Vec2> {
    let (camera, camera_transform) = camera.get_single().ok()?;
    camera.viewport_to_world_2d(camera_transform, screen_position)
}

/// Follows a single touch from press to release, in screen coordinates.
/// Other fingers are ignored until the followed one lifts.
pub(crate) fn first_touch_actions(touches: &Touches, active_touch: &mut Option<u64>) -> Vec<PointerAction> {
    let mut actions = Vec::new();

    if active_touch.is_none() {
        if let Some(touch) = touches.iter_just_pressed().min_by_key(|touch| touch.id()) {
            *active_touch = Some(touch.id());
            actions.push(PointerAction::Pressed(touch.position()));
        }
    }
    let Some(id) = *active_touch else {
        return actions;
    };

    if let Some(touch) = touches.get_pressed(id) {
        if !touches.just_pressed(id) {
            actions.push(PointerAction::Moved(touch.position()));
        }
    } else {
        if let Some(touch) = touches.iter_just_released().find(|touch| touch.id() == id) {
            actions.push(PointerAction::Released(touch.position()));
        }
        // released or canceled
        *active_touch = None;
    }
    actions
}

fn touch_input(
    touches: Res<Touches>,
    camera: Query<(&Camera, &GlobalTransform)>,
    mut active_touch: Local<Option<u64>>,
    mut pointer_event_writer: EventWriter<PointerAction>,
) {
    for action in first_touch_actions(&touches, &mut active_touch) {
        if let Some(position) = to_world(&camera, action.position()) {
            pointer_event_writer.send(action.with_position(position));
        }
    }
}

fn mouse_input(
    buttons: Res<ButtonInput<MouseButton>>,
    window: Query<&Window, With<PrimaryWindow>>,
    camera: Query<(&Camera, &GlobalTransform)>,
    mut pointer_event_writer: EventWriter<PointerAction>,
) {
    let Ok(window) = window.get_single() else {
        return;
    };
    let Some(position) = window.cursor_position().and_then(|cursor| to_world(&camera, cursor)) else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) {
        pointer_event_writer.send(PointerAction::Pressed(position));
    } else if buttons.just_released(MouseButton::Left) {
        pointer_event_writer.send(PointerAction::Released(position));
    } else if buttons.pressed(MouseButton::Left) {
        pointer_event_writer.send(PointerAction::Moved(position));
    }
}
