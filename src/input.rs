use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::CursorMoved;

/// Pointer id used for the mouse; touches carry their own ids
pub const MOUSE_POINTER_ID: u64 = u64::MAX;

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorPos>()
            .add_message::<PointerEvent>()
            .add_systems(
                Update,
                (track_cursor_pos, collect_pointer_events)
                    .chain()
                    .in_set(PointerInputSet),
            );
    }
}

/// Systems that produce `PointerEvent`s; consumers run after this set
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PointerInputSet;

#[derive(Message, Debug, Clone)]
pub struct PointerEvent {
    /// Window (logical) coordinates: pixels from top-left, y down
    pub position: Vec2,
    pub event_type: PointerEventType,
    /// `MOUSE_POINTER_ID` for the mouse, otherwise the touch id
    pub id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventType {
    Down,
    Move,
    Up,
}

#[derive(Resource, Default, Debug, Clone, Copy)]
struct CursorPos(pub Option<Vec2>);

fn track_cursor_pos(mut ev_cursor: MessageReader<CursorMoved>, mut pos: ResMut<CursorPos>) {
    for e in ev_cursor.read() {
        // last event wins
        pos.0 = Some(e.position);
    }
}

fn collect_pointer_events(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    cursor: Res<CursorPos>,
    mut touch_events: MessageReader<TouchInput>,
    mut out: MessageWriter<PointerEvent>,
) {
    if let Some(p) = cursor.0 {
        if mouse_buttons.just_pressed(MouseButton::Left) {
            out.write(PointerEvent {
                position: p,
                event_type: PointerEventType::Down,
                id: MOUSE_POINTER_ID,
            });
        }
        if mouse_buttons.pressed(MouseButton::Left) {
            out.write(PointerEvent {
                position: p,
                event_type: PointerEventType::Move,
                id: MOUSE_POINTER_ID,
            });
        }
        if mouse_buttons.just_released(MouseButton::Left) {
            out.write(PointerEvent {
                position: p,
                event_type: PointerEventType::Up,
                id: MOUSE_POINTER_ID,
            });
        }
    }

    for ev in touch_events.read() {
        out.write(PointerEvent {
            position: ev.position,
            event_type: touch_event_type(ev.phase),
            id: ev.id,
        });
    }
}

/// Cancelled touches end the gesture like a release
fn touch_event_type(phase: TouchPhase) -> PointerEventType {
    match phase {
        TouchPhase::Started => PointerEventType::Down,
        TouchPhase::Moved => PointerEventType::Move,
        TouchPhase::Ended | TouchPhase::Canceled => PointerEventType::Up,
    }
}
