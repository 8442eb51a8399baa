use bevy::prelude::*;

use crate::{
    config::FollowConfig,
    follow::{DragEvent, DragPhase, Layer, hit_circle},
    input::{PointerEvent, PointerEventType},
    visual::setup::FollowScene,
};

/// Drag state machine plus the pointer that owns it
#[derive(Resource, Default, Debug)]
pub struct DragState {
    pub phase: DragPhase,
    /// Only this pointer may move or release the drag
    pub pointer_id: Option<u64>,
}

impl DragState {
    /// Translate a raw pointer event into a drag transition, if it is one
    pub fn drag_event(
        &self,
        event: &PointerEvent,
        scene: &FollowScene,
        shape_size: f32,
    ) -> Option<DragEvent> {
        let owns_pointer = self.pointer_id == Some(event.id);

        match event.event_type {
            PointerEventType::Down => {
                if self.phase.is_dragging() {
                    return None;
                }
                let anchor = scene.layer_anchor(Layer::Lead);
                hit_circle(anchor, shape_size, event.position).then_some(DragEvent::Start {
                    pointer: event.position,
                })
            }
            PointerEventType::Move => match self.phase {
                DragPhase::Dragging(session) if owns_pointer => Some(DragEvent::Update {
                    translation: session.translation(event.position),
                }),
                _ => None,
            },
            PointerEventType::Up => owns_pointer.then_some(DragEvent::End),
        }
    }

    /// Run one pointer event through the state machine and track which pointer owns
    /// the drag. Returns the transition that was applied, if any.
    pub fn handle(
        &mut self,
        event: &PointerEvent,
        scene: &mut FollowScene,
        shape_size: f32,
    ) -> Option<DragEvent> {
        let drag_event = self.drag_event(event, scene, shape_size)?;

        self.phase = self.phase.apply(drag_event, &mut scene.tracker);
        match drag_event {
            DragEvent::Start { .. } => self.pointer_id = Some(event.id),
            DragEvent::End => self.pointer_id = None,
            DragEvent::Update { .. } => {}
        }

        Some(drag_event)
    }
}

/// System: Feed pointer input through the drag state machine
pub fn handle_pointer_input(
    mut pointer_events: MessageReader<PointerEvent>,
    config: Res<FollowConfig>,
    mut scene: ResMut<FollowScene>,
    mut drag_state: ResMut<DragState>,
) {
    for event in pointer_events.read() {
        let Some(drag_event) = drag_state.handle(event, &mut scene, config.shape_size) else {
            continue;
        };

        match drag_event {
            DragEvent::Start { pointer } => {
                info!(
                    "Drag started by pointer {} at {:?}, origin {:?}",
                    event.id,
                    pointer,
                    scene.tracker.position()
                );
            }
            DragEvent::End => {
                info!("Drag released, tracker at {:?}", scene.tracker.position());
            }
            DragEvent::Update { .. } => {}
        }
    }
}
