use crate::config::setup_follow_config;
use crate::input::PointerInputSet;
use crate::visual::circles::{advance_followers, apply_viewport_changes, sync_circle_transforms};
use crate::visual::interactions::{DragState, handle_pointer_input};
use crate::visual::setup::setup_scene;
use bevy::prelude::*;

pub struct FollowPlugin;

impl Plugin for FollowPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DragState>()
            // Config first, the scene is sized from it
            .add_systems(Startup, (setup_follow_config, setup_scene).chain())
            .add_systems(
                Update,
                (
                    apply_viewport_changes,
                    handle_pointer_input,
                    // Springs read the tracker after this frame's input
                    advance_followers,
                    sync_circle_transforms,
                )
                    .chain()
                    .after(PointerInputSet),
            );
    }
}
