pub mod animations;

use bevy::prelude::*;

use crate::follow::Layer;

pub use animations::{advance_followers, apply_viewport_changes, sync_circle_transforms};

/// World-space z gap between stacked layers
pub const LAYER_Z_STEP: f32 = 1.0;

/// One painted circle
#[derive(Component, Debug, Clone, Copy)]
pub struct FollowCircle {
    pub layer: Layer,
}

impl FollowCircle {
    pub fn depth(&self) -> f32 {
        self.layer.depth() as f32 * LAYER_Z_STEP
    }
}
