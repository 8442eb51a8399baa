use bevy::math::Vec2;

use super::chain::{FOLLOWER_COUNT, FollowerChain};

/// Painted circle, listed back to front
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Last follower, bottom of the stack
    Trailing,
    Middle,
    /// First follower, drawn on top and the only one that takes drags
    Lead,
}

impl Layer {
    pub const BACK_TO_FRONT: [Layer; FOLLOWER_COUNT] = [Layer::Trailing, Layer::Middle, Layer::Lead];

    /// Index into `FollowerChain` that this layer paints
    pub fn follower_index(self) -> usize {
        match self {
            Layer::Lead => 0,
            Layer::Middle => 1,
            Layer::Trailing => 2,
        }
    }

    /// Stacking slot, 0 = back-most
    pub fn depth(self) -> usize {
        match self {
            Layer::Trailing => 0,
            Layer::Middle => 1,
            Layer::Lead => 2,
        }
    }
}

/// Anchor of every layer in paint order
pub fn layers(chain: &FollowerChain) -> Vec<(Layer, Vec2)> {
    Layer::BACK_TO_FRONT
        .iter()
        .filter_map(|&layer| chain.position(layer.follower_index()).map(|p| (layer, p)))
        .collect()
}

/// Whether `point` (screen pixels) lies inside the circle anchored at `anchor`
pub fn hit_circle(anchor: Vec2, diameter: f32, point: Vec2) -> bool {
    let radius = diameter * 0.5;
    point.distance_squared(anchor + Vec2::splat(radius)) <= radius * radius
}
