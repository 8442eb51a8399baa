use bevy::prelude::*;

use crate::{
    camera::ScreenViewport,
    config::FollowConfig,
    follow::{FollowerChain, Layer, PointTracker, layers},
    visual::circles::FollowCircle,
};

/// Tracker plus the springs trailing it; the only mutable state on screen
#[derive(Resource, Debug, Clone)]
pub struct FollowScene {
    pub tracker: PointTracker,
    pub chain: FollowerChain,
}

impl FollowScene {
    /// Everything at rest, centered in `viewport`
    pub fn centered(viewport: Vec2, config: &FollowConfig) -> Self {
        let tracker = PointTracker::centered(viewport, config.shape_size);
        let chain = FollowerChain::new(tracker.position(), config.spring);
        Self { tracker, chain }
    }

    /// Screen-space anchor a layer is painted at
    pub fn layer_anchor(&self, layer: Layer) -> Vec2 {
        self.chain
            .position(layer.follower_index())
            .unwrap_or_else(|| self.tracker.position())
    }
}

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<FollowConfig>,
    viewport: Res<ScreenViewport>,
) {
    let scene = FollowScene::centered(viewport.size, &config);

    info!(
        "Scene setup: viewport={:?}, shape_size={}, start={:?}",
        viewport.size,
        config.shape_size,
        scene.tracker.position()
    );

    let circle_mesh = meshes.add(Circle::new(config.shape_size * 0.5));

    for (layer, anchor) in layers(&scene.chain) {
        let circle = FollowCircle { layer };
        let material = materials.add(StandardMaterial {
            base_color: config.layer_color(layer.depth()),
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            ..default()
        });
        let translation =
            viewport.anchor_to_world(anchor, config.shape_size, circle.depth());

        commands.spawn((
            Mesh3d(circle_mesh.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(translation),
            circle,
        ));
    }

    commands.insert_resource(scene);
}
