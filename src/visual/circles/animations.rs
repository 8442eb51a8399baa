use bevy::prelude::*;

use crate::{
    camera::ScreenViewport,
    config::FollowConfig,
    visual::{circles::FollowCircle, setup::FollowScene},
};

/// System: Step the follower chain once, in dependency order
pub fn advance_followers(time: Res<Time>, mut scene: ResMut<FollowScene>) {
    let dt = time.delta_secs();
    let scene = &mut *scene;
    let was_resting = scene.chain.is_at_rest();

    scene.chain.advance(scene.tracker.position(), dt);

    if !was_resting && scene.chain.is_at_rest() {
        debug!("Followers settled at {:?}", scene.tracker.position());
    }
}

/// System: Keep clamp bounds in step with the window
pub fn apply_viewport_changes(viewport: Res<ScreenViewport>, mut scene: ResMut<FollowScene>) {
    if !viewport.is_changed() || scene.tracker.viewport() == viewport.size {
        return;
    }
    scene.tracker.set_viewport(viewport.size);
    info!("Clamp bounds now {:?}", scene.tracker.max_position());
}

/// System: Move each circle to its follower's current anchor
pub fn sync_circle_transforms(
    scene: Res<FollowScene>,
    viewport: Res<ScreenViewport>,
    config: Res<FollowConfig>,
    mut circles: Query<(&FollowCircle, &mut Transform)>,
) {
    for (circle, mut transform) in &mut circles {
        let anchor = scene.layer_anchor(circle.layer);
        transform.translation = viewport.anchor_to_world(anchor, config.shape_size, circle.depth());
    }
}
