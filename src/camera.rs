use bevy::camera::ScalingMode;
use bevy::prelude::*;

/// Used until the primary window reports a size
const FALLBACK_VIEWPORT: Vec2 = Vec2::new(540.0, 960.0);

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::WHITE))
            .init_resource::<ScreenViewport>()
            .add_systems(PreStartup, read_viewport)
            .add_systems(Startup, setup_camera)
            .add_systems(Update, update_viewport);
    }
}

/// Logical window size in pixels (top-left origin, y down)
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ScreenViewport {
    pub size: Vec2,
}

impl Default for ScreenViewport {
    fn default() -> Self {
        Self {
            size: FALLBACK_VIEWPORT,
        }
    }
}

impl ScreenViewport {
    pub fn new(size: Vec2) -> Self {
        Self { size }
    }

    /// World-space center for a square of `size` anchored at `anchor` (screen space)
    ///
    /// Screen:  origin top-left, +Y down.
    /// World:   origin at the window center, +Y up, 1 unit = 1 logical pixel.
    pub fn anchor_to_world(&self, anchor: Vec2, size: f32, depth: f32) -> Vec3 {
        let center = anchor + Vec2::splat(size * 0.5);
        Vec3::new(
            center.x - self.size.x * 0.5,
            self.size.y * 0.5 - center.y,
            depth,
        )
    }
}

/// Orthographic camera looking down -Z at the XY plane, one world unit per pixel
fn setup_camera(mut commands: Commands) {
    let projection = Projection::Orthographic(OrthographicProjection {
        scaling_mode: ScalingMode::WindowSize,
        near: 0.0,
        far: 1000.0,
        ..OrthographicProjection::default_3d()
    });
    commands.spawn((
        Camera3d::default(),
        projection,
        Transform::from_xyz(0.0, 0.0, 100.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn read_viewport(mut viewport: ResMut<ScreenViewport>, windows: Query<&Window>) {
    match windows.single() {
        Ok(window) => *viewport = ScreenViewport::new(Vec2::new(window.width(), window.height())),
        Err(_) => warn!(
            "No primary window at startup, using fallback viewport {:?}",
            viewport.size
        ),
    }
}

/// Update viewport resource when window is resized
fn update_viewport(mut viewport: ResMut<ScreenViewport>, windows: Query<&Window>) {
    if let Ok(window) = windows.single() {
        let new_size = Vec2::new(window.width(), window.height());

        // Only update if size actually changed
        if (new_size - viewport.size).abs().max_element() > 0.5 {
            viewport.size = new_size;
            info!("Viewport resized: {:?}", viewport.size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_anchor_maps_to_origin() {
        let viewport = ScreenViewport::new(Vec2::new(400.0, 800.0));
        let world = viewport.anchor_to_world(Vec2::new(160.0, 360.0), 80.0, 2.0);

        assert_eq!(world, Vec3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_top_left_anchor_maps_up_and_left() {
        let viewport = ScreenViewport::new(Vec2::new(400.0, 800.0));
        let world = viewport.anchor_to_world(Vec2::ZERO, 80.0, 0.0);

        assert_eq!(world, Vec3::new(-160.0, 360.0, 0.0));
    }

    #[test]
    fn test_moving_down_on_screen_lowers_world_y() {
        let viewport = ScreenViewport::new(Vec2::new(400.0, 800.0));
        let a = viewport.anchor_to_world(Vec2::new(0.0, 100.0), 80.0, 0.0);
        let b = viewport.anchor_to_world(Vec2::new(0.0, 200.0), 80.0, 0.0);

        assert_eq!(a.y - b.y, 100.0);
    }
}
