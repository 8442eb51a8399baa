use bevy::math::Vec2;

/// The dragged point: top-left anchor of the lead shape, in screen pixels
/// (origin top-left, y down)
#[derive(Debug, Clone, PartialEq)]
pub struct PointTracker {
    position: Vec2,
    viewport: Vec2,
    shape_size: f32,
}

/// Captured at drag start, consumed at drag end
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Tracker position when the gesture began
    pub origin: Vec2,
    /// Pointer position when the gesture began
    pub pointer_start: Vec2,
}

impl DragSession {
    /// Translation of `pointer` since the gesture began
    pub fn translation(&self, pointer: Vec2) -> Vec2 {
        pointer - self.pointer_start
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// Pointer went down on the shape at this screen position
    Start { pointer: Vec2 },
    /// Translation since `Start`
    Update { translation: Vec2 },
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragPhase {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragPhase::Dragging(_))
    }

    /// Apply one gesture event, returning the next phase
    pub fn apply(self, event: DragEvent, tracker: &mut PointTracker) -> DragPhase {
        match (self, event) {
            (_, DragEvent::Start { pointer }) => DragPhase::Dragging(tracker.on_drag_start(pointer)),
            (DragPhase::Dragging(session), DragEvent::Update { translation }) => {
                tracker.on_drag_update(&session, translation);
                DragPhase::Dragging(session)
            }
            (DragPhase::Idle, DragEvent::Update { .. }) => DragPhase::Idle,
            (_, DragEvent::End) => {
                tracker.on_drag_end();
                DragPhase::Idle
            }
        }
    }
}

impl PointTracker {
    /// Tracker centered in the viewport
    pub fn centered(viewport: Vec2, shape_size: f32) -> Self {
        PointTracker {
            position: (viewport - Vec2::splat(shape_size)) / 2.0,
            viewport,
            shape_size,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Largest in-bounds anchor; saturates at zero when the shape doesn't fit
    pub fn max_position(&self) -> Vec2 {
        (self.viewport - Vec2::splat(self.shape_size)).max(Vec2::ZERO)
    }

    /// New clamp bounds. The position is left alone until the next drag ends.
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    pub fn on_drag_start(&self, pointer: Vec2) -> DragSession {
        log::debug!("drag start at {:?}", self.position);
        DragSession {
            origin: self.position,
            pointer_start: pointer,
        }
    }

    /// Follows the pointer without clamping
    pub fn on_drag_update(&mut self, session: &DragSession, translation: Vec2) {
        self.position = session.origin + translation;
    }

    /// Clamp into the viewport, per axis
    pub fn on_drag_end(&mut self) {
        self.position = self.position.clamp(Vec2::ZERO, self.max_position());
        log::debug!("drag end, clamped to {:?}", self.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Vec2 = Vec2::new(400.0, 800.0);
    const SIZE: f32 = 80.0;

    fn drag(tracker: &mut PointTracker, translation: Vec2) {
        let phase = DragPhase::Idle
            .apply(DragEvent::Start { pointer: Vec2::ZERO }, tracker)
            .apply(DragEvent::Update { translation }, tracker);
        assert!(phase.is_dragging());
        let phase = phase.apply(DragEvent::End, tracker);
        assert_eq!(phase, DragPhase::Idle);
    }

    fn in_bounds(tracker: &PointTracker) -> bool {
        let p = tracker.position();
        let max = tracker.max_position();
        p.x >= 0.0 && p.y >= 0.0 && p.x <= max.x && p.y <= max.y
    }

    #[test]
    fn test_default_position_is_centered() {
        let tracker = PointTracker::centered(VIEWPORT, SIZE);
        assert_eq!(tracker.position(), Vec2::new(160.0, 360.0));

        for viewport in [Vec2::new(1080.0, 1920.0), Vec2::new(81.0, 99.5)] {
            let tracker = PointTracker::centered(viewport, SIZE);
            assert_eq!(tracker.position(), (viewport - Vec2::splat(SIZE)) / 2.0);
        }
    }

    #[test]
    fn test_drag_right_clamps_x() {
        let mut tracker = PointTracker::centered(VIEWPORT, SIZE);
        drag(&mut tracker, Vec2::new(1000.0, 0.0));
        assert_eq!(tracker.position(), Vec2::new(320.0, 360.0));
    }

    #[test]
    fn test_drag_up_left_clamps_to_origin() {
        let mut tracker = PointTracker::centered(VIEWPORT, SIZE);
        drag(&mut tracker, Vec2::new(-1000.0, -1000.0));
        assert_eq!(tracker.position(), Vec2::ZERO);
    }

    #[test]
    fn test_small_drag_is_unclamped() {
        let mut tracker = PointTracker::centered(VIEWPORT, SIZE);
        drag(&mut tracker, Vec2::new(10.0, 10.0));
        assert_eq!(tracker.position(), Vec2::new(170.0, 370.0));
    }

    #[test]
    fn test_no_clamp_during_drag() {
        let mut tracker = PointTracker::centered(VIEWPORT, SIZE);
        let phase = DragPhase::Idle
            .apply(DragEvent::Start { pointer: Vec2::ZERO }, &mut tracker)
            .apply(
                DragEvent::Update {
                    translation: Vec2::new(0.0, 5000.0),
                },
                &mut tracker,
            );

        assert!(phase.is_dragging());
        assert_eq!(tracker.position(), Vec2::new(160.0, 5360.0));
    }

    #[test]
    fn test_updates_are_relative_to_origin() {
        let mut tracker = PointTracker::centered(VIEWPORT, SIZE);
        let mut phase = DragPhase::Idle.apply(DragEvent::Start { pointer: Vec2::ZERO }, &mut tracker);
        for step in 1..=5 {
            phase = phase.apply(
                DragEvent::Update {
                    translation: Vec2::splat(step as f32),
                },
                &mut tracker,
            );
        }
        assert_eq!(tracker.position(), Vec2::new(165.0, 365.0));
    }

    #[test]
    fn test_end_is_idempotent() {
        let mut tracker = PointTracker::centered(VIEWPORT, SIZE);
        drag(&mut tracker, Vec2::new(999.0, -42.0));
        let once = tracker.position();

        let phase = DragPhase::Idle.apply(DragEvent::End, &mut tracker);
        assert_eq!(phase, DragPhase::Idle);
        assert_eq!(tracker.position(), once);
    }

    #[test]
    fn test_update_while_idle_is_ignored() {
        let mut tracker = PointTracker::centered(VIEWPORT, SIZE);
        let phase = DragPhase::Idle.apply(
            DragEvent::Update {
                translation: Vec2::splat(50.0),
            },
            &mut tracker,
        );
        assert_eq!(phase, DragPhase::Idle);
        assert_eq!(tracker.position(), Vec2::new(160.0, 360.0));
    }

    #[test]
    fn test_restart_records_new_origin() {
        let mut tracker = PointTracker::centered(VIEWPORT, SIZE);
        let phase = DragPhase::Idle
            .apply(DragEvent::Start { pointer: Vec2::ZERO }, &mut tracker)
            .apply(
                DragEvent::Update {
                    translation: Vec2::splat(20.0),
                },
                &mut tracker,
            )
            .apply(
                DragEvent::Start {
                    pointer: Vec2::splat(7.0),
                },
                &mut tracker,
            );

        match phase {
            DragPhase::Dragging(session) => {
                assert_eq!(session.origin, Vec2::new(180.0, 380.0));
                assert_eq!(session.translation(Vec2::splat(10.0)), Vec2::splat(3.0));
            }
            DragPhase::Idle => panic!("expected an active drag"),
        }
    }

    #[test]
    fn test_many_drag_sequences_end_in_bounds() {
        let translations = [-5000.0, -321.5, -1.0, 0.0, 0.5, 77.0, 640.0, 1e6];
        for &dx in &translations {
            for &dy in &translations {
                let mut tracker = PointTracker::centered(VIEWPORT, SIZE);
                drag(&mut tracker, Vec2::new(dx, dy));
                assert!(in_bounds(&tracker), "out of bounds after ({}, {})", dx, dy);
            }
        }
    }

    #[test]
    fn test_viewport_smaller_than_shape() {
        let mut tracker = PointTracker::centered(Vec2::new(50.0, 50.0), SIZE);
        drag(&mut tracker, Vec2::new(10.0, 10.0));
        assert_eq!(tracker.position(), Vec2::ZERO);
    }

    #[test]
    fn test_resize_applies_on_next_release() {
        let mut tracker = PointTracker::centered(VIEWPORT, SIZE);
        drag(&mut tracker, Vec2::new(1000.0, 1000.0));
        assert_eq!(tracker.position(), Vec2::new(320.0, 720.0));

        tracker.set_viewport(Vec2::new(200.0, 200.0));
        assert_eq!(tracker.position(), Vec2::new(320.0, 720.0));

        tracker.on_drag_end();
        assert_eq!(tracker.position(), Vec2::new(120.0, 120.0));
    }
}
