use bevy::math::Vec2;
use serde::Deserialize;

/// Largest integration step; longer frames are split into substeps
const MAX_SUBSTEP: f32 = 1.0 / 120.0;

/// Cap on substeps per call; time past the cap is dropped
const MAX_SUBSTEPS: u32 = 10_000;

/// Damped spring tuning (mass-spring-damper)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SpringConfig {
    /// Spring constant k
    pub stiffness: f32,
    /// Damping coefficient c
    pub damping: f32,
    pub mass: f32,
    /// Snap to target once closer than this (pixels)...
    pub rest_displacement: f32,
    /// ...and slower than this (pixels / second)
    pub rest_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        SpringConfig {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
            rest_displacement: 0.01,
            rest_speed: 2.0,
        }
    }
}

impl SpringConfig {
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("mass", self.mass),
            ("rest_displacement", self.rest_displacement),
            ("rest_speed", self.rest_speed),
        ];
        for (name, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("spring.{} must be positive, got {}", name, value));
            }
        }
        Ok(())
    }

    /// Largest step semi-implicit Euler stays stable at for this tuning.
    /// Needs ω·h and (c/m)·h well below 2.
    pub fn stable_substep(&self) -> f32 {
        let omega = (self.stiffness / self.mass).sqrt();
        let decay = self.damping / self.mass;
        MAX_SUBSTEP.min(0.5 / omega).min(0.5 / decay)
    }

    /// ζ = c / (2·sqrt(k·m)); below 1.0 the follower overshoots
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// A position that chases a target through a damped spring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringFollower {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl SpringFollower {
    /// A follower at rest on `position`
    pub fn at_rest(position: Vec2) -> Self {
        SpringFollower {
            position,
            velocity: Vec2::ZERO,
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.velocity == Vec2::ZERO
    }

    /// Advance the spring by `dt` seconds toward `target`
    ///
    /// Axes are integrated independently with semi-implicit Euler. Invalid
    /// `dt` (zero, negative, NaN) is a no-op.
    pub fn step(&mut self, target: Vec2, dt: f32, spring: &SpringConfig) {
        if !(dt.is_finite() && dt > 0.0) {
            return;
        }

        let max_h = spring.stable_substep();
        let needed = (dt / max_h).ceil();
        let (substeps, h) = if needed > MAX_SUBSTEPS as f32 {
            (MAX_SUBSTEPS, max_h)
        } else {
            let n = (needed as u32).max(1);
            (n, dt / n as f32)
        };

        for _ in 0..substeps {
            let displacement = self.position - target;
            let force = -spring.stiffness * displacement - spring.damping * self.velocity;
            self.velocity += force / spring.mass * h;
            self.position += self.velocity * h;
        }

        self.settle(target, spring);
    }

    fn settle(&mut self, target: Vec2, spring: &SpringConfig) {
        if !(self.position.is_finite() && self.velocity.is_finite()) {
            log::warn!("spring diverged, snapping to {:?}", target);
            self.position = target;
            self.velocity = Vec2::ZERO;
            return;
        }

        let near = (self.position - target).abs().max_element() < spring.rest_displacement;
        let slow = self.velocity.abs().max_element() < spring.rest_speed;
        if near && slow {
            self.position = target;
            self.velocity = Vec2::ZERO;
        }
    }
}
