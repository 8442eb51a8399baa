use bevy::prelude::*;
use serde::Deserialize;

use crate::follow::{FOLLOWER_COUNT, spring::SpringConfig};

const FOLLOW_JSON: &str = include_str!("../assets/follow.json");

/// Tuning for the follower screen, loaded from the embedded JSON
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
pub struct FollowConfig {
    /// Circle diameter in logical pixels
    pub shape_size: f32,
    /// Alpha applied to every layer
    pub opacity: f32,
    pub spring: SpringConfig,
    /// RGB per layer, back to front: trailing, middle, lead
    pub layer_colors: Vec<[f32; 3]>,
}

impl Default for FollowConfig {
    fn default() -> Self {
        FollowConfig {
            shape_size: 80.0,
            opacity: 0.8,
            spring: SpringConfig::default(),
            layer_colors: vec![[0.0, 0.5, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }
}

impl FollowConfig {
    /// Load the config from embedded JSON data
    pub fn load() -> Result<Self, String> {
        Self::from_json(FOLLOW_JSON)
    }

    fn from_json(json: &str) -> Result<Self, String> {
        let config: FollowConfig =
            serde_json::from_str(json).map_err(|e| format!("Parse error in follow.json: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if !(self.shape_size.is_finite() && self.shape_size > 0.0) {
            return Err(format!("shape_size must be positive, got {}", self.shape_size));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(format!("opacity must be within [0, 1], got {}", self.opacity));
        }
        if self.layer_colors.len() != FOLLOWER_COUNT {
            return Err(format!(
                "expected {} layer colors, found {}",
                FOLLOWER_COUNT,
                self.layer_colors.len()
            ));
        }
        self.spring.validate()
    }

    /// sRGBA for a layer index (0 = trailing, back-most)
    pub fn layer_color(&self, layer: usize) -> Color {
        let [r, g, b] = self
            .layer_colors
            .get(layer)
            .copied()
            .unwrap_or([1.0, 1.0, 1.0]);
        Color::srgba(r, g, b, self.opacity)
    }
}

/// Startup system: load tuning, falling back to defaults on a bad file
pub fn setup_follow_config(mut commands: Commands) {
    let config = match FollowConfig::load() {
        Ok(config) => {
            info!(
                "Loaded follow config: size={}, stiffness={}, damping={} (ratio {:.2})",
                config.shape_size,
                config.spring.stiffness,
                config.spring.damping,
                config.spring.damping_ratio()
            );
            config
        }
        Err(e) => {
            error!("Failed to load follow config: {} - using defaults", e);
            FollowConfig::default()
        }
    };
    commands.insert_resource(config);
}
