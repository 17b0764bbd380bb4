use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::math::Vec3;

/// Camera and viewport tuning. Defaults match the reference demo; a JSON
/// file can override any subset of fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Vertical field of view, radians.
    pub fov: f32,
    pub near_clip: f32,
    pub far_clip: f32,
    /// World units per tick while a movement flag is held.
    pub camera_speed: f32,
    /// Degrees of yaw/pitch per pixel of mouse travel.
    pub mouse_sensitivity: f32,
    pub camera_position: [f32; 3],
    pub camera_target: [f32; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            fov: std::f32::consts::FRAC_PI_2,
            near_clip: 1.0,
            far_clip: 100.0,
            camera_speed: 0.05,
            mouse_sensitivity: 0.15,
            camera_position: [3.0, 0.0, 3.0],
            camera_target: [0.0, 0.0, 0.0],
        }
    }
}

impl RenderConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: RenderConfig = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// The math core propagates NaN/Inf from degenerate parameters instead
    /// of checking per frame; this is the one-time gate that keeps those
    /// parameters out.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!("window size must be non-zero, got {}x{}", self.width, self.height);
        }
        if !(self.fov > 0.0 && self.fov < std::f32::consts::PI) {
            bail!("fov must be in (0, pi), got {}", self.fov);
        }
        if !(self.near_clip > 0.0 && self.near_clip < self.far_clip) {
            bail!(
                "clip planes must satisfy 0 < near < far, got near {} far {}",
                self.near_clip,
                self.far_clip
            );
        }
        if self.camera_position == self.camera_target {
            bail!("camera position must not equal its target");
        }
        Ok(())
    }

    pub fn camera_position(&self) -> Vec3 {
        let [x, y, z] = self.camera_position;
        Vec3::new(x, y, z)
    }

    pub fn camera_target(&self) -> Vec3 {
        let [x, y, z] = self.camera_target;
        Vec3::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(RenderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_equal_clip_planes() {
        let config = RenderConfig {
            near_clip: 5.0,
            far_clip: 5.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_degenerate_fov() {
        for fov in [0.0, std::f32::consts::PI, -1.0] {
            let config = RenderConfig {
                fov,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "fov {fov} should be rejected");
        }
    }

    #[test]
    fn test_rejects_target_equal_to_position() {
        let config = RenderConfig {
            camera_position: [1.0, 2.0, 3.0],
            camera_target: [1.0, 2.0, 3.0],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_overrides_defaults() {
        let config: RenderConfig = serde_json::from_str(r#"{"camera_speed": 0.2}"#).unwrap();
        assert_eq!(config.camera_speed, 0.2);
        assert_eq!(config.width, 1024);
    }
}
