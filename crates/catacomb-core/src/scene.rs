//! Catacomb scene description
//!
//! Value types describing the authored demo scene: the tunnel placement,
//! the HDR point lights and the camera spawn point. The description is
//! plain data with RON save/load; turning it into GPU state is the
//! renderer's business.

use std::path::Path;

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// A point light with a radiometric (unclamped) color
///
/// The main tunnel light uses a color far above 1.0 per channel; the HDR
/// pipeline relies on that overshoot surviving until tone mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    /// Light position in world space
    pub position: Vec3,
    /// Light color, linear and unclamped
    pub color: Vec3,
}

impl PointLight {
    /// Create a point light
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }
}

/// Placement of the tunnel cube in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TunnelPlacement {
    /// World-space translation
    pub translation: Vec3,
    /// Per-axis scale applied to the unit cube
    pub scale: Vec3,
}

impl TunnelPlacement {
    /// Model matrix for the tunnel (translation, then scale)
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation) * Mat4::from_scale(self.scale)
    }
}

/// Scene-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum SceneError {
    /// Filesystem read or write failed
    #[error("IO error: {0}")]
    Io(String),
    /// RON serialization failed
    #[error("Serialize error: {0}")]
    Serialize(String),
    /// RON deserialization failed
    #[error("Deserialize error: {0}")]
    Deserialize(String),
}

/// Complete description of the catacomb scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatacombScene {
    /// File format version
    pub version: u32,
    /// Scene name
    pub name: String,
    /// Tunnel cube placement
    pub tunnel: TunnelPlacement,
    /// Point lights, strongest first
    pub lights: Vec<PointLight>,
    /// Initial camera position
    pub camera_start: Vec3,
}

impl Default for CatacombScene {
    fn default() -> Self {
        Self {
            version: 1,
            name: "Catacomb Tunnel".to_string(),
            tunnel: TunnelPlacement {
                translation: Vec3::new(0.4, 0.4, -10.5),
                scale: Vec3::new(2.5, 2.5, 16.5),
            },
            lights: vec![
                // the bright white light at the far end of the tunnel
                PointLight::new(Vec3::new(0.0, 0.0, -22.34), Vec3::new(200.0, 200.0, 200.0)),
                PointLight::new(Vec3::new(-1.4, -1.9, 9.0), Vec3::new(0.1, 0.0, 0.0)),
                PointLight::new(Vec3::new(0.0, -1.8, 4.0), Vec3::new(0.0, 0.0, 0.2)),
                PointLight::new(Vec3::new(0.8, -1.7, 6.0), Vec3::new(0.0, 0.1, 0.0)),
            ],
            camera_start: Vec3::new(0.0, 0.0, 5.0),
        }
    }
}

impl CatacombScene {
    /// Save the scene to a RON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SceneError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| SceneError::Serialize(e.to_string()))?;
        std::fs::write(path.as_ref(), content).map_err(|e| SceneError::Io(e.to_string()))?;
        Ok(())
    }

    /// Load a scene from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SceneError::Io(e.to_string()))?;
        let scene: CatacombScene =
            ron::from_str(&content).map_err(|e| SceneError::Deserialize(e.to_string()))?;
        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene() {
        let scene = CatacombScene::default();
        assert_eq!(scene.lights.len(), 4);
        // the key light overshoots the displayable range
        assert!(scene.lights[0].color.max_element() > 1.0);
        assert_eq!(scene.tunnel.scale.z, 16.5);
    }

    #[test]
    fn test_tunnel_matrix_order() {
        let scene = CatacombScene::default();
        let m = scene.tunnel.matrix();
        // a corner of the unit cube lands at translation + scale
        let corner = m.transform_point3(Vec3::ONE);
        let expected = scene.tunnel.translation + scene.tunnel.scale;
        assert!((corner - expected).length() < 1e-5);
    }

    #[test]
    fn test_scene_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.ron");

        let scene = CatacombScene::default();
        scene.save(&path).unwrap();
        let loaded = CatacombScene::load(&path).unwrap();
        assert_eq!(scene, loaded);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = CatacombScene::load("/nonexistent/scene.ron").unwrap_err();
        assert!(matches!(err, SceneError::Io(_)));
    }
}
