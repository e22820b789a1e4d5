//! Renderer configuration structures
//!
//! Configurable settings for the catacomb renderer that can be serialized
//! and loaded from configuration files.

use serde::{Deserialize, Serialize};

/// Exposure change applied per key-repeat tick
pub const EXPOSURE_STEP: f32 = 0.001;

/// HDR tone-mapping configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HdrConfig {
    /// Whether tone mapping is applied (off shows the raw clamped buffer)
    pub enabled: bool,
    /// Exposure for the tone-map operator
    pub exposure: f32,
}

impl Default for HdrConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            exposure: 1.0,
        }
    }
}

impl HdrConfig {
    /// Lower the exposure by one step, stopping at zero
    pub fn decrease_exposure(&mut self) {
        self.exposure = (self.exposure - EXPOSURE_STEP).max(0.0);
    }

    /// Raise the exposure by one step
    pub fn increase_exposure(&mut self) {
        self.exposure += EXPOSURE_STEP;
    }
}

/// Viewport rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewportConfig {
    /// Background clear color (RGBA)
    pub background_color: [f32; 4],
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            background_color: [0.1, 0.1, 0.1, 1.0],
        }
    }
}

/// Camera default configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraConfig {
    /// Field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane distance
    pub near_plane: f32,
    /// Far clipping plane distance
    pub far_plane: f32,
    /// Movement speed in units per second
    pub move_speed: f32,
    /// Mouse look sensitivity in degrees per pixel
    pub look_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near_plane: 0.1,
            far_plane: 100.0,
            move_speed: 2.5,
            look_sensitivity: 0.1,
        }
    }
}

/// Complete renderer configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RendererConfig {
    /// HDR settings
    #[serde(default)]
    pub hdr: HdrConfig,
    /// Viewport settings
    #[serde(default)]
    pub viewport: ViewportConfig,
    /// Camera settings
    #[serde(default)]
    pub camera: CameraConfig,
}

impl RendererConfig {
    /// Create a new renderer configuration with default values
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exposure_floor() {
        let mut hdr = HdrConfig {
            enabled: true,
            exposure: EXPOSURE_STEP / 2.0,
        };
        hdr.decrease_exposure();
        assert_eq!(hdr.exposure, 0.0);
        hdr.decrease_exposure();
        assert_eq!(hdr.exposure, 0.0);
        hdr.increase_exposure();
        assert_eq!(hdr.exposure, EXPOSURE_STEP);
    }

    #[test]
    fn test_defaults() {
        let config = RendererConfig::new();
        assert!(config.hdr.enabled);
        assert_eq!(config.hdr.exposure, 1.0);
        assert_eq!(config.camera.fov_degrees, 45.0);
        assert_eq!(config.viewport.background_color, [0.1, 0.1, 0.1, 1.0]);
    }
}
