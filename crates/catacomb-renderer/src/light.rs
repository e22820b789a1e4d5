//! Point-light uniform packing

use bytemuck::{Pod, Zeroable};

use catacomb_core::PointLight;

/// Maximum number of point lights in the uniform block
pub const MAX_LIGHTS: usize = 4;

/// GPU uniform block holding the scene's point lights
///
/// Positions and colors are padded to vec4 for std140-compatible layout.
/// Colors pass through unclamped; the HDR pass depends on it.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct LightsUniform {
    /// Light positions (w unused).
    pub positions: [[f32; 4]; MAX_LIGHTS],
    /// Light colors, linear and unclamped (w unused).
    pub colors: [[f32; 4]; MAX_LIGHTS],
    /// Number of active lights.
    pub count: u32,
    /// Padding for 16-byte alignment.
    pub _pad: [u32; 3],
}

impl LightsUniform {
    /// Pack lights into the uniform block, truncating past [`MAX_LIGHTS`].
    pub fn from_lights(lights: &[PointLight]) -> Self {
        let mut uniform = Self::zeroed();
        let count = lights.len().min(MAX_LIGHTS);

        for (i, light) in lights.iter().take(count).enumerate() {
            uniform.positions[i] = [light.position.x, light.position.y, light.position.z, 0.0];
            uniform.colors[i] = [light.color.x, light.color.y, light.color.z, 0.0];
        }
        uniform.count = count as u32;
        uniform
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catacomb_core::CatacombScene;

    #[test]
    fn test_packs_default_scene() {
        let scene = CatacombScene::default();
        let uniform = LightsUniform::from_lights(&scene.lights);
        assert_eq!(uniform.count, 4);
        assert_eq!(uniform.positions[0][2], -22.34);
        // HDR key light survives unclamped
        assert_eq!(uniform.colors[0][0], 200.0);
    }

    #[test]
    fn test_truncates_excess_lights() {
        let lights = vec![PointLight::new(glam::Vec3::ZERO, glam::Vec3::ONE); 7];
        let uniform = LightsUniform::from_lights(&lights);
        assert_eq!(uniform.count, MAX_LIGHTS as u32);
    }

    #[test]
    fn test_uniform_size_is_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<LightsUniform>() % 16, 0);
    }
}
