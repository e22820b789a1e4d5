//! Vertex formats for the catacomb scene

use bytemuck::{Pod, Zeroable};

use catacomb_core::constants::{FLOATS_PER_VERTEX, INTERLEAVED_STRIDE};

/// Vertex for scene geometry: position, normal, texture coordinate
///
/// Matches the interleaved layout the geometry core produces, so core
/// buffers can be reinterpreted without copying. The stride is a constant
/// 32 bytes regardless of mesh configuration.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct SceneVertex {
    /// Vertex position in local space.
    pub position: [f32; 3],
    /// Vertex normal vector.
    pub normal: [f32; 3],
    /// Texture coordinate.
    pub tex_coord: [f32; 2],
}

const _: () = assert!(std::mem::size_of::<SceneVertex>() == INTERLEAVED_STRIDE as usize);

impl SceneVertex {
    /// Vertex attribute descriptors for the shader.
    pub const ATTRIBUTES: &'static [wgpu::VertexAttribute] = &[
        wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        },
        wgpu::VertexAttribute {
            offset: std::mem::size_of::<[f32; 3]>() as u64,
            shader_location: 1,
            format: wgpu::VertexFormat::Float32x3,
        },
        wgpu::VertexAttribute {
            offset: (std::mem::size_of::<[f32; 3]>() * 2) as u64,
            shader_location: 2,
            format: wgpu::VertexFormat::Float32x2,
        },
    ];

    /// Returns the vertex buffer layout for this vertex type.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: Self::ATTRIBUTES,
        }
    }

    /// Reinterpret a tightly packed 8-floats-per-vertex slice as vertices.
    ///
    /// # Panics
    ///
    /// Panics if the slice length is not a multiple of 8.
    pub fn from_interleaved(data: &[f32]) -> Vec<Self> {
        assert_eq!(data.len() % FLOATS_PER_VERTEX, 0);
        data.chunks_exact(FLOATS_PER_VERTEX)
            .map(|chunk| Self {
                position: [chunk[0], chunk[1], chunk[2]],
                normal: [chunk[3], chunk[4], chunk[5]],
                tex_coord: [chunk[6], chunk[7]],
            })
            .collect()
    }
}

/// Vertex for the fullscreen tone-map quad: position and texture coordinate
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    /// Vertex position in clip space.
    pub position: [f32; 3],
    /// Texture coordinate.
    pub tex_coord: [f32; 2],
}

impl QuadVertex {
    /// Vertex attribute descriptors for the shader.
    pub const ATTRIBUTES: &'static [wgpu::VertexAttribute] = &[
        wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        },
        wgpu::VertexAttribute {
            offset: std::mem::size_of::<[f32; 3]>() as u64,
            shader_location: 1,
            format: wgpu::VertexFormat::Float32x2,
        },
    ];

    /// Returns the vertex buffer layout for this vertex type.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: Self::ATTRIBUTES,
        }
    }
}

/// Fullscreen quad as a 4-vertex triangle strip
pub const FULLSCREEN_QUAD: [QuadVertex; 4] = [
    QuadVertex {
        position: [-1.0, 1.0, 0.0],
        tex_coord: [0.0, 1.0],
    },
    QuadVertex {
        position: [-1.0, -1.0, 0.0],
        tex_coord: [0.0, 0.0],
    },
    QuadVertex {
        position: [1.0, 1.0, 0.0],
        tex_coord: [1.0, 1.0],
    },
    QuadVertex {
        position: [1.0, -1.0, 0.0],
        tex_coord: [1.0, 0.0],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_vertex_stride() {
        assert_eq!(std::mem::size_of::<SceneVertex>(), 32);
        assert_eq!(SceneVertex::layout().array_stride, 32);
        assert_eq!(SceneVertex::ATTRIBUTES.len(), 3);
    }

    #[test]
    fn test_from_interleaved() {
        let data = [
            1.0, 2.0, 3.0, 0.0, 0.0, 1.0, 0.5, 0.25, //
            4.0, 5.0, 6.0, 1.0, 0.0, 0.0, 1.0, 0.0,
        ];
        let vertices = SceneVertex::from_interleaved(&data);
        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(vertices[0].normal, [0.0, 0.0, 1.0]);
        assert_eq!(vertices[1].tex_coord, [1.0, 0.0]);
    }

    #[test]
    fn test_tunnel_cube_reinterprets_cleanly() {
        let vertices = SceneVertex::from_interleaved(&catacomb_core::TUNNEL_CUBE_INTERLEAVED);
        assert_eq!(vertices.len(), catacomb_core::TUNNEL_CUBE_VERTEX_COUNT);
    }

    #[test]
    fn test_quad_strip_covers_clip_space() {
        assert_eq!(std::mem::size_of::<QuadVertex>(), 20);
        for v in &FULLSCREEN_QUAD {
            assert!(v.position[0].abs() == 1.0);
            assert!(v.position[1].abs() == 1.0);
        }
    }
}
