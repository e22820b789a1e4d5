//! CPU-side mesh staging for buffer upload
//!
//! Converts core geometry into [`SceneVertex`] arrays plus sub-range draw
//! descriptors, and exposes byte views for a caller-owned pipeline to
//! upload. Buffer and pipeline creation stay outside this crate.

use catacomb_core::{CylinderMesh, TUNNEL_CUBE_INTERLEAVED};

use crate::vertex::SceneVertex;

/// A contiguous run of indices for a partial draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    /// Offset of the first index.
    pub start: u32,
    /// Number of indices.
    pub count: u32,
}

impl IndexRange {
    /// The `start..start + count` range for `draw_indexed`.
    pub fn range(&self) -> std::ops::Range<u32> {
        self.start..self.start + self.count
    }
}

/// Sub-ranges of an index buffer by surface region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRanges {
    /// Lateral surface.
    pub side: IndexRange,
    /// Base cap (at negative Z).
    pub base_cap: IndexRange,
    /// Top cap (at positive Z).
    pub top_cap: IndexRange,
}

/// Staged vertex and index data ready for upload
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffers {
    /// Vertex data.
    pub vertices: Vec<SceneVertex>,
    /// Triangle-list indices.
    pub indices: Vec<u32>,
    /// Wireframe line-list indices (empty for non-indexed sources).
    pub line_indices: Vec<u32>,
    /// Index sub-ranges by surface region.
    pub ranges: DrawRanges,
}

impl MeshBuffers {
    /// Stage a cylinder mesh, preserving its side/base/top index regions.
    pub fn from_cylinder(mesh: &CylinderMesh) -> Self {
        let vertices: Vec<SceneVertex> = mesh
            .vertices()
            .iter()
            .zip(mesh.normals())
            .zip(mesh.tex_coords())
            .map(|((&position, &normal), &tex_coord)| SceneVertex {
                position,
                normal,
                tex_coord,
            })
            .collect();

        let ranges = DrawRanges {
            side: IndexRange {
                start: mesh.side_start_index(),
                count: mesh.side_index_count(),
            },
            base_cap: IndexRange {
                start: mesh.base_start_index(),
                count: mesh.base_index_count(),
            },
            top_cap: IndexRange {
                start: mesh.top_start_index(),
                count: mesh.top_index_count(),
            },
        };

        tracing::debug!(
            "Staged cylinder mesh: {} vertices, {} indices ({} side, {} base, {} top), {} line indices",
            vertices.len(),
            mesh.index_count(),
            ranges.side.count,
            ranges.base_cap.count,
            ranges.top_cap.count,
            mesh.line_index_count(),
        );

        Self {
            vertices,
            indices: mesh.indices().to_vec(),
            line_indices: mesh.line_indices().to_vec(),
            ranges,
        }
    }

    /// Stage a non-indexed interleaved vertex list (e.g. the tunnel cube).
    ///
    /// Generates identity indices so everything can go through the same
    /// indexed draw path; the whole mesh lands in the side range and the
    /// cap ranges stay empty.
    pub fn from_interleaved(data: &[f32]) -> Self {
        let vertices = SceneVertex::from_interleaved(data);
        let indices: Vec<u32> = (0..vertices.len() as u32).collect();
        let count = indices.len() as u32;

        tracing::debug!(
            "Staged non-indexed mesh: {} vertices",
            vertices.len()
        );

        Self {
            vertices,
            indices,
            line_indices: Vec::new(),
            ranges: DrawRanges {
                side: IndexRange { start: 0, count },
                base_cap: IndexRange {
                    start: count,
                    count: 0,
                },
                top_cap: IndexRange {
                    start: count,
                    count: 0,
                },
            },
        }
    }

    /// Stage the hand-authored tunnel cube.
    pub fn tunnel_cube() -> Self {
        Self::from_interleaved(&TUNNEL_CUBE_INTERLEAVED)
    }

    /// Vertex data as bytes for buffer upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as bytes for buffer upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Wireframe index data as bytes for buffer upload.
    pub fn line_index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.line_indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catacomb_core::CylinderConfig;

    #[test]
    fn test_cylinder_staging_preserves_regions() {
        let mesh = CylinderMesh::build(&CylinderConfig::new(1.0, 0.5, 2.0, 12, 3));
        let buffers = MeshBuffers::from_cylinder(&mesh);

        assert_eq!(buffers.vertices.len() as u32, mesh.vertex_count());
        assert_eq!(buffers.indices.len() as u32, mesh.index_count());
        assert_eq!(buffers.ranges.side.range(), 0..mesh.base_start_index());
        assert_eq!(
            buffers.ranges.base_cap.range().end,
            buffers.ranges.top_cap.range().start
        );
        assert_eq!(
            buffers.ranges.top_cap.range().end as usize,
            buffers.indices.len()
        );
    }

    #[test]
    fn test_staged_vertices_match_interleaved() {
        let mesh = CylinderMesh::build(&CylinderConfig::new(1.0, 1.0, 2.0, 6, 1));
        let buffers = MeshBuffers::from_cylinder(&mesh);
        let from_interleaved = SceneVertex::from_interleaved(mesh.interleaved());
        assert_eq!(buffers.vertices, from_interleaved);
    }

    #[test]
    fn test_tunnel_cube_staging() {
        let buffers = MeshBuffers::tunnel_cube();
        assert_eq!(buffers.vertices.len(), 36);
        assert_eq!(buffers.indices, (0..36).collect::<Vec<u32>>());
        assert!(buffers.line_indices.is_empty());
        assert_eq!(buffers.ranges.side.count, 36);
        assert_eq!(buffers.ranges.base_cap.count, 0);
    }

    #[test]
    fn test_byte_views() {
        let buffers = MeshBuffers::tunnel_cube();
        assert_eq!(buffers.vertex_bytes().len(), 36 * 32);
        assert_eq!(buffers.index_bytes().len(), 36 * 4);
    }
}
