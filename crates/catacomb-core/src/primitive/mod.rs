//! Primitive mesh generation for the catacomb scene
//!
//! Generates vertices, normals, texture coordinates and indices for the
//! scene geometry:
//! - Cylinder / cone frustum (procedural, with end caps and a wireframe
//!   overlay)
//! - Tunnel cube (hand-authored, non-indexed)
//!
//! Both primitives share the same interleaved vertex layout: 8 floats per
//! vertex (position, normal, texcoord), 32 bytes of stride.

mod cube;
mod cylinder;

pub use cube::{TUNNEL_CUBE_INTERLEAVED, TUNNEL_CUBE_VERTEX_COUNT};
pub use cylinder::{CylinderConfig, CylinderMesh, side_normals, unit_circle_vertices};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FLOATS_PER_VERTEX, INTERLEAVED_STRIDE};

    #[test]
    fn test_primitives_share_vertex_layout() {
        let mesh = CylinderMesh::default();
        assert_eq!(mesh.interleaved().len() % FLOATS_PER_VERTEX, 0);
        assert_eq!(TUNNEL_CUBE_INTERLEAVED.len() % FLOATS_PER_VERTEX, 0);
        assert_eq!(
            INTERLEAVED_STRIDE as usize,
            FLOATS_PER_VERTEX * std::mem::size_of::<f32>()
        );
    }

    #[test]
    fn test_default_cylinder() {
        let mesh = CylinderMesh::default();
        assert_eq!(mesh.config().sector_count, 36);
        assert_eq!(mesh.config().stack_count, 1);
        assert!(!mesh.indices().is_empty());
        assert_eq!(mesh.index_count() % 3, 0);
        assert_eq!(mesh.vertex_count(), mesh.normal_count());
        assert_eq!(mesh.vertex_count(), mesh.tex_coord_count());
    }
}
