//! Hand-authored tunnel cube geometry
//!
//! A unit cube (extent -1..1 on every axis) in the same interleaved
//! position/normal/texcoord layout the cylinder builder produces, authored
//! as a non-indexed triangle list. The catacomb tunnel draws this cube
//! scaled into a long corridor and viewed from the inside, with the shader
//! inverting the normals so the walls are lit from within.

use crate::constants::FLOATS_PER_VERTEX;

/// Number of vertices in the tunnel cube (6 faces, 2 triangles each)
pub const TUNNEL_CUBE_VERTEX_COUNT: usize = 36;

/// Tunnel cube vertex data, 8 floats per vertex
/// (position xyz, normal xyz, texcoord st)
#[rustfmt::skip]
pub const TUNNEL_CUBE_INTERLEAVED: [f32; TUNNEL_CUBE_VERTEX_COUNT * FLOATS_PER_VERTEX] = [
    // back face (z = -1)
    -1.0, -1.0, -1.0,  0.0,  0.0, -1.0,  0.0, 0.0,
     1.0,  1.0, -1.0,  0.0,  0.0, -1.0,  1.0, 1.0,
     1.0, -1.0, -1.0,  0.0,  0.0, -1.0,  1.0, 0.0,
     1.0,  1.0, -1.0,  0.0,  0.0, -1.0,  1.0, 1.0,
    -1.0, -1.0, -1.0,  0.0,  0.0, -1.0,  0.0, 0.0,
    -1.0,  1.0, -1.0,  0.0,  0.0, -1.0,  0.0, 1.0,
    // front face (z = +1)
    -1.0, -1.0,  1.0,  0.0,  0.0,  1.0,  0.0, 0.0,
     1.0, -1.0,  1.0,  0.0,  0.0,  1.0,  1.0, 0.0,
     1.0,  1.0,  1.0,  0.0,  0.0,  1.0,  1.0, 1.0,
     1.0,  1.0,  1.0,  0.0,  0.0,  1.0,  1.0, 1.0,
    -1.0,  1.0,  1.0,  0.0,  0.0,  1.0,  0.0, 1.0,
    -1.0, -1.0,  1.0,  0.0,  0.0,  1.0,  0.0, 0.0,
    // left face (x = -1)
    -1.0,  1.0,  1.0, -1.0,  0.0,  0.0,  1.0, 0.0,
    -1.0,  1.0, -1.0, -1.0,  0.0,  0.0,  1.0, 1.0,
    -1.0, -1.0, -1.0, -1.0,  0.0,  0.0,  0.0, 1.0,
    -1.0, -1.0, -1.0, -1.0,  0.0,  0.0,  0.0, 1.0,
    -1.0, -1.0,  1.0, -1.0,  0.0,  0.0,  0.0, 0.0,
    -1.0,  1.0,  1.0, -1.0,  0.0,  0.0,  1.0, 0.0,
    // right face (x = +1)
     1.0,  1.0,  1.0,  1.0,  0.0,  0.0,  1.0, 0.0,
     1.0, -1.0, -1.0,  1.0,  0.0,  0.0,  0.0, 1.0,
     1.0,  1.0, -1.0,  1.0,  0.0,  0.0,  1.0, 1.0,
     1.0, -1.0, -1.0,  1.0,  0.0,  0.0,  0.0, 1.0,
     1.0,  1.0,  1.0,  1.0,  0.0,  0.0,  1.0, 0.0,
     1.0, -1.0,  1.0,  1.0,  0.0,  0.0,  0.0, 0.0,
    // bottom face (y = -1)
    -1.0, -1.0, -1.0,  0.0, -1.0,  0.0,  0.0, 1.0,
     1.0, -1.0, -1.0,  0.0, -1.0,  0.0,  1.0, 1.0,
     1.0, -1.0,  1.0,  0.0, -1.0,  0.0,  1.0, 0.0,
     1.0, -1.0,  1.0,  0.0, -1.0,  0.0,  1.0, 0.0,
    -1.0, -1.0,  1.0,  0.0, -1.0,  0.0,  0.0, 0.0,
    -1.0, -1.0, -1.0,  0.0, -1.0,  0.0,  0.0, 1.0,
    // top face (y = +1)
    -1.0,  1.0, -1.0,  0.0,  1.0,  0.0,  0.0, 1.0,
     1.0,  1.0,  1.0,  0.0,  1.0,  0.0,  1.0, 0.0,
     1.0,  1.0, -1.0,  0.0,  1.0,  0.0,  1.0, 1.0,
     1.0,  1.0,  1.0,  0.0,  1.0,  0.0,  1.0, 0.0,
    -1.0,  1.0, -1.0,  0.0,  1.0,  0.0,  0.0, 1.0,
    -1.0,  1.0,  1.0,  0.0,  1.0,  0.0,  0.0, 0.0,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_vertex_count() {
        assert_eq!(
            TUNNEL_CUBE_INTERLEAVED.len(),
            TUNNEL_CUBE_VERTEX_COUNT * FLOATS_PER_VERTEX
        );
    }

    #[test]
    fn test_cube_extents_and_normals() {
        for chunk in TUNNEL_CUBE_INTERLEAVED.chunks(FLOATS_PER_VERTEX) {
            // positions on the unit cube surface
            for &p in &chunk[0..3] {
                assert!(p == 1.0 || p == -1.0);
            }
            // axis-aligned unit normals
            let n = &chunk[3..6];
            let len_sq: f32 = n.iter().map(|c| c * c).sum();
            assert_eq!(len_sq, 1.0);
            // texcoords in the unit square
            assert!((0.0..=1.0).contains(&chunk[6]));
            assert!((0.0..=1.0).contains(&chunk[7]));
        }
    }
}
