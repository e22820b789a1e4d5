//! Cylinder / cone frustum mesh generation (with end caps)
//!
//! Generates positions, smooth normals, texture coordinates, triangle
//! indices and a wireframe overlay for a solid of revolution with
//! independently configurable base and top radii. Equal radii produce a
//! true cylinder, unequal radii a cone frustum, a zero radius a cone.
//!
//! The mesh is built along the Z axis: the base cap sits at `z = -height/2`,
//! the top cap at `z = +height/2`. Vertex layout is one ring per stack
//! (bottom to top), then the base cap fan, then the top cap fan. The index
//! buffer is partitioned into three contiguous regions in the order side,
//! base cap, top cap, so each region can be drawn on its own.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_SECTOR_COUNT, DEFAULT_STACK_COUNT, FLOATS_PER_VERTEX, INTERLEAVED_STRIDE,
    MIN_SECTOR_COUNT, MIN_STACK_COUNT,
};

/// Parameters for cylinder mesh generation
///
/// Out-of-range tessellation counts are never rejected; the builder clamps
/// `sector_count` to at least 3 and `stack_count` to at least 1. Radii and
/// height carry no sign constraint, and degenerate values (zero height with
/// equal radii) produce a well-defined zero-area mesh rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderConfig {
    /// Radius of the ring at `z = -height/2`
    pub base_radius: f32,
    /// Radius of the ring at `z = +height/2`
    pub top_radius: f32,
    /// Extent along the Z axis
    pub height: f32,
    /// Number of angular slices (clamped to at least 3)
    pub sector_count: u32,
    /// Number of subdivisions along the Z axis (clamped to at least 1)
    pub stack_count: u32,
    /// Smooth shading flag. Only the smooth path is implemented; a `false`
    /// value currently builds the same smooth-shaded arrays.
    pub smooth: bool,
}

impl Default for CylinderConfig {
    fn default() -> Self {
        Self {
            base_radius: 1.0,
            top_radius: 1.0,
            height: 1.0,
            sector_count: DEFAULT_SECTOR_COUNT,
            stack_count: DEFAULT_STACK_COUNT,
            smooth: true,
        }
    }
}

impl CylinderConfig {
    /// Create a config with the given geometry and smooth shading enabled
    pub fn new(
        base_radius: f32,
        top_radius: f32,
        height: f32,
        sector_count: u32,
        stack_count: u32,
    ) -> Self {
        Self {
            base_radius,
            top_radius,
            height,
            sector_count,
            stack_count,
            smooth: true,
        }
    }

    /// Copy of this config with tessellation counts clamped to the minimums
    pub fn clamped(&self) -> Self {
        Self {
            sector_count: self.sector_count.max(MIN_SECTOR_COUNT),
            stack_count: self.stack_count.max(MIN_STACK_COUNT),
            ..*self
        }
    }

    /// Copy with a different base radius
    pub fn with_base_radius(self, base_radius: f32) -> Self {
        Self {
            base_radius,
            ..self
        }
    }

    /// Copy with a different top radius
    pub fn with_top_radius(self, top_radius: f32) -> Self {
        Self { top_radius, ..self }
    }

    /// Copy with a different height
    pub fn with_height(self, height: f32) -> Self {
        Self { height, ..self }
    }

    /// Copy with a different sector count
    pub fn with_sector_count(self, sector_count: u32) -> Self {
        Self {
            sector_count,
            ..self
        }
    }

    /// Copy with a different stack count
    pub fn with_stack_count(self, stack_count: u32) -> Self {
        Self {
            stack_count,
            ..self
        }
    }
}

/// Unit circle sample points on the XY plane, one per sector boundary
///
/// Returns `sector_count + 1` points; the inclusive upper bound duplicates
/// the 0-degree sample at 360 degrees so consumers can close the ring
/// without special-casing the seam.
pub fn unit_circle_vertices(sector_count: u32) -> Vec<[f32; 3]> {
    let sector_step = 2.0 * PI / sector_count as f32;

    (0..=sector_count)
        .map(|i| {
            let sector_angle = i as f32 * sector_step;
            [sector_angle.cos(), sector_angle.sin(), 0.0]
        })
        .collect()
}

/// Lateral-surface normals, one per sector boundary
///
/// The normal at sector 0 is tilted by `atan2(base_radius - top_radius,
/// height)` so a frustum with unequal radii gets correctly slanted normals
/// instead of purely radial ones, then rotated about Z for each sector.
/// The Z component is rotation-invariant. `height = 0` with equal radii
/// yields `atan2(0, 0) = 0`, a flat-disk normal along +X; callers wanting
/// something else must avoid that input.
pub fn side_normals(base_radius: f32, top_radius: f32, height: f32, sector_count: u32) -> Vec<[f32; 3]> {
    let sector_step = 2.0 * PI / sector_count as f32;

    // normal at 0 degrees: tanA = (baseRadius - topRadius) / height
    let z_angle = (base_radius - top_radius).atan2(height);
    let x0 = z_angle.cos();
    let y0 = 0.0_f32;
    let z0 = z_angle.sin();

    (0..=sector_count)
        .map(|i| {
            let a = i as f32 * sector_step;
            [
                a.cos() * x0 - a.sin() * y0,
                a.sin() * x0 + a.cos() * y0,
                z0,
            ]
        })
        .collect()
}

/// An immutable cylinder frustum mesh
///
/// Built once from a [`CylinderConfig`] by [`CylinderMesh::build`]; every
/// parameter change means building a new value. The index buffer refers to
/// a single vertex indexing space shared by `vertices`, `normals` and
/// `tex_coords`, and the `interleaved` array repeats the same vertices as
/// tightly packed position/normal/texcoord groups of 8 floats.
#[derive(Debug, Clone, PartialEq)]
pub struct CylinderMesh {
    config: CylinderConfig,
    vertices: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    tex_coords: Vec<[f32; 2]>,
    indices: Vec<u32>,
    line_indices: Vec<u32>,
    interleaved: Vec<f32>,
    base_index: u32,
    top_index: u32,
}

impl Default for CylinderMesh {
    fn default() -> Self {
        Self::build(&CylinderConfig::default())
    }
}

impl CylinderMesh {
    /// Build a mesh from the given configuration
    ///
    /// Pure function: identical configs produce identical meshes. The
    /// config is clamped first, so the effective tessellation may differ
    /// from the requested one (query it via [`CylinderMesh::config`]).
    pub fn build(config: &CylinderConfig) -> Self {
        let config = config.clamped();
        let sectors = config.sector_count;
        let stacks = config.stack_count;
        let base_radius = config.base_radius;
        let top_radius = config.top_radius;
        let height = config.height;

        let unit_circle = unit_circle_vertices(sectors);
        let side_normals = side_normals(base_radius, top_radius, height, sectors);

        let ring = sectors as usize + 1;
        let vertex_count = (stacks as usize + 1) * ring + 2 * ring;
        let mut vertices = Vec::with_capacity(vertex_count);
        let mut normals = Vec::with_capacity(vertex_count);
        let mut tex_coords = Vec::with_capacity(vertex_count);

        // side rings, bottom to top; radius lerps base -> top, texture v
        // runs 1 at the bottom to 0 at the top
        for i in 0..=stacks {
            let f = i as f32 / stacks as f32;
            let z = -height * 0.5 + f * height;
            let radius = base_radius + f * (top_radius - base_radius);
            let v = 1.0 - f;

            for j in 0..=sectors {
                let [x, y, _] = unit_circle[j as usize];
                vertices.push([x * radius, y * radius, z]);
                normals.push(side_normals[j as usize]);
                tex_coords.push([j as f32 / sectors as f32, v]);
            }
        }

        // base cap: center vertex then one ring vertex per sector. The
        // texcoord is flipped horizontally so the cap is not mirrored when
        // viewed from below.
        let base_vertex_index = vertices.len() as u32;
        let z = -height * 0.5;
        vertices.push([0.0, 0.0, z]);
        normals.push([0.0, 0.0, -1.0]);
        tex_coords.push([0.5, 0.5]);
        for j in 0..sectors {
            let [x, y, _] = unit_circle[j as usize];
            vertices.push([x * base_radius, y * base_radius, z]);
            normals.push([0.0, 0.0, -1.0]);
            tex_coords.push([-x * 0.5 + 0.5, -y * 0.5 + 0.5]);
        }

        // top cap: same fan, no horizontal flip
        let top_vertex_index = vertices.len() as u32;
        let z = height * 0.5;
        vertices.push([0.0, 0.0, z]);
        normals.push([0.0, 0.0, 1.0]);
        tex_coords.push([0.5, 0.5]);
        for j in 0..sectors {
            let [x, y, _] = unit_circle[j as usize];
            vertices.push([x * top_radius, y * top_radius, z]);
            normals.push([0.0, 0.0, 1.0]);
            tex_coords.push([x * 0.5 + 0.5, -y * 0.5 + 0.5]);
        }

        // side triangles, two per quad, wound for outward-facing normals,
        // plus the wireframe overlay edges
        let mut indices = Vec::with_capacity((6 * stacks * sectors + 6 * sectors) as usize);
        let mut line_indices = Vec::with_capacity((4 * stacks * sectors + 2 * sectors) as usize);
        for i in 0..stacks {
            let mut k1 = i * (sectors + 1); // beginning of current ring
            let mut k2 = k1 + sectors + 1; // beginning of next ring

            for _ in 0..sectors {
                indices.extend_from_slice(&[k1, k1 + 1, k2]);
                indices.extend_from_slice(&[k2, k1 + 1, k2 + 1]);

                // vertical edge for every stack, horizontal edge at the top
                // of every quad; the very first ring is only reachable from
                // the k1 side, so emit it once on stack 0
                line_indices.extend_from_slice(&[k1, k2]);
                line_indices.extend_from_slice(&[k2, k2 + 1]);
                if i == 0 {
                    line_indices.extend_from_slice(&[k1, k1 + 1]);
                }

                k1 += 1;
                k2 += 1;
            }
        }

        // base cap fan; the last sector wraps back to the first ring vertex
        // instead of running past the end. Winding is reversed relative to
        // the top cap so the base faces downward.
        let base_index = indices.len() as u32;
        for i in 0..sectors {
            let k = base_vertex_index + 1 + i;
            if i < sectors - 1 {
                indices.extend_from_slice(&[base_vertex_index, k + 1, k]);
            } else {
                indices.extend_from_slice(&[base_vertex_index, base_vertex_index + 1, k]);
            }
        }

        let top_index = indices.len() as u32;
        for i in 0..sectors {
            let k = top_vertex_index + 1 + i;
            if i < sectors - 1 {
                indices.extend_from_slice(&[top_vertex_index, k, k + 1]);
            } else {
                indices.extend_from_slice(&[top_vertex_index, k, top_vertex_index + 1]);
            }
        }

        let interleaved = interleave(&vertices, &normals, &tex_coords);

        Self {
            config,
            vertices,
            normals,
            tex_coords,
            indices,
            line_indices,
            interleaved,
            base_index,
            top_index,
        }
    }

    /// Rebuild only if `config` differs from the one this mesh was built from
    ///
    /// The comparison uses the clamped config, so requesting `sector_count:
    /// 1` on a mesh already built with 3 sectors is a no-op.
    pub fn rebuild(&self, config: &CylinderConfig) -> Self {
        if config.clamped() == self.config {
            self.clone()
        } else {
            Self::build(config)
        }
    }

    /// The clamped configuration this mesh was built from
    pub fn config(&self) -> &CylinderConfig {
        &self.config
    }

    /// Vertex positions, one `[x, y, z]` per vertex
    pub fn vertices(&self) -> &[[f32; 3]] {
        &self.vertices
    }

    /// Vertex normals, same indexing as [`CylinderMesh::vertices`]
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    /// Texture coordinates, same indexing as [`CylinderMesh::vertices`]
    pub fn tex_coords(&self) -> &[[f32; 2]] {
        &self.tex_coords
    }

    /// Triangle indices: side region, then base cap, then top cap
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Wireframe line-list indices (pairs)
    pub fn line_indices(&self) -> &[u32] {
        &self.line_indices
    }

    /// Interleaved vertex data: 8 floats (position, normal, texcoord) per
    /// vertex, same vertex order as [`CylinderMesh::vertices`]
    pub fn interleaved(&self) -> &[f32] {
        &self.interleaved
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Number of normals (always equal to the vertex count)
    pub fn normal_count(&self) -> u32 {
        self.normals.len() as u32
    }

    /// Number of texture coordinate pairs
    pub fn tex_coord_count(&self) -> u32 {
        self.tex_coords.len() as u32
    }

    /// Number of triangle indices
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Number of wireframe indices
    pub fn line_index_count(&self) -> u32 {
        self.line_indices.len() as u32
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> u32 {
        self.index_count() / 3
    }

    /// Size of the position data in bytes
    pub fn vertex_size(&self) -> usize {
        self.vertices.len() * std::mem::size_of::<[f32; 3]>()
    }

    /// Size of the normal data in bytes
    pub fn normal_size(&self) -> usize {
        self.normals.len() * std::mem::size_of::<[f32; 3]>()
    }

    /// Size of the texture coordinate data in bytes
    pub fn tex_coord_size(&self) -> usize {
        self.tex_coords.len() * std::mem::size_of::<[f32; 2]>()
    }

    /// Size of the index data in bytes
    pub fn index_size(&self) -> usize {
        self.indices.len() * std::mem::size_of::<u32>()
    }

    /// Size of the wireframe index data in bytes
    pub fn line_index_size(&self) -> usize {
        self.line_indices.len() * std::mem::size_of::<u32>()
    }

    /// Number of interleaved vertices (same as the vertex count)
    pub fn interleaved_vertex_count(&self) -> u32 {
        self.vertex_count()
    }

    /// Size of the interleaved data in bytes
    pub fn interleaved_size(&self) -> usize {
        self.interleaved.len() * std::mem::size_of::<f32>()
    }

    /// Bytes between consecutive interleaved vertices (always 32)
    pub fn interleaved_stride(&self) -> u32 {
        INTERLEAVED_STRIDE
    }

    /// Number of indices in the side region
    pub fn side_index_count(&self) -> u32 {
        self.base_index
    }

    /// Number of indices in the base cap region
    ///
    /// Base and top caps always hold the same number of triangles, so the
    /// span from `base_index` to the end splits evenly between them.
    pub fn base_index_count(&self) -> u32 {
        (self.index_count() - self.base_index) / 2
    }

    /// Number of indices in the top cap region
    pub fn top_index_count(&self) -> u32 {
        (self.index_count() - self.base_index) / 2
    }

    /// Offset of the side region within [`CylinderMesh::indices`]
    pub fn side_start_index(&self) -> u32 {
        0
    }

    /// Offset of the base cap region within [`CylinderMesh::indices`]
    pub fn base_start_index(&self) -> u32 {
        self.base_index
    }

    /// Offset of the top cap region within [`CylinderMesh::indices`]
    pub fn top_start_index(&self) -> u32 {
        self.top_index
    }
}

/// Pack per-attribute arrays into one position/normal/texcoord buffer
fn interleave(
    vertices: &[[f32; 3]],
    normals: &[[f32; 3]],
    tex_coords: &[[f32; 2]],
) -> Vec<f32> {
    let mut interleaved = Vec::with_capacity(vertices.len() * FLOATS_PER_VERTEX);
    for ((position, normal), tex_coord) in vertices.iter().zip(normals).zip(tex_coords) {
        interleaved.extend_from_slice(position);
        interleaved.extend_from_slice(normal);
        interleaved.extend_from_slice(tex_coord);
    }
    interleaved
}
