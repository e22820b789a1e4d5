//! Geometry core for the catacomb scene demo
//!
//! This crate owns everything that can be computed without touching the GPU:
//!
//! - [`primitive`] - Procedural mesh generation (the parametric cylinder
//!   frustum) and the hand-authored tunnel cube
//! - [`scene`] - The catacomb scene description (lights, tunnel placement,
//!   camera spawn) with RON save/load
//! - [`constants`] - Tessellation minimums and default parameters
//!
//! Mesh builds are pure functions: [`primitive::CylinderMesh::build`] takes a
//! [`primitive::CylinderConfig`] and returns an immutable value. Nothing in
//! this crate holds interior mutability, so built meshes can be handed to a
//! render thread without extra synchronization.

pub mod constants;
pub mod primitive;
pub mod scene;

pub use primitive::{
    CylinderConfig, CylinderMesh, TUNNEL_CUBE_INTERLEAVED, TUNNEL_CUBE_VERTEX_COUNT,
    side_normals, unit_circle_vertices,
};
pub use scene::{CatacombScene, PointLight, SceneError, TunnelPlacement};
