//! Catacomb Scene Renderer Data Layer
//!
//! GPU-facing data preparation for the catacomb demo. This crate describes
//! buffer layouts and stages CPU-side data; it deliberately stops at the
//! handoff boundary and never creates windows, pipelines or GPU resources.
//!
//! # Module Structure
//!
//! ```text
//! catacomb-renderer/
//! ├── vertex.rs    # Vertex formats (SceneVertex, QuadVertex) + wgpu layouts
//! ├── mesh.rs      # CPU staging buffers and sub-range draw descriptors
//! ├── camera.rs    # First-person fly camera + uniform
//! ├── light.rs     # Point-light uniform packing
//! ├── config.rs    # Renderer configuration (HDR, viewport, camera)
//! └── texture.rs   # Image decode to RGBA8 pixel data
//! ```

pub mod camera;
pub mod config;
pub mod light;
pub mod mesh;
pub mod texture;
pub mod vertex;

pub use camera::{CameraUniform, FlyCamera, MoveDirection};
pub use config::{CameraConfig, HdrConfig, RendererConfig, ViewportConfig};
pub use light::{LightsUniform, MAX_LIGHTS};
pub use mesh::{DrawRanges, IndexRange, MeshBuffers};
pub use texture::{TextureData, TextureError};
pub use vertex::{FULLSCREEN_QUAD, QuadVertex, SceneVertex};
