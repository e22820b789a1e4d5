//! Global constants for catacomb-core

/// Minimum number of sectors (angular slices) for cylinder generation
pub const MIN_SECTOR_COUNT: u32 = 3;

/// Minimum number of stacks (axial subdivisions) for cylinder generation
pub const MIN_STACK_COUNT: u32 = 1;

/// Default number of sectors for cylinder generation
pub const DEFAULT_SECTOR_COUNT: u32 = 36;

/// Default number of stacks for cylinder generation
pub const DEFAULT_STACK_COUNT: u32 = 1;

/// Bytes between consecutive interleaved vertices
/// (3 position + 3 normal + 2 texcoord floats)
pub const INTERLEAVED_STRIDE: u32 = 32;

/// Number of floats per interleaved vertex
pub const FLOATS_PER_VERTEX: usize = 8;
