//! Table sizes and octree tuning constants.
//!
//! The table is indexed with 15 bits at most, so the fine tier covers
//! `1 << 15` normals and the coarse tier the first `1 << 7` of them.

/// Points a leaf buffers before it splits into eight children.
pub const MAX_LEAF_POINTS: usize = 32;

/// Side length of the root cell. Encloses the unit sphere with margin.
pub const DEFAULT_ROOT_WIDTH: f32 = 2.1;

/// Number of leading table entries indexed by the coarse tier.
pub const COARSE_COUNT: usize = 1 << 7;

/// Number of table entries indexed by the fine tier.
pub const FINE_COUNT: usize = 1 << 15;

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
