//! Point octree for nearest-normal queries.
//!
//! Insert-only and read-after-build: points are bulk inserted, then the tree
//! only answers nearest-neighbor queries. Each node is either a leaf buffering
//! up to [`MAX_LEAF_POINTS`](crate::MAX_LEAF_POINTS) points or an internal
//! node owning exactly eight children. Every node also tracks the running
//! bounds of its subtree so queries can skip siblings with nothing close.
//!
//! # Octant Convention
//!
//! ```text
//! octant = (x > cx) | (y > cy) << 1 | (z > cz) << 2
//! ```
//!
//! Comparisons are strict, so a coordinate equal to the center routes to the
//! lower child on that axis.
//!
//! # Module Structure
//!
//! - [`bounds`]: `Aabb3` - running subtree bounds and the sibling visit test
//! - [`node`]: `OctreeNode` - insertion, octant routing, leaf splitting
//! - [`nearest`]: `Nearest` accumulator and the recursive search
//! - [`stats`]: `OctreeStats` - shape summary for logging and tests

pub mod bounds;
pub mod nearest;
pub mod node;
pub mod stats;

// Re-exports
pub use bounds::Aabb3;
pub use nearest::Nearest;
pub use node::OctreeNode;
pub use stats::OctreeStats;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
