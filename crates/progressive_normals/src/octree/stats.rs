//! Shape summary of a built octree.

use super::OctreeNode;

/// Node counts and depth of an octree, gathered by a full walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OctreeStats {
	/// Total nodes, root included.
	pub nodes: usize,
	/// Nodes still buffering points (including empty ones).
	pub leaves: usize,
	/// Nodes that have split.
	pub internal_nodes: usize,
	/// Leaves holding no points.
	pub empty_leaves: usize,
	/// Points stored across all leaves.
	pub points: usize,
	/// Deepest leaf, root = 0.
	pub max_depth: usize,
	/// Largest leaf buffer.
	pub max_leaf_points: usize,
}

impl OctreeStats {
	/// Walk `root` and collect its stats.
	pub fn collect(root: &OctreeNode) -> Self {
		let mut stats = Self::default();
		stats.visit(root, 0);
		stats
	}

	fn visit(&mut self, node: &OctreeNode, depth: usize) {
		self.nodes += 1;
		match node.children() {
			Some(children) => {
				self.internal_nodes += 1;
				for child in children.iter() {
					self.visit(child, depth + 1);
				}
			}
			None => {
				let count = node.point_count();
				self.leaves += 1;
				self.points += count;
				if count == 0 {
					self.empty_leaves += 1;
				}
				self.max_depth = self.max_depth.max(depth);
				self.max_leaf_points = self.max_leaf_points.max(count);
			}
		}
	}

	/// Average points per non-empty leaf.
	#[inline]
	pub fn avg_leaf_points(&self) -> f64 {
		let occupied = self.leaves - self.empty_leaves;
		if occupied == 0 {
			0.0
		} else {
			self.points as f64 / occupied as f64
		}
	}
}

impl OctreeNode {
	/// Shape summary of this subtree.
	pub fn stats(&self) -> OctreeStats {
		OctreeStats::collect(self)
	}
}
