//! Axis-aligned running bounds of the points stored under an octree node.

use glam::Vec3;

/// Single-precision axis-aligned bounding box.
///
/// Grows as points are inserted below a node and never shrinks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb3 {
	/// Minimum corner (inclusive).
	pub min: Vec3,
	/// Maximum corner (inclusive).
	pub max: Vec3,
}

impl Aabb3 {
	/// Create a new AABB from min and max corners.
	///
	/// # Panics
	/// Debug-asserts that min <= max on all axes.
	pub fn new(min: Vec3, max: Vec3) -> Self {
		debug_assert!(
			min.x <= max.x && min.y <= max.y && min.z <= max.z,
			"AABB min must be <= max on all axes"
		);
		Self { min, max }
	}

	/// Degenerate box containing a single point.
	#[inline]
	pub fn at_point(point: Vec3) -> Self {
		Self {
			min: point,
			max: point,
		}
	}

	/// Grow the box to include `point`.
	#[inline]
	pub fn expand(&mut self, point: Vec3) {
		self.min = self.min.min(point);
		self.max = self.max.max(point);
	}

	/// Check if this AABB contains a point.
	#[inline]
	pub fn contains_point(&self, point: Vec3) -> bool {
		point.x >= self.min.x
			&& point.x <= self.max.x
			&& point.y >= self.min.y
			&& point.y <= self.max.y
			&& point.z >= self.min.z
			&& point.z <= self.max.z
	}

	/// Sibling visit test used by nearest-neighbor search.
	///
	/// True when any of the six edge planes lies closer than `dist_sq` along
	/// its own axis, i.e. any of `(q.a - max.a)²` or `(q.a - min.a)²` is
	/// strictly below `dist_sq`. This is not the point-to-box distance: an
	/// axis where `query` sits between `min` and `max` contributes no zero
	/// term, so a box wide relative to `dist_sq` can be rejected while
	/// holding `query`.
	#[inline]
	pub fn loosely_within(&self, query: Vec3, dist_sq: f32) -> bool {
		let to_max = query - self.max;
		let to_min = query - self.min;
		to_max.x * to_max.x < dist_sq
			|| to_min.x * to_min.x < dist_sq
			|| to_max.y * to_max.y < dist_sq
			|| to_min.y * to_min.y < dist_sq
			|| to_max.z * to_max.z < dist_sq
			|| to_min.z * to_min.z < dist_sq
	}
}
