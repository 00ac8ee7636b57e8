//! Nearest-neighbor search over an [`OctreeNode`].

use glam::Vec3;

use super::node::{Contents, OctreeNode};

/// Best-so-far accumulator threaded through a search.
///
/// Only a strictly smaller distance replaces the current best, so among equal
/// distances the first candidate visited wins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nearest {
  /// Squared Euclidean distance to the best candidate.
  pub dist_sq: f32,
  /// Table index of the best candidate.
  pub index: u32,
}

impl Nearest {
  /// Initial accumulator: maximal distance, index 0.
  pub const NONE: Self = Self {
    dist_sq: f32::MAX,
    index: 0,
  };

  /// Seed an accumulator with a known candidate.
  pub fn new(dist_sq: f32, index: u32) -> Self {
    Self { dist_sq, index }
  }

  /// Record a candidate. Returns true if it became the new best.
  #[inline]
  pub fn offer(&mut self, dist_sq: f32, index: u32) -> bool {
    if dist_sq < self.dist_sq {
      self.dist_sq = dist_sq;
      self.index = index;
      true
    } else {
      false
    }
  }

  /// False while the accumulator still holds the [`Nearest::NONE`] distance.
  #[inline]
  pub fn is_found(&self) -> bool {
    self.dist_sq < f32::MAX
  }
}

impl Default for Nearest {
  fn default() -> Self {
    Self::NONE
  }
}

impl OctreeNode {
  /// Tighten `best` with the closest point to `query` in this subtree.
  ///
  /// Leaves are scanned in insertion order. Internal nodes search the child
  /// `query` routes to first, then every other child in octant order whose
  /// bounds pass [`Aabb3::loosely_within`](super::Aabb3::loosely_within)
  /// against the distance `best` holds at that moment.
  ///
  /// An empty subtree leaves `best` unchanged.
  pub fn find_nearest(&self, query: Vec3, best: &mut Nearest) {
    match &self.contents {
      Contents::Leaf(points) => {
        for &(point, index) in points {
          best.offer(query.distance_squared(point), index);
        }
      }
      Contents::Internal(children) => {
        let preferred = self.octant(query);
        children[preferred].find_nearest(query, best);

        for (octant, child) in children.iter().enumerate() {
          if octant != preferred && child.bounds.loosely_within(query, best.dist_sq) {
            child.find_nearest(query, best);
          }
        }
      }
    }
  }

  /// Closest point to `query`, or `None` for an empty tree.
  pub fn nearest(&self, query: Vec3) -> Option<Nearest> {
    let mut best = Nearest::NONE;
    self.find_nearest(query, &mut best);
    best.is_found().then_some(best)
  }
}

#[cfg(test)]
#[path = "nearest_test.rs"]
mod nearest_test;
