//! OctreeNode - one cell of the point octree.
//!
//! A node starts as a leaf and becomes internal the moment its buffer reaches
//! [`MAX_LEAF_POINTS`]. The transition is one-way.

use glam::Vec3;

use super::Aabb3;
use crate::config::LookupConfig;
use crate::constants::MAX_LEAF_POINTS;

/// Storage of a node: buffered points or eight owned children.
#[derive(Clone, Debug)]
pub(super) enum Contents {
  /// Points in insertion order, each tagged with its table index.
  Leaf(Vec<(Vec3, u32)>),
  /// Children indexed by octant.
  Internal(Box<[OctreeNode; 8]>),
}

/// Octree cell owning either buffered points or eight children.
///
/// `center` and `width` are fixed at creation. `bounds` starts as the
/// degenerate box at `center` and grows with every point inserted below this
/// node.
#[derive(Clone, Debug)]
pub struct OctreeNode {
  pub(super) center: Vec3,
  pub(super) width: f32,
  pub(super) bounds: Aabb3,
  pub(super) contents: Contents,
}

impl OctreeNode {
  /// Create an empty leaf cell.
  pub fn new(width: f32, center: Vec3) -> Self {
    Self {
      center,
      width,
      bounds: Aabb3::at_point(center),
      contents: Contents::Leaf(Vec::new()),
    }
  }

  /// Create an empty root cell placed per `config`.
  pub fn root(config: &LookupConfig) -> Self {
    Self::new(config.root_width, config.root_center)
  }

  /// Insert a point tagged with its table index.
  ///
  /// Always succeeds. Points outside this cell's width are accepted and routed
  /// by sign like any other, but searches assume the root encloses them.
  ///
  /// More than [`MAX_LEAF_POINTS`] coincident points split without bound:
  /// there is no minimum cell size and no duplicate coalescing.
  pub fn insert(&mut self, point: Vec3, index: u32) {
    self.bounds.expand(point);

    let octant = self.octant(point);
    let full = match &mut self.contents {
      Contents::Leaf(points) => {
        points.push((point, index));
        points.len() == MAX_LEAF_POINTS
      }
      Contents::Internal(children) => {
        children[octant].insert(point, index);
        false
      }
    };

    if full {
      self.split();
    }
  }

  /// Child slot a point routes to, whether or not this node has split.
  ///
  /// - bit 0: `point.x > center.x`
  /// - bit 1: `point.y > center.y`
  /// - bit 2: `point.z > center.z`
  #[inline]
  pub fn octant(&self, point: Vec3) -> usize {
    (point.x > self.center.x) as usize
      | ((point.y > self.center.y) as usize) << 1
      | ((point.z > self.center.z) as usize) << 2
  }

  /// Turn a full leaf into an internal node and rebucket its points.
  fn split(&mut self) {
    let Contents::Leaf(points) = std::mem::replace(&mut self.contents, Contents::Leaf(Vec::new()))
    else {
      return;
    };

    let half_width = self.width * 0.5;
    let quarter_width = self.width * 0.25;
    let center = self.center;
    let mut children: Box<[OctreeNode; 8]> = Box::new(std::array::from_fn(|octant| {
      OctreeNode::new(half_width, center + octant_direction(octant) * quarter_width)
    }));

    for (point, index) in points {
      children[self.octant(point)].insert(point, index);
    }

    self.contents = Contents::Internal(children);
  }

  /// Center of this cell.
  #[inline]
  pub fn center(&self) -> Vec3 {
    self.center
  }

  /// Full side length of this cell.
  #[inline]
  pub fn width(&self) -> f32 {
    self.width
  }

  /// Running bounds of everything inserted below this node.
  #[inline]
  pub fn bounds(&self) -> Aabb3 {
    self.bounds
  }

  /// True until this node splits.
  #[inline]
  pub fn is_leaf(&self) -> bool {
    matches!(self.contents, Contents::Leaf(_))
  }

  /// Points buffered directly in this node (zero once split).
  pub fn point_count(&self) -> usize {
    match &self.contents {
      Contents::Leaf(points) => points.len(),
      Contents::Internal(_) => 0,
    }
  }

  /// Buffered `(point, index)` pairs, empty once split.
  pub fn points(&self) -> &[(Vec3, u32)] {
    match &self.contents {
      Contents::Leaf(points) => points.as_slice(),
      Contents::Internal(_) => &[],
    }
  }

  /// The eight children, if this node has split.
  pub fn children(&self) -> Option<&[OctreeNode; 8]> {
    match &self.contents {
      Contents::Leaf(_) => None,
      Contents::Internal(children) => Some(children),
    }
  }

  /// Total points stored in this subtree.
  pub fn len(&self) -> usize {
    match &self.contents {
      Contents::Leaf(points) => points.len(),
      Contents::Internal(children) => children.iter().map(OctreeNode::len).sum(),
    }
  }

  /// Check if no point was ever inserted.
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// Unit offset direction of a child octant: -1 or +1 per axis.
#[inline]
fn octant_direction(octant: usize) -> Vec3 {
  let sign = |bit: usize| if octant & bit != 0 { 1.0 } else { -1.0 };
  Vec3::new(sign(1), sign(2), sign(4))
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
