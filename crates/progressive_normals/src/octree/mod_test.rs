use glam::Vec3;

use crate::config::LookupConfig;
use crate::generator::fibonacci_sphere;
use crate::octree::{Nearest, OctreeNode};
use crate::FINE_COUNT;

// =========================================================================
// Full-size tree shape
// =========================================================================

fn build_full() -> (Vec<Vec3>, OctreeNode) {
  let points = fibonacci_sphere(FINE_COUNT);
  let mut root = OctreeNode::root(&LookupConfig::default());
  for (i, point) in points.iter().enumerate() {
    root.insert(*point, i as u32);
  }
  (points, root)
}

/// 32768 sphere points stay shallow: the surface fills cells evenly.
#[test]
fn test_full_table_depth_is_bounded() {
  let (_, root) = build_full();
  let stats = root.stats();

  assert_eq!(stats.points, FINE_COUNT);
  assert_eq!(root.len(), FINE_COUNT);
  assert!(stats.max_leaf_points < 32);
  assert!(
    stats.max_depth <= 10,
    "Unexpected depth {} for a sphere table",
    stats.max_depth
  );
  assert_eq!(stats.nodes, stats.leaves + stats.internal_nodes);
  assert_eq!(stats.nodes, 1 + stats.internal_nodes * 8);
}

/// Root bounds cover exactly the unit sphere samples.
#[test]
fn test_full_table_root_bounds() {
  let (_, root) = build_full();
  let bounds = root.bounds();

  assert_eq!(bounds.max.y, 1.0);
  assert_eq!(bounds.min.y, -1.0);
  assert!(bounds.min.cmpge(Vec3::splat(-1.0)).all());
  assert!(bounds.max.cmple(Vec3::splat(1.0)).all());
}

/// Recall holds across a strided sample of the full table.
#[test]
fn test_full_table_recall() {
  let (points, root) = build_full();
  for i in (0..points.len()).step_by(97) {
    assert_eq!(
      root.nearest(points[i]),
      Some(Nearest::new(0.0, i as u32)),
      "Sample {} not recalled",
      i
    );
  }
}
