//! Vocabulary provider - the ordered table of directions lookups index into.

use glam::Vec3;

/// Fixed, ordered table of unit vectors.
///
/// Implementations must keep entries stable for their whole lifetime; the
/// dispatcher copies them into its trees once at build time.
pub trait Vocabulary {
  /// Number of entries.
  fn count(&self) -> usize;

  /// Entry at `index`, for `index` in `0..count()`.
  ///
  /// # Panics
  /// May panic when `index` is out of range.
  fn get(&self, index: usize) -> Vec3;
}

impl Vocabulary for [Vec3] {
  #[inline]
  fn count(&self) -> usize {
    self.len()
  }

  #[inline]
  fn get(&self, index: usize) -> Vec3 {
    self[index]
  }
}

impl Vocabulary for Vec<Vec3> {
  #[inline]
  fn count(&self) -> usize {
    self.len()
  }

  #[inline]
  fn get(&self, index: usize) -> Vec3 {
    self[index]
  }
}

impl<const N: usize> Vocabulary for [Vec3; N] {
  #[inline]
  fn count(&self) -> usize {
    N
  }

  #[inline]
  fn get(&self, index: usize) -> Vec3 {
    self[index]
  }
}
