//! LookupConfig - root cell placement and tier sizes for the dispatcher.

use glam::Vec3;

use crate::constants::{COARSE_COUNT, DEFAULT_ROOT_WIDTH, FINE_COUNT};
use crate::error::LookupError;
use crate::lookup::Tier;

/// Configuration for building [`NormalLookups`](crate::NormalLookups).
///
/// Both trees share the same root cell. The coarse tree indexes table entries
/// `0..coarse_count`, the fine tree `0..fine_count`.
#[derive(Clone, Debug, PartialEq)]
pub struct LookupConfig {
  /// Full side length of the root cell.
  pub root_width: f32,

  /// Center of the root cell.
  pub root_center: Vec3,

  /// Leading table entries inserted into the coarse tree.
  pub coarse_count: usize,

  /// Leading table entries inserted into the fine tree.
  pub fine_count: usize,
}

impl LookupConfig {
  /// Config with the default root cell and custom tier sizes.
  pub fn with_counts(coarse_count: usize, fine_count: usize) -> Self {
    Self {
      coarse_count,
      fine_count,
      ..Self::default()
    }
  }

  /// Number of table entries the given tier indexes.
  #[inline]
  pub fn tier_len(&self, tier: Tier) -> usize {
    match tier {
      Tier::Coarse => self.coarse_count,
      Tier::Fine => self.fine_count,
    }
  }

  /// Table entries a vocabulary must provide to build both tiers.
  #[inline]
  pub fn required_len(&self) -> usize {
    self.coarse_count.max(self.fine_count)
  }

  /// Check the config describes a buildable pair of trees.
  pub fn validate(&self) -> Result<(), LookupError> {
    if !self.root_width.is_finite() || self.root_width <= 0.0 {
      return Err(LookupError::InvalidConfig(
        "root_width must be finite and positive",
      ));
    }
    if !self.root_center.is_finite() {
      return Err(LookupError::InvalidConfig("root_center must be finite"));
    }
    if self.coarse_count == 0 {
      return Err(LookupError::InvalidConfig("coarse_count must be non-zero"));
    }
    if self.coarse_count > self.fine_count {
      return Err(LookupError::InvalidConfig(
        "coarse_count must not exceed fine_count",
      ));
    }
    if self.fine_count > u32::MAX as usize {
      return Err(LookupError::InvalidConfig("fine_count must fit in u32"));
    }
    Ok(())
  }
}

impl Default for LookupConfig {
  fn default() -> Self {
    Self {
      root_width: DEFAULT_ROOT_WIDTH,
      root_center: Vec3::ZERO,
      coarse_count: COARSE_COUNT,
      fine_count: FINE_COUNT,
    }
  }
}
