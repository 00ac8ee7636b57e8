//! NormalLookups - two-tier nearest-normal dispatcher.
//!
//! Owns a coarse tree over the leading `coarse_count` table entries and a
//! fine tree over the leading `fine_count`. Both are built once and never
//! mutated afterwards, so a built dispatcher can be shared across threads by
//! reference without locking.
//!
//! A returned index means nothing without its [`Tier`]: coarse codes and fine
//! codes are sized for different table lengths, so callers must keep the tier
//! alongside the index.

use glam::Vec3;
use web_time::Instant;

use crate::config::LookupConfig;
use crate::error::LookupError;
use crate::metrics::LookupMetrics;
use crate::octree::{Nearest, OctreeNode};
use crate::vocabulary::Vocabulary;

/// Which tree produced a lookup result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
  /// Index into the leading `coarse_count` entries.
  Coarse,
  /// Index into the leading `fine_count` entries.
  Fine,
}

/// Result of [`NormalLookups::find_closest`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosestNormal {
  /// Table index of the chosen normal.
  pub index: u32,
  /// Tier the index belongs to.
  pub tier: Tier,
  /// Squared distance from the query to the chosen normal.
  pub dist_sq: f32,
}

/// Coarse and fine octrees over one progressive table.
#[derive(Debug)]
pub struct NormalLookups {
  config: LookupConfig,
  coarse: OctreeNode,
  fine: OctreeNode,
  metrics: LookupMetrics,
}

impl NormalLookups {
  /// Build both trees from the leading entries of `vocabulary`.
  ///
  /// Entries are inserted in index order. The two trees are built in
  /// parallel; once this returns the dispatcher is frozen.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "lookup::build"))]
  pub fn build<V>(vocabulary: &V, config: LookupConfig) -> Result<Self, LookupError>
  where
    V: Vocabulary + Sync + ?Sized,
  {
    config.validate()?;

    let required = config.required_len();
    let available = vocabulary.count();
    if available < required {
      return Err(LookupError::VocabularyTooSmall {
        required,
        available,
      });
    }

    let start = Instant::now();
    let (coarse, fine) = rayon::join(
      || build_tree(vocabulary, &config, config.coarse_count),
      || build_tree(vocabulary, &config, config.fine_count),
    );
    let build_time_us = start.elapsed().as_micros() as u64;

    #[cfg(feature = "tracing")]
    {
      let coarse_stats = coarse.stats();
      let fine_stats = fine.stats();
      tracing::info!(
        build_time_us,
        coarse_nodes = coarse_stats.nodes,
        coarse_depth = coarse_stats.max_depth,
        fine_nodes = fine_stats.nodes,
        fine_depth = fine_stats.max_depth,
        "built normal lookups"
      );
    }

    let metrics = LookupMetrics::new();
    metrics.record_build_time(build_time_us);

    Ok(Self {
      config,
      coarse,
      fine,
      metrics,
    })
  }

  /// Closest table normal to `normal`.
  ///
  /// The coarse tree is searched first; if its best squared distance is
  /// within `precision²` that coarse index is returned. Otherwise the fine
  /// tree is searched starting from the coarse best, so it only has to beat
  /// that distance. If nothing in the fine tree is strictly closer, the
  /// coarse candidate is returned tagged [`Tier::Fine`]; the coarse entries
  /// are a prefix of the fine ones, so the index is valid in either tier.
  pub fn find_closest(&self, normal: Vec3, precision: f32) -> ClosestNormal {
    let mut best = Nearest::NONE;
    self.coarse.find_nearest(normal, &mut best);

    let tier = if best.dist_sq <= precision * precision {
      Tier::Coarse
    } else {
      self.fine.find_nearest(normal, &mut best);
      Tier::Fine
    };
    self.metrics.record_hit(tier);

    ClosestNormal {
      index: best.index,
      tier,
      dist_sq: best.dist_sq,
    }
  }

  /// Index only; the tier is implied by the index range the caller expects.
  ///
  /// Prefer [`find_closest`](Self::find_closest) unless the caller tracks the
  /// tier some other way.
  #[inline]
  pub fn find_closest_index(&self, normal: Vec3, precision: f32) -> u32 {
    self.find_closest(normal, precision).index
  }

  /// Config the trees were built with.
  pub fn config(&self) -> &LookupConfig {
    &self.config
  }

  /// Tree over the coarse tier.
  pub fn coarse(&self) -> &OctreeNode {
    &self.coarse
  }

  /// Tree over the fine tier.
  pub fn fine(&self) -> &OctreeNode {
    &self.fine
  }

  /// Tree serving `tier`.
  pub fn tree(&self, tier: Tier) -> &OctreeNode {
    match tier {
      Tier::Coarse => &self.coarse,
      Tier::Fine => &self.fine,
    }
  }

  /// Dispatch counters (only populated with the `metrics` feature).
  pub fn metrics(&self) -> &LookupMetrics {
    &self.metrics
  }
}

/// Insert entries `0..count` of `vocabulary` into a fresh root.
fn build_tree<V>(vocabulary: &V, config: &LookupConfig, count: usize) -> OctreeNode
where
  V: Vocabulary + ?Sized,
{
  #[cfg(feature = "tracing")]
  let _span = tracing::info_span!("build_tree", count).entered();

  let mut root = OctreeNode::root(config);
  for index in 0..count {
    root.insert(vocabulary.get(index), index as u32);
  }
  root
}

#[cfg(test)]
#[path = "lookup_test.rs"]
mod lookup_test;
