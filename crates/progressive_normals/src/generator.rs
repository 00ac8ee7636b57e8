//! Progressive table generation by greedy farthest-point sampling.
//!
//! Builds a table whose every prefix is a well-spread covering of the sphere:
//! starting from [`SEED_NORMALS`], each step appends the candidate farthest
//! from everything already in the table. Truncating the result at any length
//! therefore keeps the best coverage available at that size, which is what
//! lets the coarse tier index just the first 128 entries.
//!
//! Candidates come from a Fibonacci sphere. This is a one-off offline step;
//! each step is a data-parallel pass over the remaining candidates.

use std::f32::consts::PI;

use glam::Vec3;
use rayon::prelude::*;

use crate::constants::FINE_COUNT;
use crate::error::GenerateError;
use crate::table::NormalTable;

/// Entries every table starts with: the zero vector, then the six axes.
pub const SEED_NORMALS: [Vec3; 7] = [
  Vec3::ZERO,
  Vec3::X,
  Vec3::Y,
  Vec3::Z,
  Vec3::NEG_X,
  Vec3::NEG_Y,
  Vec3::NEG_Z,
];

/// Table generation parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
  /// Table length, seeds included.
  pub total: usize,
  /// Fibonacci sphere candidates to pick from.
  pub samples: usize,
}

impl Default for GeneratorConfig {
  fn default() -> Self {
    Self {
      total: FINE_COUNT,
      samples: FINE_COUNT,
    }
  }
}

/// One appended entry, reported as generation advances.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Progress {
  /// Table index the entry was written to.
  pub index: usize,
  /// Squared distance from the entry to its closest earlier entry.
  pub dist_sq: f32,
}

/// `samples` points spiralling from +Y to -Y along the golden angle.
pub fn fibonacci_sphere(samples: usize) -> Vec<Vec3> {
  let increment = PI * (3.0 - 5.0f32.sqrt());
  let last = (samples.max(2) - 1) as f32;

  (0..samples)
    .map(|i| {
      let y = 1.0 - (i as f32 / last) * 2.0;
      let radius = (1.0 - y * y).sqrt();
      let phi = increment * i as f32;
      Vec3::new(phi.cos() * radius, y, phi.sin() * radius)
    })
    .collect()
}

/// Generate a progressive table.
pub fn generate_table(config: &GeneratorConfig) -> Result<NormalTable, GenerateError> {
  generate_table_with_progress(config, |_| {})
}

/// Generate a progressive table, reporting each entry after the seeds.
///
/// Each step picks the candidate with the largest squared distance to its
/// closest table entry; on equal distances the earliest candidate in pool
/// order wins. Picked candidates leave the pool by swap-remove, so pool order
/// after the first pick is not sample order.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "generator::generate_table"))]
pub fn generate_table_with_progress<F>(
  config: &GeneratorConfig,
  mut on_progress: F,
) -> Result<NormalTable, GenerateError>
where
  F: FnMut(Progress),
{
  let seeds = SEED_NORMALS.len();
  if config.total < seeds {
    return Err(GenerateError::TotalBelowSeeds {
      total: config.total,
      seeds,
    });
  }
  let needed = config.total - seeds;
  if config.samples < needed {
    return Err(GenerateError::NotEnoughSamples {
      samples: config.samples,
      needed,
    });
  }

  let mut pool = fibonacci_sphere(config.samples);
  let mut normals = Vec::with_capacity(config.total);
  normals.extend_from_slice(&SEED_NORMALS);

  // Squared distance from each candidate to its closest table entry
  let mut closest: Vec<f32> = pool
    .par_iter()
    .map(|sample| {
      SEED_NORMALS
        .iter()
        .map(|seed| sample.distance_squared(*seed))
        .fold(f32::MAX, f32::min)
    })
    .collect();

  while normals.len() < config.total {
    let Some((pick, dist_sq)) = farthest_candidate(&closest) else {
      break;
    };

    let chosen = pool.swap_remove(pick);
    closest.swap_remove(pick);
    normals.push(chosen);

    closest
      .par_iter_mut()
      .zip(pool.par_iter())
      .for_each(|(best, sample)| {
        let d = sample.distance_squared(chosen);
        if d < *best {
          *best = d;
        }
      });

    let index = normals.len() - 1;
    #[cfg(feature = "tracing")]
    tracing::debug!(index, dist_sq, "appended normal");
    on_progress(Progress { index, dist_sq });
  }

  Ok(NormalTable::new(normals))
}

/// Index and distance of the largest entry, lowest index among equals.
fn farthest_candidate(closest: &[f32]) -> Option<(usize, f32)> {
  closest
    .par_iter()
    .copied()
    .enumerate()
    .reduce_with(|a, b| {
      if b.1 > a.1 || (b.1 == a.1 && b.0 < a.0) {
        b
      } else {
        a
      }
    })
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod generator_test;
