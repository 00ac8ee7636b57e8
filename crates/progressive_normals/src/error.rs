//! Error types for table I/O, table generation, and dispatcher construction.
//!
//! Queries never fail; only the build-time entry points return these.

use thiserror::Error;

/// Errors building a [`NormalLookups`](crate::NormalLookups).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
  #[error("vocabulary has {available} normals but {required} are required")]
  VocabularyTooSmall { required: usize, available: usize },

  #[error("invalid lookup config: {0}")]
  InvalidConfig(&'static str),
}

/// Errors reading or writing a normal table.
#[derive(Debug, Error)]
pub enum TableError {
  #[error("normal table I/O failed: {0}")]
  Io(#[from] std::io::Error),

  #[error("line {line}: invalid component {value:?}")]
  Parse { line: usize, value: String },

  #[error("line {line}: expected 3 components, found {found}")]
  ComponentCount { line: usize, found: usize },
}

/// Errors generating a progressive table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
  #[error("table size {total} is smaller than the {seeds} seed normals")]
  TotalBelowSeeds { total: usize, seeds: usize },

  #[error("{samples} candidate samples cannot fill {needed} table slots")]
  NotEnoughSamples { samples: usize, needed: usize },
}
