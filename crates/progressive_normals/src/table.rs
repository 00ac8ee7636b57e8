//! NormalTable - owned progressive table and its plain text format.
//!
//! # Format
//!
//! One normal per line, components separated by commas:
//!
//! ```text
//! 0, 0, 0
//! 1, 0, 0
//! 0.70710677, -0.70710677, 0
//! ```
//!
//! Components are written with the shortest representation that parses back
//! to the same `f32`. Blank lines are ignored on read.

use std::fmt::Write as _;
use std::path::Path;

use glam::Vec3;

use crate::error::TableError;
use crate::vocabulary::Vocabulary;

/// Ordered table of normals. Index `i` is the code for entry `i`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NormalTable {
  normals: Vec<Vec3>,
}

impl NormalTable {
  /// Wrap an ordered list of normals.
  pub fn new(normals: Vec<Vec3>) -> Self {
    Self { normals }
  }

  /// Number of normals.
  pub fn len(&self) -> usize {
    self.normals.len()
  }

  /// Check if empty.
  pub fn is_empty(&self) -> bool {
    self.normals.is_empty()
  }

  /// Normals in table order.
  pub fn as_slice(&self) -> &[Vec3] {
    &self.normals
  }

  /// Normal at `index`, or `None` past the end.
  pub fn get_checked(&self, index: usize) -> Option<Vec3> {
    self.normals.as_slice().get(index).copied()
  }

  /// The leading `len` normals (clamped to the table length).
  pub fn prefix(&self, len: usize) -> &[Vec3] {
    &self.normals[..len.min(self.normals.len())]
  }

  /// Consume the table, returning its normals.
  pub fn into_inner(self) -> Vec<Vec3> {
    self.normals
  }

  /// Parse the text format.
  pub fn from_csv_str(text: &str) -> Result<Self, TableError> {
    let mut normals = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
      let line = line.trim();
      if line.is_empty() {
        continue;
      }
      let line_no = line_idx + 1;

      let mut components = [0.0f32; 3];
      let mut found = 0;
      for value in line.split(',') {
        let value = value.trim();
        if found < 3 {
          components[found] = value.parse().map_err(|_| TableError::Parse {
            line: line_no,
            value: value.to_string(),
          })?;
        }
        found += 1;
      }
      if found != 3 {
        return Err(TableError::ComponentCount {
          line: line_no,
          found,
        });
      }

      normals.push(Vec3::from_array(components));
    }

    Ok(Self { normals })
  }

  /// Render the text format, one newline-terminated line per normal.
  pub fn to_csv_string(&self) -> String {
    let mut out = String::with_capacity(self.normals.len() * 32);
    for v in &self.normals {
      // Writing to a String cannot fail
      let _ = writeln!(out, "{}, {}, {}", v.x, v.y, v.z);
    }
    out
  }

  /// Read a table file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
    let text = std::fs::read_to_string(path)?;
    Self::from_csv_str(&text)
  }

  /// Write a table file, replacing any existing one.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TableError> {
    std::fs::write(path, self.to_csv_string())?;
    Ok(())
  }
}

impl Vocabulary for NormalTable {
  #[inline]
  fn count(&self) -> usize {
    self.normals.len()
  }

  #[inline]
  fn get(&self, index: usize) -> Vec3 {
    self.normals[index]
  }
}

impl From<Vec<Vec3>> for NormalTable {
  fn from(normals: Vec<Vec3>) -> Self {
    Self { normals }
  }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;
