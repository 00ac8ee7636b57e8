//! progressive_normals - compress unit normals to small integer codes
//!
//! Normals are quantized against a fixed, ordered table of directions whose
//! every prefix is itself a well-spread covering of the sphere. A coarse
//! octree over the first 128 entries answers most lookups; when its best
//! match is not within the requested precision, a fine octree over all 32768
//! entries is consulted.
//!
//! # Features
//!
//! - **Point octree**: insert-only, splits leaves at 32 points, prunes
//!   siblings by their running bounding boxes
//! - **Two-tier lookups**: [`NormalLookups`] owns the coarse and fine trees
//!   and reports which tier produced each index
//! - **Table tooling**: farthest-point progressive table generation and a
//!   plain `x, y, z` text format
//!
//! # Example
//!
//! ```ignore
//! use glam::Vec3;
//! use progressive_normals::{NormalLookups, NormalTable, LookupConfig, Tier};
//!
//! let table = NormalTable::load("normals.csv")?;
//! let lookups = NormalLookups::build(&table, LookupConfig::default())?;
//!
//! let closest = lookups.find_closest(Vec3::new(0.0, 1.0, 0.0), 0.1);
//! match closest.tier {
//!     Tier::Coarse => println!("7-bit code {}", closest.index),
//!     Tier::Fine => println!("15-bit code {}", closest.index),
//! }
//! ```

pub mod config;
pub mod constants;
pub mod error;

pub use config::LookupConfig;
pub use constants::{COARSE_COUNT, DEFAULT_ROOT_WIDTH, FINE_COUNT, MAX_LEAF_POINTS};
pub use error::{GenerateError, LookupError, TableError};

// Point octree with bounding-box pruning
pub mod octree;
pub use octree::{Aabb3, Nearest, OctreeNode, OctreeStats};

// Vocabulary provider and its text table format
pub mod table;
pub mod vocabulary;
pub use table::NormalTable;
pub use vocabulary::Vocabulary;

// Offline progressive table generation
pub mod generator;
pub use generator::{generate_table, GeneratorConfig};

// Coarse/fine dispatch
pub mod lookup;
pub use lookup::{ClosestNormal, NormalLookups, Tier};

pub mod metrics;
