//! Configuration parsing for table baking and lookups.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use progressive_normals::{GeneratorConfig, LookupConfig};

/// Root configuration. Every field is optional in the TOML file.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Table length, seed normals included.
	pub total: usize,
	/// Fibonacci sphere candidates the generator picks from.
	pub samples: usize,
	/// Full side length of the octree root cell.
	pub root_width: f32,
	/// Leading table entries indexed by the coarse tier.
	pub coarse_count: usize,
	/// Leading table entries indexed by the fine tier.
	pub fine_count: usize,
}

impl Default for Config {
	fn default() -> Self {
		let generator = GeneratorConfig::default();
		let lookup = LookupConfig::default();
		Self {
			total: generator.total,
			samples: generator.samples,
			root_width: lookup.root_width,
			coarse_count: lookup.coarse_count,
			fine_count: lookup.fine_count,
		}
	}
}

impl Config {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		let config = Self::from_toml(&content)?;
		Ok(config)
	}

	/// Parse and validate configuration text.
	pub fn from_toml(content: &str) -> Result<Self> {
		let config: Config =
			toml::from_str(content).with_context(|| "Failed to parse config TOML")?;
		config.validate()?;
		Ok(config)
	}

	/// Load `path` if given, defaults otherwise.
	pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
		match path {
			Some(path) => Self::load(path),
			None => Ok(Self::default()),
		}
	}

	fn validate(&self) -> Result<()> {
		if self.total > self.samples + progressive_normals::generator::SEED_NORMALS.len() {
			anyhow::bail!(
				"samples ({}) cannot fill a table of {} normals",
				self.samples,
				self.total
			);
		}
		if self.fine_count > self.total {
			anyhow::bail!(
				"fine_count ({}) exceeds the table size ({})",
				self.fine_count,
				self.total
			);
		}
		self.lookup_config()
			.validate()
			.context("Invalid lookup settings")?;
		Ok(())
	}

	/// Generator settings.
	pub fn generator_config(&self) -> GeneratorConfig {
		GeneratorConfig {
			total: self.total,
			samples: self.samples,
		}
	}

	/// Dispatcher settings.
	pub fn lookup_config(&self) -> LookupConfig {
		LookupConfig {
			root_width: self.root_width,
			coarse_count: self.coarse_count,
			fine_count: self.fine_count,
			..LookupConfig::default()
		}
	}
}
