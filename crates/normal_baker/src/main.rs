//! Progressive normal table baker.
//!
//! Generates the ordered normal table that octree lookups quantize against,
//! and runs ad-hoc lookups against a baked table.
//!
//! Table format: one normal per line, `x, y, z`.

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glam::Vec3;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use progressive_normals::generator::generate_table_with_progress;
use progressive_normals::{NormalLookups, NormalTable, OctreeStats, Tier};

/// Progressive normal table baker.
#[derive(Parser, Debug)]
#[command(name = "bake_normals")]
#[command(about = "Bakes progressive normal tables and quantizes normals against them")]
struct Args {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Generate a progressive normal table.
	Generate {
		/// Output table path.
		#[arg(short, long)]
		output: PathBuf,

		/// Path to configuration TOML file.
		#[arg(short, long)]
		config: Option<PathBuf>,

		/// Table length (overrides config).
		#[arg(long)]
		total: Option<usize>,

		/// Candidate sample count (overrides config).
		#[arg(long)]
		samples: Option<usize>,
	},

	/// Quantize one normal against a baked table.
	Lookup {
		/// Baked table path.
		#[arg(short, long)]
		table: PathBuf,

		/// Path to configuration TOML file.
		#[arg(short, long)]
		config: Option<PathBuf>,

		/// Normal as `x,y,z`. Normalized before lookup.
		#[arg(short, long, value_parser = parse_normal, allow_hyphen_values = true)]
		normal: Vec3,

		/// Accept the coarse tier when within this distance.
		#[arg(short, long, default_value_t = 0.1)]
		precision: f32,
	},

	/// Print octree shape for a baked table.
	Stats {
		/// Baked table path.
		#[arg(short, long)]
		table: PathBuf,

		/// Path to configuration TOML file.
		#[arg(short, long)]
		config: Option<PathBuf>,
	},
}

fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let args = Args::parse();

	match args.command {
		Command::Generate {
			output,
			config,
			total,
			samples,
		} => generate(&output, config.as_deref(), total, samples),
		Command::Lookup {
			table,
			config,
			normal,
			precision,
		} => lookup(&table, config.as_deref(), normal, precision),
		Command::Stats { table, config } => stats(&table, config.as_deref()),
	}
}

fn generate(
	output: &Path,
	config_path: Option<&Path>,
	total: Option<usize>,
	samples: Option<usize>,
) -> Result<()> {
	let config = Config::load_or_default(config_path)?;
	let mut generator = config.generator_config();
	if let Some(total) = total {
		generator.total = total;
	}
	if let Some(samples) = samples {
		generator.samples = samples;
	}

	info!(
		total = generator.total,
		samples = generator.samples,
		"generating normal table"
	);

	let report_every = (generator.total / 64).max(1);
	let table = generate_table_with_progress(&generator, |progress| {
		if progress.index % report_every == 0 || progress.index + 1 == generator.total {
			info!(
				index = progress.index,
				dist_sq = progress.dist_sq,
				"farthest normal"
			);
		}
	})
	.context("Generating normal table")?;

	if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
		std::fs::create_dir_all(parent)
			.with_context(|| format!("Failed to create output dir: {}", parent.display()))?;
	}
	table
		.save(output)
		.with_context(|| format!("Failed to write: {}", output.display()))?;

	info!(normals = table.len(), path = %output.display(), "table written");
	Ok(())
}

fn lookup(table_path: &Path, config_path: Option<&Path>, normal: Vec3, precision: f32) -> Result<()> {
	let (table, lookups) = load_lookups(table_path, config_path)?;

	let query = normal.normalize_or_zero();
	let closest = lookups.find_closest(query, precision);
	let matched = table.as_slice()[closest.index as usize];
	let tier = match closest.tier {
		Tier::Coarse => "coarse",
		Tier::Fine => "fine",
	};

	println!("query:    {}, {}, {}", query.x, query.y, query.z);
	println!("index:    {} ({} tier)", closest.index, tier);
	println!("normal:   {}, {}, {}", matched.x, matched.y, matched.z);
	println!("distance: {}", closest.dist_sq.sqrt());

	Ok(())
}

fn stats(table_path: &Path, config_path: Option<&Path>) -> Result<()> {
	let (_, lookups) = load_lookups(table_path, config_path)?;

	for tier in [Tier::Coarse, Tier::Fine] {
		let stats = lookups.tree(tier).stats();
		print_stats(tier, &stats);
	}
	println!(
		"build time: {} us",
		lookups.metrics().snapshot().build_time_us
	);

	Ok(())
}

fn print_stats(tier: Tier, stats: &OctreeStats) {
	println!("{:?} tree:", tier);
	println!("  points:          {}", stats.points);
	println!(
		"  nodes:           {} ({} internal, {} leaves, {} empty)",
		stats.nodes, stats.internal_nodes, stats.leaves, stats.empty_leaves
	);
	println!("  max depth:       {}", stats.max_depth);
	println!("  max leaf points: {}", stats.max_leaf_points);
	println!("  avg leaf points: {:.2}", stats.avg_leaf_points());
}

fn load_lookups(table_path: &Path, config_path: Option<&Path>) -> Result<(NormalTable, NormalLookups)> {
	let config = Config::load_or_default(config_path)?;
	let table = NormalTable::load(table_path)
		.with_context(|| format!("Failed to read table: {}", table_path.display()))?;
	let lookups = NormalLookups::build(&table, config.lookup_config())
		.with_context(|| format!("Failed to index table: {}", table_path.display()))?;
	Ok((table, lookups))
}

/// Parse `x,y,z` into a vector.
fn parse_normal(value: &str) -> Result<Vec3, String> {
	let components: Vec<&str> = value.split(',').map(str::trim).collect();
	if components.len() != 3 {
		return Err(format!("expected x,y,z but got {:?}", value));
	}
	let mut xyz = [0.0f32; 3];
	for (slot, component) in xyz.iter_mut().zip(&components) {
		*slot = component
			.parse()
			.map_err(|_| format!("invalid component {:?}", component))?;
	}
	Ok(Vec3::from_array(xyz))
}
