use super::*;

// =========================================================================
// Fibonacci sphere
// =========================================================================

#[test]
fn test_fibonacci_sphere_unit_length() {
  let samples = fibonacci_sphere(1000);
  assert_eq!(samples.len(), 1000);
  for (i, s) in samples.iter().enumerate() {
    assert!(
      (s.length() - 1.0).abs() < 1e-5,
      "Sample {} has length {}",
      i,
      s.length()
    );
  }
}

/// The spiral runs from the +Y pole to the -Y pole.
#[test]
fn test_fibonacci_sphere_poles() {
  let samples = fibonacci_sphere(500);
  assert_eq!(samples[0], Vec3::Y);
  assert_eq!(samples[499].y, -1.0);
  assert!(samples.windows(2).all(|w| w[1].y < w[0].y));
}

#[test]
fn test_fibonacci_sphere_tiny_counts() {
  assert!(fibonacci_sphere(0).is_empty());
  assert_eq!(fibonacci_sphere(1), vec![Vec3::Y]);
}

// =========================================================================
// Generation
// =========================================================================

fn small_config() -> GeneratorConfig {
  GeneratorConfig {
    total: 64,
    samples: 2000,
  }
}

#[test]
fn test_default_config() {
  let config = GeneratorConfig::default();
  assert_eq!(config.total, 32768);
  assert_eq!(config.samples, 32768);
}

#[test]
fn test_seeds_lead_the_table() {
  let table = generate_table(&small_config()).expect("Valid config");
  assert_eq!(table.len(), 64);
  assert_eq!(table.prefix(SEED_NORMALS.len()), &SEED_NORMALS);
}

/// Everything after the seeds is a unit vector, and nothing repeats.
#[test]
fn test_generated_entries_are_distinct_unit_vectors() {
  let table = generate_table(&small_config()).expect("Valid config");
  let normals = table.as_slice();

  for n in &normals[1..] {
    assert!((n.length() - 1.0).abs() < 1e-5);
  }
  for i in 0..normals.len() {
    for j in (i + 1)..normals.len() {
      assert_ne!(normals[i], normals[j], "Entries {} and {} repeat", i, j);
    }
  }
}

/// Each pick is no farther from the table than the previous one.
#[test]
fn test_progress_distances_non_increasing() {
  let mut progress = Vec::new();
  let table = generate_table_with_progress(&small_config(), |p| progress.push(p))
    .expect("Valid config");

  assert_eq!(progress.len(), table.len() - SEED_NORMALS.len());
  for (offset, p) in progress.iter().enumerate() {
    assert_eq!(p.index, SEED_NORMALS.len() + offset);
  }
  for pair in progress.windows(2) {
    assert!(
      pair[1].dist_sq <= pair[0].dist_sq,
      "Distance grew from {} to {} at index {}",
      pair[0].dist_sq,
      pair[1].dist_sq,
      pair[1].index
    );
  }
}

/// The first k entries cover every candidate to within the distance of the
/// entry picked at index k.
#[test]
fn test_prefix_covers_candidates() {
  let config = small_config();
  let mut progress = Vec::new();
  let table = generate_table_with_progress(&config, |p| progress.push(p)).expect("Valid config");

  for k in [SEED_NORMALS.len() + 1, 24, 48] {
    let radius_sq = progress[k - SEED_NORMALS.len()].dist_sq;
    let prefix = table.prefix(k);
    for sample in fibonacci_sphere(config.samples) {
      let closest = prefix
        .iter()
        .map(|n| sample.distance_squared(*n))
        .fold(f32::MAX, f32::min);
      assert!(
        closest <= radius_sq,
        "Prefix {} leaves {:?} uncovered ({} > {})",
        k,
        sample,
        closest,
        radius_sq
      );
    }
  }
}

#[test]
fn test_generation_is_deterministic() {
  let a = generate_table(&small_config()).expect("Valid config");
  let b = generate_table(&small_config()).expect("Valid config");
  assert_eq!(a, b);
}

/// Exactly enough candidates is fine; every one gets used.
#[test]
fn test_uses_every_candidate_when_tight() {
  let config = GeneratorConfig {
    total: SEED_NORMALS.len() + 50,
    samples: 50,
  };
  let table = generate_table(&config).expect("Valid config");
  assert_eq!(table.len(), config.total);

  let mut picked: Vec<Vec3> = table.as_slice()[SEED_NORMALS.len()..].to_vec();
  let mut expected = fibonacci_sphere(50);
  let key = |v: &Vec3| (v.x.to_bits(), v.y.to_bits(), v.z.to_bits());
  picked.sort_by_key(key);
  expected.sort_by_key(key);
  assert_eq!(picked, expected);
}

#[test]
fn test_seed_only_table() {
  let config = GeneratorConfig {
    total: SEED_NORMALS.len(),
    samples: 0,
  };
  let table = generate_table(&config).expect("Valid config");
  assert_eq!(table.as_slice(), &SEED_NORMALS);
}

#[test]
fn test_rejects_too_small_total() {
  let config = GeneratorConfig {
    total: 3,
    samples: 100,
  };
  assert_eq!(
    generate_table(&config),
    Err(GenerateError::TotalBelowSeeds { total: 3, seeds: 7 })
  );
}

#[test]
fn test_rejects_too_few_samples() {
  let config = GeneratorConfig {
    total: 64,
    samples: 10,
  };
  assert_eq!(
    generate_table(&config),
    Err(GenerateError::NotEnoughSamples {
      samples: 10,
      needed: 57
    })
  );
}
