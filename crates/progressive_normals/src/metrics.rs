//! Dispatch counters for normal lookups.
//!
//! Feature-gated and runtime-toggled to ensure zero overhead when disabled.
//!
//! # Usage
//!
//! ```ignore
//! use progressive_normals::metrics::COLLECT_METRICS;
//!
//! // Compile with --features metrics
//! // Runtime toggle:
//! COLLECT_METRICS.store(false, Ordering::Relaxed);
//!
//! let snapshot = lookups.metrics().snapshot();
//! println!("{:.1}% of lookups needed the fine tier", snapshot.fine_ratio() * 100.0);
//! ```

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::lookup::Tier;

/// Runtime toggle for metrics collection.
/// Set to false to disable metrics gathering at runtime.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// Check if metrics collection is enabled (both compile-time and runtime).
#[inline]
pub fn is_enabled() -> bool {
    #[cfg(feature = "metrics")]
    {
        COLLECT_METRICS.load(Ordering::Relaxed)
    }
    #[cfg(not(feature = "metrics"))]
    {
        false
    }
}

/// Per-dispatcher counters. Safe to update from concurrent queries.
#[derive(Debug, Default)]
pub struct LookupMetrics {
    coarse_hits: AtomicU64,
    fine_hits: AtomicU64,
    build_time_us: AtomicU64,
}

impl LookupMetrics {
    /// Create zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a lookup answered by `tier`.
    #[inline]
    pub fn record_hit(&self, tier: Tier) {
        if !is_enabled() {
            return;
        }
        let counter = match tier {
            Tier::Coarse => &self.coarse_hits,
            Tier::Fine => &self.fine_hits,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Record how long building both trees took.
    pub fn record_build_time(&self, timing_us: u64) {
        if is_enabled() {
            self.build_time_us.store(timing_us, Ordering::Relaxed);
        }
    }

    /// Zero the hit counters. Build time is kept.
    pub fn reset(&self) {
        self.coarse_hits.store(0, Ordering::Relaxed);
        self.fine_hits.store(0, Ordering::Relaxed);
    }

    /// Point-in-time copy of the counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            coarse_hits: self.coarse_hits.load(Ordering::Relaxed),
            fine_hits: self.fine_hits.load(Ordering::Relaxed),
            build_time_us: self.build_time_us.load(Ordering::Relaxed),
        }
    }
}

/// Plain copy of [`LookupMetrics`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Lookups answered by the coarse tier.
    pub coarse_hits: u64,
    /// Lookups that fell through to the fine tier.
    pub fine_hits: u64,
    /// Time spent building both trees, in microseconds.
    pub build_time_us: u64,
}

impl MetricsSnapshot {
    /// Total lookups served.
    pub fn total_lookups(&self) -> u64 {
        self.coarse_hits + self.fine_hits
    }

    /// Fraction of lookups that needed the fine tier.
    pub fn fine_ratio(&self) -> f64 {
        let total = self.total_lookups();
        if total == 0 {
            0.0
        } else {
            self.fine_hits as f64 / total as f64
        }
    }
}

#[cfg(all(test, feature = "metrics"))]
mod tests {
    use super::*;

    #[test]
    fn test_record_hits() {
        let metrics = LookupMetrics::new();
        metrics.record_hit(Tier::Coarse);
        metrics.record_hit(Tier::Coarse);
        metrics.record_hit(Tier::Fine);
        metrics.record_build_time(1500);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.coarse_hits, 2);
        assert_eq!(snapshot.fine_hits, 1);
        assert_eq!(snapshot.total_lookups(), 3);
        assert_eq!(snapshot.build_time_us, 1500);
        assert!((snapshot.fine_ratio() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_reset_keeps_build_time() {
        let metrics = LookupMetrics::new();
        metrics.record_hit(Tier::Fine);
        metrics.record_build_time(42);
        metrics.reset();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.total_lookups(), 0);
        assert_eq!(snapshot.fine_ratio(), 0.0);
        assert_eq!(snapshot.build_time_us, 42);
    }
}
