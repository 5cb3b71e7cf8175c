//! Bundle lookup metrics and observability.
//!
//! This module tracks how the translation bundles behave in production:
//! lookup hits and misses, and how many locales are being served from the
//! default bundle because their own resource failed to load.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Counters for bundle lookups and load fallbacks.
pub struct BundleMetrics {
    /// Number of lookups that found a string in the bundle
    lookup_hits: AtomicUsize,

    /// Number of lookups for a key the bundle does not contain
    lookup_misses: AtomicUsize,

    /// Number of locales whose bundle fell back to the default at load time
    load_fallbacks: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<BundleMetrics> = OnceLock::new();

impl BundleMetrics {
    /// Create a fresh set of counters.
    pub fn new() -> Self {
        Self {
            lookup_hits: AtomicUsize::new(0),
            lookup_misses: AtomicUsize::new(0),
            load_fallbacks: AtomicUsize::new(0),
        }
    }

    /// Get the global bundle metrics instance.
    pub fn global() -> &'static BundleMetrics {
        METRICS.get_or_init(BundleMetrics::new)
    }

    /// Record a lookup that found its key.
    pub fn record_hit(&self) {
        self.lookup_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup for a missing key.
    pub fn record_miss(&self) {
        self.lookup_misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a locale falling back to the default bundle at load time.
    pub fn record_fallback(&self) {
        self.load_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current lookup hit count.
    pub fn lookup_hits(&self) -> usize {
        self.lookup_hits.load(Ordering::Relaxed)
    }

    /// Get the current lookup miss count.
    pub fn lookup_misses(&self) -> usize {
        self.lookup_misses.load(Ordering::Relaxed)
    }

    /// Get the current load fallback count.
    pub fn load_fallbacks(&self) -> usize {
        self.load_fallbacks.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.lookup_hits();
        let misses = self.lookup_misses();
        let total_lookups = hits + misses;
        let hit_rate = if total_lookups > 0 {
            (hits as f64 / total_lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookup_hits: hits,
            lookup_misses: misses,
            hit_rate,
            load_fallbacks: self.load_fallbacks(),
        }
    }
}

impl Default for BundleMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Metrics report containing current bundle statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of lookups that found a string
    pub lookup_hits: usize,

    /// Number of lookups for missing keys
    pub lookup_misses: usize,

    /// Lookup hit rate as a percentage (0-100)
    pub hit_rate: f64,

    /// Number of locales served from the default bundle
    pub load_fallbacks: usize,
}
