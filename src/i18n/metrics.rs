//! Localizer metrics.
//!
//! Counts table builds, language changes, placeholder substitutions and which
//! precedence tier each resolution came from.

use crate::i18n::resolver::ResolutionSource;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters owned by one `Localizer`.
#[derive(Debug, Default)]
pub struct LocalizerMetrics {
    /// Number of resolved tables built
    tables_built: AtomicUsize,

    /// Number of explicit language changes after initialisation
    language_changes: AtomicUsize,

    /// Number of table entries filled with the placeholder
    placeholder_substitutions: AtomicUsize,

    /// Resolutions decided by each tier, indexed by `ResolutionSource::index`
    resolutions: [AtomicUsize; 4],
}

impl LocalizerMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a materialised table and how many entries were placeholders.
    pub fn record_table_built(&self, placeholders: usize) {
        self.tables_built.fetch_add(1, Ordering::Relaxed);
        self.placeholder_substitutions
            .fetch_add(placeholders, Ordering::Relaxed);
    }

    /// Record an explicit language change.
    pub fn record_language_change(&self) {
        self.language_changes.fetch_add(1, Ordering::Relaxed);
    }

    /// Record which tier a resolution came from.
    pub fn record_resolution(&self, source: ResolutionSource) {
        self.resolutions[source.index()].fetch_add(1, Ordering::Relaxed);
    }

    pub fn tables_built(&self) -> usize {
        self.tables_built.load(Ordering::Relaxed)
    }

    pub fn language_changes(&self) -> usize {
        self.language_changes.load(Ordering::Relaxed)
    }

    pub fn placeholder_substitutions(&self) -> usize {
        self.placeholder_substitutions.load(Ordering::Relaxed)
    }

    pub fn resolutions(&self, source: ResolutionSource) -> usize {
        self.resolutions[source.index()].load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let explicit = self.resolutions(ResolutionSource::Explicit);
        let persisted = self.resolutions(ResolutionSource::Persisted);
        let ambient = self.resolutions(ResolutionSource::Ambient);
        let default = self.resolutions(ResolutionSource::Default);
        let total = explicit + persisted + ambient + default;

        let default_fallback_rate = if total > 0 {
            (default as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            tables_built: self.tables_built(),
            language_changes: self.language_changes(),
            placeholder_substitutions: self.placeholder_substitutions(),
            resolved_explicit: explicit,
            resolved_persisted: persisted,
            resolved_ambient: ambient,
            resolved_default: default,
            default_fallback_rate,
        }
    }
}

/// Snapshot of localizer statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub tables_built: usize,
    pub language_changes: usize,
    pub placeholder_substitutions: usize,
    pub resolved_explicit: usize,
    pub resolved_persisted: usize,
    pub resolved_ambient: usize,
    pub resolved_default: usize,

    /// Share of resolutions that fell through to the default language (0-100)
    pub default_fallback_rate: f64,
}
