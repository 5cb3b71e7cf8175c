//! Per-locale bundle loading with default-locale fallback.
//!
//! Bundles are loaded once at startup into an explicit `BundleCache` that is
//! owned by the application state and shared read-only between requests. A
//! locale whose resource is missing or corrupt falls back to the default
//! locale's bundle; if the default bundle itself cannot be loaded there is
//! nothing left to serve and startup must fail.

use crate::i18n::{BundleError, BundleMetrics, Locale, LocaleRegistry, StringBundle};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

/// Which locales loaded cleanly and which fell back to the default bundle.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Locales whose own resource loaded successfully
    pub loaded: Vec<Locale>,

    /// Locales now served from the default locale's bundle
    pub fell_back: Vec<Locale>,
}

/// Read-only cache of string bundles, one per enabled locale.
///
/// Constructed once at startup and shared behind an `Arc`. Bundles are
/// immutable after load, so the cache can be read from any request handler
/// without locking.
#[derive(Debug)]
pub struct BundleCache {
    default_locale: Locale,
    default_bundle: Arc<StringBundle>,
    bundles: HashMap<Locale, Arc<StringBundle>>,
}

impl BundleCache {
    /// Load every enabled locale's bundle from `dir`.
    ///
    /// A locale whose resource fails to load is logged once, recorded in the
    /// returned report and mapped to the default locale's bundle. A failure
    /// to load the default locale's bundle is returned as
    /// `BundleError::DefaultUnavailable`: with no fallback left, the process
    /// would serve blank pages and must not start.
    pub fn load(dir: &Path, registry: &LocaleRegistry) -> Result<(Self, LoadReport), BundleError> {
        let default_locale = Locale::default_locale();
        let default_bundle = match load_bundle(dir, default_locale) {
            Ok(bundle) => Arc::new(bundle),
            Err(source) => {
                return Err(BundleError::DefaultUnavailable {
                    locale: default_locale.code(),
                    source: Box::new(source),
                })
            }
        };

        let mut bundles = HashMap::new();
        let mut report = LoadReport::default();

        for config in registry.list_enabled() {
            let Ok(locale) = Locale::from_code(config.code) else {
                continue;
            };

            if locale == default_locale {
                bundles.insert(locale, Arc::clone(&default_bundle));
                report.loaded.push(locale);
                continue;
            }

            match load_bundle(dir, locale) {
                Ok(bundle) => {
                    info!("Loaded '{}' bundle ({} keys)", locale, bundle.len());
                    bundles.insert(locale, Arc::new(bundle));
                    report.loaded.push(locale);
                }
                Err(e) => {
                    error!(
                        "Failed to load '{}' bundle, falling back to '{}': {}",
                        locale, default_locale, e
                    );
                    BundleMetrics::global().record_fallback();
                    bundles.insert(locale, Arc::clone(&default_bundle));
                    report.fell_back.push(locale);
                }
            }
        }

        Ok((
            Self {
                default_locale,
                default_bundle,
                bundles,
            },
            report,
        ))
    }

    /// Get the bundle for a locale.
    ///
    /// Infallible after construction: every enabled locale has an entry, and
    /// anything unexpected is answered with the default bundle.
    pub fn bundle(&self, locale: Locale) -> Arc<StringBundle> {
        self.bundles
            .get(&locale)
            .cloned()
            .unwrap_or_else(|| Arc::clone(&self.default_bundle))
    }

    /// Get the default locale's bundle.
    pub fn default_bundle(&self) -> Arc<StringBundle> {
        Arc::clone(&self.default_bundle)
    }

    /// The default locale this cache falls back to.
    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Locales with an entry in the cache.
    pub fn locales(&self) -> Vec<Locale> {
        self.bundles.keys().copied().collect()
    }
}

/// Load and flatten the bundle resource for a single locale.
///
/// Reads `{dir}/{locale}.json`, parses it and flattens it into dotted keys.
pub fn load_bundle(dir: &Path, locale: Locale) -> Result<StringBundle, BundleError> {
    let path = dir.join(format!("{}.json", locale.code()));
    let label = path.display().to_string();

    let raw = std::fs::read_to_string(&path).map_err(|source| BundleError::Io {
        path: label.clone(),
        source,
    })?;

    let root: Value = serde_json::from_str(&raw).map_err(|source| BundleError::Parse {
        path: label.clone(),
        source,
    })?;

    StringBundle::from_json(&label, &root)
}
