//! Validate the translation bundles without starting the server.
//!
//! Exits non-zero if the default bundle cannot be loaded, any locale fell
//! back to the default, or required keys are missing. Intended for CI and
//! pre-deploy checks.

use anyhow::Result;
use tracing::{error, info, warn};

use cap_london_church::config::Config;
use cap_london_church::i18n::{BundleCache, BundleValidator, LocaleRegistry};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let registry = LocaleRegistry::get();

    let (bundles, report) = BundleCache::load(&config.messages_dir, registry)?;
    if !report.fell_back.is_empty() {
        anyhow::bail!(
            "{} locale bundle(s) failed to load: {:?}",
            report.fell_back.len(),
            report.fell_back
        );
    }

    let validation = BundleValidator::validate_cache(&bundles, registry);
    for warning in &validation.warnings {
        warn!("{}", warning);
    }
    if validation.has_errors() {
        for failure in &validation.errors {
            error!("{}", failure);
        }
        anyhow::bail!("{} missing or blank key(s)", validation.errors.len());
    }

    info!(
        "✓ All {} locale bundle(s) are complete",
        report.loaded.len()
    );
    Ok(())
}
