use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info, warn};

use cap_london_church::config::Config;
use cap_london_church::contact::LogSink;
use cap_london_church::i18n::{BundleCache, BundleValidator, Locale, LocaleRegistry};
use cap_london_church::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cap_london_church=info".parse()?),
        )
        .init();

    info!("Starting CAP London Church website");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Load translation bundles; the default locale's bundle must be present
    let registry = LocaleRegistry::get();
    let (bundles, report) = BundleCache::load(&config.messages_dir, registry)?;
    info!(
        "Loaded {} locale bundle(s), {} serving the '{}' fallback",
        report.loaded.len(),
        report.fell_back.len(),
        Locale::default_locale()
    );

    // Check required keys before serving anything; a missing key would
    // otherwise surface as a blank section in production
    let validation = BundleValidator::validate_cache(&bundles, registry);
    for warning in &validation.warnings {
        warn!("{}", warning);
    }
    if validation.has_errors() {
        for failure in &validation.errors {
            error!("{}", failure);
        }
        anyhow::bail!("translation bundles failed validation; refusing to start");
    }
    info!("✓ Translation bundles validated");

    let state = AppState {
        config: Arc::new(config),
        bundles: Arc::new(bundles),
        contact_sink: Arc::new(LogSink),
    };

    server::serve(state).await
}
