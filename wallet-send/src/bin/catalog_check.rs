//! Reports message keys missing from a locale catalog
//!
//! Usage: `catalog-check [LOCALE]`. The catalog directory comes from
//! `WALLET_SEND_CATALOG_DIR`; without it only the built-in English catalog
//! can be checked. Missing keys go to stdout, one per line; logs go to stderr.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wallet_send::config::LocaleConfig;
use wallet_send::i18n::Catalog;
use wallet_send::messages;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = LocaleConfig::from_env();
    if let Some(locale) = std::env::args().nth(1) {
        config = config.with_locale(locale);
    }

    let catalog = Catalog::from_config(&config)
        .with_context(|| format!("loading catalog for locale {}", config.locale))?;

    let missing = catalog.missing(messages::ALL);
    if missing.is_empty() {
        tracing::info!(locale = %catalog.locale(), keys = messages::ALL.len(), "catalog complete");
        return Ok(());
    }

    for key in &missing {
        println!("{}", key);
    }
    anyhow::bail!(
        "{} of {} keys missing for locale {}",
        missing.len(),
        messages::ALL.len(),
        catalog.locale()
    )
}
