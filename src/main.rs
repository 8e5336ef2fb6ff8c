use anyhow::{bail, Result};
use piwik_i18n_export::allowlist::AllowList;
use piwik_i18n_export::api::PiwikClient;
use piwik_i18n_export::config::Config;
use piwik_i18n_export::export::Exporter;
use tracing::{info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file (optional)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("piwik_i18n_export=info".parse()?),
        )
        .init();

    info!("Starting translation export");

    // Load configuration from environment
    let config = Config::from_env()?;
    info!(
        "Exporting from {} into {}",
        config.api_url,
        config.output_dir.display()
    );

    let client = PiwikClient::new(&config)?;
    let summary = Exporter::new(&config, client, AllowList::get()).run().await?;

    if !summary.is_complete() {
        for skipped in &summary.skipped {
            warn!("✗ {} ({}): {}", skipped.language, skipped.kind, skipped.reason);
        }
        bail!(
            "{} of {} languages could not be exported",
            summary.skipped.len(),
            summary.skipped.len() + summary.written.len()
        );
    }

    info!("✓ Exported {} language files", summary.written.len());
    Ok(())
}
