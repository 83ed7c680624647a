//! Entry point for the domain renewer
//!
//! Reads configuration from the environment, renews every domain of every
//! configured account once, and writes the Markdown summary to
//! `GITHUB_STEP_SUMMARY` (or stdout). Logs go to stderr.

use std::process::ExitCode;

use anyhow::Context;
use domain_renewer::{render_report, RenewerConfig, RenewerError, Runner};
use domain_renewer_provider::{create_provider, ProviderType};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize tracing to stderr (stdout may carry the summary)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config = RenewerConfig::from_env()
        .map_err(RenewerError::from)
        .context("Invalid configuration, no renewal attempted")?;

    let provider =
        create_provider(ProviderType::Dnshe, config.provider).map_err(RenewerError::from)?;

    let report = Runner::new(provider, config.accounts).run().await;
    let summary = render_report(&report);
    config.summary.write(&summary).await?;
    Ok(())
}
