//! Fetch → index → check/resolve → report, as one straight-line run.

use anyhow::Context;
use recon_config::ReconConfig;
use recon_core::{Report, build_report};
use recon_source::SourceClient;

use crate::cli::Cli;

/// Load layered configuration and apply command-line overrides.
pub fn load_config(cli: &Cli) -> anyhow::Result<ReconConfig> {
    let mut config = ReconConfig::load_with_dotenv()?;
    apply_overrides(&mut config, cli);
    config.source.validate()?;
    Ok(config)
}

fn apply_overrides(config: &mut ReconConfig, cli: &Cli) {
    if let Some(base_url) = &cli.base_url {
        config.source.base_url.clone_from(base_url);
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.source.timeout_secs = timeout_secs;
    }
    if let Some(sample_size) = cli.sample_size {
        config.report.sample_size = sample_size;
    }
}

/// Fetch all sections and build the report. Any fetch failure aborts the run
/// before a report exists.
pub async fn run(config: &ReconConfig) -> anyhow::Result<Report> {
    let client = SourceClient::new(&config.source)?;
    let data = client
        .fetch_all()
        .await
        .with_context(|| format!("failed to load data from {}", config.source.base()))?;

    tracing::info!(
        drivers = data.drivers.len(),
        vehicles = data.vehicles.len(),
        reservations = data.reservations.len(),
        "datasets loaded"
    );

    Ok(build_report(&data, &config.report.options()))
}
