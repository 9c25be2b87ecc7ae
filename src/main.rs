use anyhow::Context;
use clap::Parser;

use launch_dash::config::Cli;
use launch_dash::data::loader::load_file;
use launch_dash::DashboardApp;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.to_config();

    let dataset = load_file(&config.data_path)
        .inspect_err(|e| log::error!("Failed to load dataset: {e}"))
        .with_context(|| format!("loading {}", config.data_path.display()))?;
    log::info!(
        "Loaded {} launches from {} sites, payload {}–{} kg",
        dataset.len(),
        dataset.sites.len(),
        dataset.min_payload,
        dataset.max_payload
    );
    log::debug!("Sites: {:?}", dataset.sites);

    DashboardApp::new(dataset)
        .serve(&config)
        .await
        .with_context(|| format!("serving on {}", config.addr()))
}
