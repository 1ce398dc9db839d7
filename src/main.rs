// src/main.rs
//! so2slack: binary entrypoint
//! Parses flags, reads secrets from the environment and runs the poll loop.

use anyhow::Result;
use clap::Parser;

use so2slack::clock::SystemClock;
use so2slack::config::{Cli, Config};
use so2slack::{logging, SlackNotifier, StackExchangeClient, Updater};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    logging::init();

    let cli = Cli::parse();
    let cfg = Config::from_env(cli)?;

    if cfg.so_key.is_none() {
        tracing::info!("SO_KEY not set, running with the anonymous API quota");
    }
    if let Some(addr) = cfg.metrics_addr {
        so2slack::metrics::install_exporter(addr)?;
    }

    let source = StackExchangeClient::new(cfg.so_key);
    let notifier = SlackNotifier::new(cfg.slack_key);
    let mut updater = Updater::new(cfg.settings, source, notifier, SystemClock);

    tokio::select! {
        _ = updater.run() => {}
        res = tokio::signal::ctrl_c() => {
            res?;
            tracing::info!("ctrl-c received, shutting down");
        }
    }
    Ok(())
}
