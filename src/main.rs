mod report;

use anyhow::Result;
use std::io;
use theater_model::{scan_profit, ProfitModel};
use theater_types::Config;
use tracing::{debug, info};

fn main() -> Result<()> {
    // ── Setup ──
    dotenvy::dotenv().ok();

    // stdout carries the report; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .init();

    let config = Config::from_env()?;
    info!(
        low = %config.range.low(),
        high = %config.range.high(),
        step = %config.range.step(),
        prices = %config.range.len(),
        "Configuration loaded"
    );
    debug!(params = ?config.params, format = ?config.report_format, "Model parameters");

    // ── Scan ──
    let model = ProfitModel::new(config.params);
    let result = scan_profit(&config.range, &model);

    // ── Report ──
    let stdout = io::stdout();
    report::write_report(&mut stdout.lock(), &result, config.report_format)?;

    Ok(())
}
