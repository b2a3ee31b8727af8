//! LP hedge rebalance runner - Entry Point
//!
//! Reads a position snapshot, computes the hedge and prints the report as
//! JSON on stdout. Logs go to stderr.

use anyhow::Result;
use clap::Parser;
use tracing::info;

/// Compute the perp hedge for a concentrated-liquidity position snapshot
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via LPHEDGE_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,

    /// Position snapshot file path
    #[arg(short, long)]
    snapshot: String,

    /// Sequence value for the request id, overriding the snapshot's
    #[arg(long)]
    sequence: Option<u64>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    lphedge_telemetry::init_logging()?;

    info!("Starting lphedge v{}", env!("CARGO_PKG_VERSION"));

    // Determine config path: CLI arg > LPHEDGE_CONFIG env var > default
    let config_path = args
        .config
        .or_else(|| std::env::var("LPHEDGE_CONFIG").ok())
        .unwrap_or_else(|| "config/default.toml".to_string());

    info!(config_path = %config_path, "Loading configuration");
    let config = lphedge_bot::AppConfig::from_file(&config_path)?;
    info!(
        size_decimals = config.instrument.size_decimals,
        base_decimals = config.instrument.base_decimals,
        slippage_bps = config.sizer.slippage_bps,
        "Configuration loaded"
    );

    let snapshot = lphedge_bot::PositionSnapshot::from_file(&args.snapshot)?;
    let rebalancer = lphedge_bot::Rebalancer::new(config);
    let (_, report) = rebalancer.rebalance(&snapshot, args.sequence)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");

    Ok(())
}
