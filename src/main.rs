use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stirr_guide::{config::Config, services::run_conversion};

#[derive(Parser)]
#[command(name = "stirr-guide")]
#[command(version)]
#[command(about = "Converts STIRR guide snapshots into M3U playlists and XMLTV guides")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Snapshot directory (overrides config file)
    #[arg(short, long, value_name = "DIR")]
    snapshot: Option<PathBuf>,

    /// M3U output path (overrides config file)
    #[arg(long, value_name = "FILE")]
    m3u: Option<PathBuf>,

    /// XMLTV output path (overrides config file)
    #[arg(long, value_name = "FILE")]
    xmltv: Option<PathBuf>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("stirr_guide={}", cli.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting stirr-guide v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load_from_file(&cli.config)?;
    info!("Configuration loaded from: {:?}", cli.config);

    if let Some(snapshot) = cli.snapshot {
        config.input.snapshot_dir = snapshot;
    }
    if let Some(m3u) = cli.m3u {
        config.output.m3u_path = m3u;
    }
    if let Some(xmltv) = cli.xmltv {
        config.output.xmltv_path = xmltv;
    }
    config.validate()?;

    let statistics = run_conversion(&config)?;
    info!(
        "Wrote {} channels and {} programmes ({} programmes skipped) to {:?} and {:?}",
        statistics.channels,
        statistics.programmes_written,
        statistics.programmes_failed,
        config.output.m3u_path,
        config.output.xmltv_path
    );

    Ok(())
}
