use anyhow::anyhow;
use bspsrc_launcher::{Invocation, cmd::Execute};
use clap::Parser;
use stop::fatal;
use tokio::runtime;
use tracing::{Level, level_filters::LevelFilter};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Generate a BSPSource launcher script.
#[derive(Clone, Debug, Parser)]
#[command(version)]
struct Args {
    #[clap(flatten)]
    inv: Invocation,
    /// Set the log filtering level.
    #[arg(name = "loglevel", long, default_value_t = Level::INFO)]
    log_level: Level,
    /// Use verbose output, equivalent to overriding log level to DEBUG.
    #[arg(short, long)]
    verbose: bool,
    /// Use noisy output, equivalent to overriding log level to TRACE.
    #[arg(short, long)]
    noisy: bool,
}

fn main() {
    let Args {
        inv,
        log_level,
        verbose,
        noisy,
    } = Args::parse();
    let log_level = if noisy {
        Level::TRACE
    } else if verbose {
        Level::DEBUG
    } else {
        log_level
    };
    tracing_subscriber::registry()
        .with(LevelFilter::from_level(log_level))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    let run = runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap_or_else(fatal!());
    run.block_on(inv.execute())
        .map_err(|e| anyhow!("{e:#}"))
        .unwrap_or_else(fatal!());
}
