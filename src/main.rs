//! Hypochondriapp terminal entry point.

use std::io::{self, IsTerminal};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use hypochondriapp::adapters::{ConsoleUi, RngRandomSource, TokioRevealTimer};
use hypochondriapp::application::WizardService;
use hypochondriapp::config::{AppConfig, LoggingConfig};
use hypochondriapp::ports::RandomSource;

#[derive(Parser)]
#[command(name = "hypochondriapp")]
#[command(about = "The Medical App That Always Finds The Worst")]
#[command(version)]
struct Cli {
    /// Seed the diagnosis draws for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds to keep "Analyzing Your Condition..." on screen
    #[arg(long)]
    reveal_delay_ms: Option<u64>,

    /// Disable colored severity badges
    #[arg(long)]
    no_color: bool,
}

fn init_tracing(logging: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(logging.env_filter())
        .with_writer(io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load()
        .context("Failed to load configuration")?
        .with_overrides(cli.seed, cli.reveal_delay_ms);
    config.validate().context("Invalid configuration")?;

    init_tracing(&config.logging);

    let rng: Box<dyn RandomSource> = match config.random.seed {
        Some(seed) => {
            info!(seed, "Using seeded diagnosis draws");
            Box::new(RngRandomSource::seeded(seed))
        }
        None => Box::new(RngRandomSource::from_os()),
    };

    let service = WizardService::new(rng, Arc::new(TokioRevealTimer::new()), &config.reveal);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let color = !cli.no_color && stdout.is_terminal();

    let mut ui = ConsoleUi::new(service, stdin.lock(), stdout.lock()).with_color(color);
    ui.run().await.context("Terminal session failed")?;

    Ok(())
}
