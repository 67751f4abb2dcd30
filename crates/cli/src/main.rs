use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use booking_core::{
    load_config_or_default, validate_config, BookingSession, ConfirmationSink, StdoutSink,
};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Config file picked up from the working directory when BOOKING_CONFIG is unset
const DEFAULT_CONFIG_FILE: &str = "booking.toml";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Logs go to stderr; stdout is the interactive transcript
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_path = config_path();
    match &config_path {
        Some(path) => info!("Loading configuration from {:?}", path),
        None => info!("No configuration file, using defaults"),
    }
    let config = load_config_or_default(config_path.as_deref())
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    validate_config(&config).context("Configuration validation failed")?;

    info!(
        version = VERSION,
        conference = %config.conference.name,
        total_tickets = config.conference.total_tickets,
        delay_ms = config.notifier.delay_ms,
        "Configuration loaded"
    );

    let sink: Arc<dyn ConfirmationSink> = Arc::new(StdoutSink);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    let mut session = BookingSession::new(config, sink, stdin, stdout);
    let summary = session.run().await.context("Booking failed")?;

    info!(
        remaining = summary.remaining,
        sold_out = summary.sold_out,
        "Exiting"
    );
    Ok(())
}

/// BOOKING_CONFIG if set, else booking.toml when present, else none
fn config_path() -> Option<PathBuf> {
    match std::env::var("BOOKING_CONFIG") {
        Ok(path) => Some(PathBuf::from(path)),
        Err(_) => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            default.exists().then_some(default)
        }
    }
}
