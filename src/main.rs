//! Libris - Interactive Library Catalog Manager
//!
//! Single-process, in-memory catalog driven by a line-oriented menu on
//! stdin/stdout. Logs go to stderr.

use std::io;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use libris::{
    config::{AppConfig, LoggingConfig},
    menu::{ListFormat, Menu},
    repository::Repository,
    services::Services,
};

/// In-memory library catalog with rental tracking
#[derive(Parser)]
#[command(name = "libris", version, about)]
struct Args {
    /// Output format for the book listing
    #[arg(long, value_enum, default_value_t = ListFormat::Text)]
    format: ListFormat,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = AppConfig::load()?;

    init_tracing(&config.logging);

    tracing::info!(
        library = %config.library.name,
        "Starting Libris v{}",
        env!("CARGO_PKG_VERSION")
    );

    let repository = Repository::new();
    let services = Services::new(repository);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(services.clone(), stdin.lock(), stdout.lock(), args.format);
    menu.run()?;

    let stats = services.stats.summary();
    tracing::info!(
        library = %config.library.name,
        books = stats.books,
        available = stats.available,
        rented = stats.rented,
        users = stats.users,
        balance = %stats.balance,
        "Session ended"
    );

    Ok(())
}

/// Initialize tracing on stderr so log lines never interleave with menu
/// text on stdout.
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("libris={}", logging.level).into());

    let fmt = tracing_subscriber::fmt::layer().with_writer(io::stderr);

    if logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt.json())
            .init();
    } else {
        tracing_subscriber::registry().with(filter).with(fmt).init();
    }
}
