//! # Stockroom
//!
//! Opens the item database, seeds it once and prints every stored item.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  init_tracing()  ──►  StockroomConfig::load()  ──►  Database::new()    │
//! │                                                          │              │
//! │                                                          ▼              │
//! │                               seed(&db.items(), stdout, format)        │
//! │                                                          │              │
//! │                                                          ▼              │
//! │                                                     db.close()         │
//! │                                                                         │
//! │  Any error on the way aborts with a non-zero exit code.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Logs go to stderr so stdout only carries item lines.

mod config;

use std::io;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::StockroomConfig;
use stockroom_db::{seed, Database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting Stockroom");

    let config = StockroomConfig::load().context("Failed to load configuration")?;
    info!(
        path = %config.database_path.display(),
        max_connections = config.max_connections,
        output = ?config.output,
        "Configuration loaded"
    );

    let db = Database::new(config.db_config())
        .await
        .context("Failed to open database")?;

    let mut out = io::stdout().lock();
    let items = seed(&db.items(), &mut out, config.output)
        .await
        .context("Startup seeding failed")?;

    info!(count = items.len(), "Startup seeding complete");

    db.close().await;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom_db=trace` - Trace the database layer only
/// - Default: INFO, debug for stockroom crates, warn for sqlx
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stockroom=debug,stockroom_db=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
