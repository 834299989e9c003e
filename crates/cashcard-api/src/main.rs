//! Cashcard server entry point.

use std::sync::Arc;

use cashcard_api::cli::{CliArgs, Command};
use cashcard_api::{AppState, CashcardConfig, router};
use cashcard_auth::CredentialStore;
use cashcard_core::{Error, Result};
use cashcard_store::{CardStore, MemoryStore};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialise tracing-based logging.
///
/// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("warn")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Ignore error if a subscriber is already set (e.g. in tests).
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

async fn serve(config: &CashcardConfig, port_override: Option<u16>) -> Result<()> {
    let store: Arc<dyn CardStore> = if config.store.seed_demo {
        Arc::new(MemoryStore::seeded())
    } else {
        Arc::new(MemoryStore::new())
    };
    let credentials = Arc::new(CredentialStore::with_demo_users()?);

    let app = router(AppState::new(store, credentials));

    let mut config = config.clone();
    if let Some(port) = port_override {
        config.server.port = port;
    }
    let addr = config.bind_addr();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::config(format!("failed to bind {addr}: {e}")))?;
    info!(%addr, "cashcard server listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::store(format!("server error: {e}")))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose, args.quiet);

    let config = CashcardConfig::load(args.config.as_deref())?;

    match args.command {
        Some(Command::Version) => {
            println!("cashcard {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Command::Serve { port }) => serve(&config, port).await,
        None => serve(&config, None).await,
    }
}
