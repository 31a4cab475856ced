//! Pokedex - A command-line PokeAPI explorer
//!
//! Browses location areas, explores encounters and simulates catching
//! Pokemon. Every API response goes through an expiring in-memory cache.

use tokio::signal;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{repl, Config, PokeApiClient, ResponseCache, Session};

/// Main entry point for the Pokedex explorer.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the response cache, which starts its reaper
/// 4. Create the PokeAPI client and session
/// 5. Run the command loop on stdin/stdout until exit, end of input,
///    Ctrl+C or SIGTERM
/// 6. Stop the cache reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the prompt; override with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    debug!(
        "Configuration loaded: api_base_url={}, cache_ttl={}s, http_timeout={}s",
        config.api_base_url, config.cache_ttl, config.http_timeout
    );

    let cache = ResponseCache::new(config.cache_ttl())?;
    let client = PokeApiClient::new(&config, cache.clone())?;
    let mut session = Session::new(client);

    let input = repl::stdin_lines();
    let mut output = std::io::stdout();

    let result = repl::run_until(&mut session, input, &mut output, shutdown_signal()).await;

    cache.shutdown().await;
    debug!("Cache reaper stopped");

    result?;
    Ok(())
}

/// Completes on Ctrl+C or SIGTERM.
///
/// A handler that fails to install is logged and never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                warn!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
    }
}
