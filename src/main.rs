//! Service entry point: wire configuration, database, log sink, and server
//! together, then run until shutdown.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use places_proxy::config::load_config;
use places_proxy::db;
use places_proxy::execlog::{LogSink, PgLogStore};
use places_proxy::http::HttpServer;
use places_proxy::lifecycle::Shutdown;
use places_proxy::places::PlacesClient;

#[derive(Parser)]
#[command(name = "places-proxy")]
#[command(about = "Aggregates a paginated places API, logging execution timing", long_about = None)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "places_proxy=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("places-proxy v0.1.0 starting");

    let config = load_config(args.config.as_deref())?;
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        sink_capacity = config.log_sink.capacity,
        "Configuration loaded"
    );

    let pool = db::connect(&config.database).await?;
    tracing::info!(
        host = %config.database.host,
        database = %config.database.name,
        "Connected to PostgreSQL"
    );

    let (sink, worker) = LogSink::spawn(
        Arc::new(PgLogStore::new(pool)),
        config.log_sink.capacity,
    );
    let places = Arc::new(PlacesClient::new(&config.upstream)?);

    let shutdown = Shutdown::new();
    shutdown.listen_for_ctrl_c();

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(&config, places, sink.clone());
    server.run(listener, shutdown.subscribe()).await?;

    // The server no longer accepts requests; flush what the handlers queued.
    sink.close_and_drain().await;
    worker.await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
