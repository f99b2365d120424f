/// Airwave server - catalog proxy and play history
use airwave_catalog::CatalogClient;
use airwave_history::SqliteHistory;
use airwave_server::{config::AppConfig, create_router, state::AppState};
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "airwave-server")]
#[command(about = "Airwave music player server", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "airwave_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;

    tracing::info!("Starting Airwave server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize history database
    let pool = airwave_history::create_pool(&config.storage.database_url).await?;
    airwave_history::run_migrations(&pool).await?;
    let history = Arc::new(SqliteHistory::new(pool));
    tracing::info!("History database connected");

    // Initialize catalog client
    let catalog = Arc::new(CatalogClient::new(config.catalog_config())?);
    tracing::info!("Catalog provider: {}", catalog.base_url());

    // Build application state and router
    let state = AppState::new(catalog, history);
    let app = create_router(state);

    let addr = SocketAddr::from((
        config.server.host.parse::<IpAddr>()?,
        config.server.port,
    ));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
