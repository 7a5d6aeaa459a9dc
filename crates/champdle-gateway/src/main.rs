//! Champdle HTTP/JSON Gateway binary.

use champdle_core::{import_csv_path, Catalog, ImportOptions};
use champdle_gateway::{create_router, AppState, Args, GatewayConfig};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line args
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "champdle_gateway={level},champdle_core={level},tower_http=info",
                    level = args.log_level
                )
                .into()
            }),
        )
        .init();

    let config = GatewayConfig::from(&args);

    info!(
        listen = %config.listen_addr,
        data_dir = %config.data_dir.display(),
        wildcard_region = ?config.wildcard_region,
        "Starting Champdle Gateway"
    );

    let catalog = Catalog::open_path(&config.data_dir)?;

    // Seed before the listener exists so imports never overlap requests
    if let Some(seed) = &config.seed {
        let options = ImportOptions::new().replace(config.replace);
        let report = import_csv_path(&catalog, seed, &options)?;
        info!(
            rows = report.rows,
            created = report.champions_created,
            updated = report.champions_updated,
            "Seeded catalog from {}",
            seed.display()
        );
    }

    if catalog.is_empty() {
        warn!("Catalog is empty; every lookup will return not found");
    }
    info!(champions = catalog.len(), "Catalog ready");

    // Create application state
    let state = AppState::new(catalog, config.clone());
    let catalog = state.catalog.clone();

    // Create router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("Gateway listening on {}", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutdown signal received");
        })
        .await?;

    catalog.flush()?;
    info!("Gateway stopped");

    Ok(())
}
