//! Geofleet dispatch server.

use std::net::SocketAddr;
use std::sync::Arc;

use quadtree::QuadTree;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod fleet;

use api::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Geofleet dispatch server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = config::Config::load()?;
    info!("Loaded configuration");
    info!("  Port: {}", config.server.port);
    info!(
        "  World: {}x{}",
        config.world.half_width * 2.0,
        config.world.half_height * 2.0
    );
    info!("  Drivers: {}", config.fleet.drivers);

    // The index every driver task and request handler shares.
    let tree = Arc::new(QuadTree::new(
        config.world.boundary(),
        config.world.bucket_capacity,
    ));

    // Start the fleet simulation
    fleet::spawn(Arc::clone(&tree), &config);
    info!("Fleet simulation started in the background");

    // Permissive CORS: the map client polls from the browser.
    let app = api::router(AppState {
        tree,
        search: config.search.clone(),
    })
    .layer(ServiceBuilder::new().layer(CorsLayer::permissive()));

    let addr: SocketAddr = format!("{}:{}", config.server.bind, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
