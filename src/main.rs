use std::sync::Arc;

use athletis_planning::{
    config::Config,
    create_router,
    state::AppState,
    store::JsonFileStore,
};
use tower_http::{services::ServeDir, trace::TraceLayer}; // static site + request logs
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("athletis_planning=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let addr = config.addr()?;

    let store = JsonFileStore::new(&config.data_dir);
    let state = AppState::new(Arc::new(store), config.reservation_status);

    let app = create_router(state)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http());

    info!("Server running at http://{}", addr);
    info!("Static files: {}", config.static_dir.display());
    info!("Data dir:     {}", config.data_dir.display());
    info!("API base:     http://{}/api", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
