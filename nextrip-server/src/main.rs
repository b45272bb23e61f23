use std::net::SocketAddr;
use std::sync::Arc;

use nextrip_server::nextrip::{TransitClient, TransitConfig};
use nextrip_server::selection::SelectionController;
use nextrip_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STATIC_DIR: &str = "static";

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nextrip_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Create NexTrip client
    let mut transit_config = TransitConfig::new();
    if let Ok(base_url) = std::env::var("NEXTRIP_BASE_URL") {
        transit_config = transit_config.with_base_url(base_url);
    }
    let client = TransitClient::new(transit_config).expect("Failed to create NexTrip client");
    info!(base_url = %client.base_url(), "using NexTrip API");

    // Load routes in the background so the first page can show "Loading..."
    let selection = Arc::new(SelectionController::new(client));
    tokio::spawn({
        let selection = selection.clone();
        async move { selection.initialize().await }
    });

    let static_dir =
        std::env::var("NEXTRIP_STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string());
    let app = create_router(AppState::new(selection), &static_dir);

    // Bind and serve
    let addr: SocketAddr = std::env::var("NEXTRIP_LISTEN_ADDR")
        .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string())
        .parse()
        .expect("NEXTRIP_LISTEN_ADDR must be host:port");
    info!("NextTrip listening on http://{addr}");
    info!("  GET  /                 - Departure browser");
    info!("  GET  /health           - Health check");
    info!("  GET  /api/state        - Current selection as JSON");
    info!("  POST /select/route     - Choose a route (form field `id`)");
    info!("  POST /select/direction - Choose a direction");
    info!("  POST /select/stop      - Choose a stop");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
