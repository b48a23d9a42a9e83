use axum::{Router, routing::get};
use std::{net::SocketAddr, path::Path, sync::Arc};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{Res, api};

/// Routes of the web application. Unknown paths fall through to static files
/// under `public_dir`.
pub fn router(state: Arc<api::AppState>, public_dir: &Path) -> Router {
    Router::new()
        .route("/", get(api::root))
        .route("/index", get(api::index))
        .route("/artist-search", get(api::artist_search))
        .route("/albums/{artist_id}", get(api::albums))
        .route("/tracks/{album_id}", get(api::tracks))
        .route("/health", get(api::health))
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves `app` on `addr` until Ctrl-C.
pub async fn start_api_server(addr: SocketAddr, app: Router) -> Res<()> {
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
