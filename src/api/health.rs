use std::sync::Arc;

use axum::{extract::State, response::Json};
use serde_json::{Value, json};

use crate::api::AppState;

/// Liveness check. Reports the build and the search limits in effect; does
/// not call the catalog.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    let options = state.browser.options();
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "search": {
            "page_size": options.search_page_size,
            "max_results": options.search_max_results,
        }
    }))
}
