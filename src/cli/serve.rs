use std::sync::Arc;

use crate::{api::AppState, cli, config::Settings, error, info, server, warning};

pub async fn serve(settings: Settings, open: bool) {
    let browser = cli::connect(&settings).await;

    if !settings.public_dir.is_dir() {
        warning!(
            "Static directory {} not found, stylesheet will be missing",
            settings.public_dir.display()
        );
    }

    let state = Arc::new(AppState { browser });
    let app = server::router(state, &settings.public_dir);

    let url = format!("http://{}/index", settings.server_addr);
    info!("Artistscope running on {}", url);

    if open && webbrowser::open(&url).is_err() {
        warning!("Failed to open browser. Please navigate to {} manually", url);
    }

    if let Err(e) = server::start_api_server(settings.server_addr, app).await {
        error!("Server failed: {}", e);
    }
}
