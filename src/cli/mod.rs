//! # CLI Module
//!
//! This module provides the command-line layer of Artistscope. It wires the
//! configuration, credential provider and catalog client together and hands
//! control to either the web server or one of the terminal views.
//!
//! ## Command Categories
//!
//! ### Web Application
//!
//! - [`serve`] - Acquires the app credential and runs the HTTP server
//!
//! ### Terminal Views
//!
//! - [`search`] - Lists every artist matching a term
//! - [`albums`] - Lists the albums of an artist
//! - [`tracks`] - Lists the tracks of an album
//!
//! ## Startup Sequence
//!
//! 1. **Configuration**: `.env` files are loaded and [`Settings`] resolved
//! 2. **Credential**: the client-credentials grant runs with retry and backoff
//! 3. **Dispatch**: the selected command runs against the shared client
//!
//! A credential that cannot be obtained stops the program with an error
//! instead of leaving every later request to fail.
//!
//! ## Usage Patterns
//!
//! ```bash
//! artistscope serve --open            # Run the web app and open a browser
//! artistscope search "Daft Punk"      # Artist table in the terminal
//! artistscope albums 4tZwfgrHOc3mvqYlEYSvVi
//! artistscope tracks 2noRn2Aes5aoNVsU6iWThc
//! ```

mod browse;
mod serve;

pub use browse::albums;
pub use browse::search;
pub use browse::tracks;
pub use serve::serve;

use std::{sync::Arc, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;

use crate::{
    config::Settings,
    error,
    management::{BrowseOptions, CatalogBrowser, RetryPolicy, TokenManager},
    spotify::{ClientCredentialsGrant, SpotifyCatalog},
};

/// Builds the catalog browser and acquires the app credential.
///
/// Exits the program when no credential can be obtained.
pub(crate) async fn connect(settings: &Settings) -> CatalogBrowser {
    let client = match Client::builder()
        .user_agent(concat!("artistscope/", env!("CARGO_PKG_VERSION")))
        .build()
    {
        Ok(c) => c,
        Err(e) => error!("Failed to build HTTP client: {}", e),
    };

    let grant = ClientCredentialsGrant::from_settings(client.clone(), settings);
    let tokens = Arc::new(TokenManager::new(Arc::new(grant), RetryPolicy::default()));

    let pb = spinner("Requesting access token...");
    let acquired = tokens.acquire().await;
    pb.finish_and_clear();

    if let Err(e) = acquired {
        error!(
            "Failed to obtain an access token. Check SPOTIFY_API_AUTH_CLIENT_ID and SPOTIFY_API_AUTH_CLIENT_SECRET.\n Error: {}",
            e
        );
    }

    let catalog = SpotifyCatalog::from_settings(client, tokens, settings);
    CatalogBrowser::new(Arc::new(catalog), BrowseOptions::from(settings))
}

pub(crate) fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
