//! # Spotify Integration Module
//!
//! This module is the integration layer between Artistscope and the Spotify
//! Web API. It covers app-level authentication and the read-only catalog
//! endpoints the application needs.
//!
//! ## Architecture
//!
//! ```text
//! Routes / CLI
//!          ↓
//! Page orchestration (management::CatalogBrowser)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client-credentials grant)
//!     ├── Catalog Operations (search, artists, albums, tracks)
//!     └── Pagination Fan-out (all search pages at once)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 client-credentials grant as a
//! [`TokenSource`](crate::management::TokenSource). The token is held and
//! refreshed by [`TokenManager`](crate::management::TokenManager).
//!
//! ### Catalog Module
//!
//! [`catalog`] - The [`CatalogApi`] trait and its reqwest implementation
//! [`SpotifyCatalog`]. Each call has its own timeout and fails with a typed
//! [`CatalogError`](crate::error::CatalogError); a 404 is reported as
//! `NotFound`, separate from transport or auth failures.
//!
//! ### Pagination Module
//!
//! [`pagination`] - Probes the result total of an artist search and fetches
//! all pages concurrently, preserving page order.
//!
//! ## API Coverage
//!
//! - `GET /search?type=artist` - Artist search with `limit`/`offset`
//! - `GET /artists/{id}` - Artist by id
//! - `GET /artists/{id}/albums` - Albums of an artist
//! - `GET /albums/{id}` - Album by id
//! - `GET /albums/{id}/tracks` - Tracks of an album
//! - `POST /api/token` - Client-credentials token exchange
//!
//! ## Usage
//!
//! ```rust
//! let tokens = Arc::new(TokenManager::new(Arc::new(grant), RetryPolicy::default()));
//! tokens.acquire().await?;
//!
//! let catalog = SpotifyCatalog::from_settings(client, tokens, &settings);
//! let found = spotify::search_all_artists(&catalog, "Daft Punk", 50, 1000).await?;
//! ```

pub mod auth;
pub mod catalog;
pub mod pagination;

pub use auth::ClientCredentialsGrant;
pub use catalog::{CatalogApi, SpotifyCatalog};
pub use pagination::{FanOutResult, search_all_artists};
