//! # API Module
//!
//! HTTP route handlers of the Artistscope web application.
//!
//! ## Endpoints
//!
//! ### Pages
//!
//! - [`index`] - Landing page with the search form (`GET /index`, `/` redirects here)
//! - [`artist_search`] - Artists matching `?artist=<term>` (`GET /artist-search`)
//! - [`albums`] - Albums of an artist (`GET /albums/{artist_id}`)
//! - [`tracks`] - Tracks of an album (`GET /tracks/{album_id}`)
//!
//! ### Monitoring
//!
//! - [`health`] - Application status and version (`GET /health`)
//!
//! ## Error Handling
//!
//! Handlers return [`AppError`], which renders an error page. Upstream
//! not-found becomes a 404, a missing search term a 400, and catalog or
//! credential outages a 5xx.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! let app = Router::new()
//!     .route("/index", get(api::index))
//!     .route("/health", get(api::health))
//!     .with_state(state);
//! ```

mod error;
mod health;
mod pages;

pub use error::AppError;
pub use health::health;
pub use pages::{ArtistSearchParams, albums, artist_search, index, root, tracks};

use crate::management::CatalogBrowser;

/// State shared by all handlers.
pub struct AppState {
    pub browser: CatalogBrowser,
}
