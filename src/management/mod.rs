mod auth;
mod browse;

pub use auth::RetryPolicy;
pub use auth::TokenManager;
pub use auth::TokenSource;
pub use browse::BrowseOptions;
pub use browse::CatalogBrowser;
