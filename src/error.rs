//! Error types for credential handling, catalog calls and configuration.

use thiserror::Error;

/// Failure to obtain an access token from the accounts service.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The token endpoint answered with a non-success status.
    #[error("Token request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The request could not be sent or the response could not be read.
    #[error("Token request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The token endpoint did not answer in time.
    #[error("Token request timed out")]
    Timeout,

    /// Every retry attempt failed; carries the last failure.
    #[error("Giving up after {attempts} attempts: {last}")]
    Exhausted {
        attempts: u32,
        #[source]
        last: Box<CredentialError>,
    },
}

impl CredentialError {
    /// Whether another attempt may succeed.
    ///
    /// Rate limiting and server-side failures are transient; any other
    /// rejection (bad client id or secret) will not fix itself.
    pub fn is_transient(&self) -> bool {
        match self {
            CredentialError::Rejected { status, .. } => *status == 429 || *status >= 500,
            CredentialError::Transport(_) | CredentialError::Timeout => true,
            CredentialError::Exhausted { .. } => false,
        }
    }
}

/// Failure of a catalog API call.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The requested artist or album does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The API answered with a non-success status other than 404.
    #[error("Upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// Network or decoding failure.
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The per-call deadline elapsed.
    #[error("Request to {0} timed out")]
    Timeout(String),

    /// No valid access token is available.
    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),

    /// A query failed local validation before being sent.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

/// Invalid or missing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Cannot prepare configuration directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read .env file: {0}")]
    Dotenv(#[from] dotenv::Error),
}
