//! Configuration management for Artistscope.
//!
//! This module handles loading configuration values from environment
//! variables and `.env` files and turning them into typed [`Settings`].
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the current working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{
    env, io, net::SocketAddr, ops::RangeInclusive, path::PathBuf, str::FromStr, time::Duration,
};

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_IMAGE_FALLBACK: &str =
    "https://w7.pngwing.com/pngs/75/488/png-transparent-cute-kitten-s-pet-kitty-kitten-thumbnail.png";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SEARCH_PAGE_SIZE: u32 = 50;
pub const DEFAULT_SEARCH_MAX_RESULTS: u32 = 1000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Loads environment variables from `.env` files.
///
/// Looks in the working directory first, then in the platform-specific
/// local data directory under `artistscope/.env`, creating that directory
/// if it doesn't exist. Variables already present in the environment are
/// never overwritten, and a missing file is not an error.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/artistscope/.env`
/// - macOS: `~/Library/Application Support/artistscope/.env`
/// - Windows: `%LOCALAPPDATA%/artistscope/.env`
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or if a `.env`
/// file exists but cannot be parsed.
pub async fn load_env() -> Result<(), ConfigError> {
    ignore_missing(dotenv::dotenv().map(|_| ()))?;

    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    ignore_missing(dotenv::from_path(&path))
}

fn ignore_missing(result: Result<(), dotenv::Error>) -> Result<(), ConfigError> {
    match result {
        Err(dotenv::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other.map_err(ConfigError::from),
    }
}

/// Location of the per-user `.env` file.
pub fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("artistscope/.env");
    path
}

/// Runtime settings resolved from the environment.
#[derive(Clone)]
pub struct Settings {
    /// `SPOTIFY_API_AUTH_CLIENT_ID`
    pub client_id: String,
    /// `SPOTIFY_API_AUTH_CLIENT_SECRET`
    pub client_secret: String,
    /// `SPOTIFY_API_URL`
    pub api_url: String,
    /// `SPOTIFY_API_TOKEN_URL`
    pub token_url: String,
    /// `SERVER_ADDRESS`
    pub server_addr: SocketAddr,
    /// `IMAGE_FALLBACK_URL`
    pub image_fallback: String,
    /// `REQUEST_TIMEOUT_SECS`
    pub request_timeout: Duration,
    /// `SEARCH_PAGE_SIZE`
    pub search_page_size: u32,
    /// `SEARCH_MAX_RESULTS`
    pub search_max_results: u32,
    /// `PUBLIC_DIR`
    pub public_dir: PathBuf,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("token_url", &self.token_url)
            .field("server_addr", &self.server_addr)
            .field("image_fallback", &self.image_fallback)
            .field("request_timeout", &self.request_timeout)
            .field("search_page_size", &self.search_page_size)
            .field("search_max_results", &self.search_max_results)
            .field("public_dir", &self.public_dir)
            .finish()
    }
}

impl Settings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads settings through an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let client_id = get("SPOTIFY_API_AUTH_CLIENT_ID")
            .ok_or(ConfigError::Missing("SPOTIFY_API_AUTH_CLIENT_ID"))?;
        let client_secret = get("SPOTIFY_API_AUTH_CLIENT_SECRET")
            .ok_or(ConfigError::Missing("SPOTIFY_API_AUTH_CLIENT_SECRET"))?;

        let timeout_secs: u64 = parse_or(
            "REQUEST_TIMEOUT_SECS",
            get("REQUEST_TIMEOUT_SECS"),
            DEFAULT_TIMEOUT_SECS,
        )?;
        let search_page_size: u32 = parse_or(
            "SEARCH_PAGE_SIZE",
            get("SEARCH_PAGE_SIZE"),
            DEFAULT_SEARCH_PAGE_SIZE,
        )?;
        check_range("SEARCH_PAGE_SIZE", search_page_size, 1..=50)?;
        let search_max_results: u32 = parse_or(
            "SEARCH_MAX_RESULTS",
            get("SEARCH_MAX_RESULTS"),
            DEFAULT_SEARCH_MAX_RESULTS,
        )?;
        check_range("SEARCH_MAX_RESULTS", search_max_results, 1..=1000)?;

        Ok(Self {
            client_id,
            client_secret,
            api_url: get("SPOTIFY_API_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            token_url: get("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            server_addr: parse_or(
                "SERVER_ADDRESS",
                get("SERVER_ADDRESS"),
                SocketAddr::from(([127, 0, 0, 1], 3000)),
            )?,
            image_fallback: get("IMAGE_FALLBACK_URL")
                .unwrap_or_else(|| DEFAULT_IMAGE_FALLBACK.to_string()),
            request_timeout: Duration::from_secs(timeout_secs),
            search_page_size,
            search_max_results,
            public_dir: get("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR)),
        })
    }
}

fn check_range(
    name: &'static str,
    value: u32,
    range: RangeInclusive<u32>,
) -> Result<(), ConfigError> {
    if range.contains(&value) {
        return Ok(());
    }
    Err(ConfigError::Invalid {
        name,
        value: value.to_string(),
        reason: format!("must be between {} and {}", range.start(), range.end()),
    })
}

fn parse_or<T>(name: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}
