use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    config::Settings,
    error::CatalogError,
    management::TokenManager,
    types::{Album, ApiErrorResponse, Artist, Paging, SearchArtistsResponse, SearchQuery, Track},
};

/// The catalog operations the application needs.
///
/// Implemented by [`SpotifyCatalog`] in production; route and fan-out tests
/// substitute stubs.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// One page of artists matching the query.
    async fn search_artists(&self, query: &SearchQuery) -> Result<Paging<Artist>, CatalogError>;

    async fn get_artist(&self, artist_id: &str) -> Result<Artist, CatalogError>;

    async fn get_artist_albums(&self, artist_id: &str) -> Result<Paging<Album>, CatalogError>;

    async fn get_album(&self, album_id: &str) -> Result<Album, CatalogError>;

    async fn get_album_tracks(&self, album_id: &str) -> Result<Paging<Track>, CatalogError>;
}

/// Spotify Web API client for the public catalog.
///
/// Every request carries the app token from the shared [`TokenManager`] and
/// is bounded by `timeout`. Nothing is retried: failures surface as
/// [`CatalogError`] to the caller.
pub struct SpotifyCatalog {
    client: Client,
    base_url: String,
    tokens: Arc<TokenManager>,
    timeout: Duration,
}

impl SpotifyCatalog {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        tokens: Arc<TokenManager>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            tokens,
            timeout,
        }
    }

    pub fn from_settings(client: Client, tokens: Arc<TokenManager>, settings: &Settings) -> Self {
        Self::new(client, &settings.api_url, tokens, settings.request_timeout)
    }

    /// `timeout` bounds the HTTP exchange only; resolving the token happens
    /// before the deadline starts.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let token = self.tokens.get_valid_token().await?;
        let url = format!("{uri}{path}", uri = self.base_url, path = path);
        match tokio::time::timeout(self.timeout, self.send(&url, query, &token)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(%url, "catalog request timed out");
                Err(CatalogError::Timeout(path.to_string()))
            }
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
        token: &str,
    ) -> Result<T, CatalogError> {
        tracing::debug!(%url, ?query, "GET");
        let response = self
            .client
            .get(url)
            .query(query)
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.text().await.unwrap_or_default();
        Err(upstream_error(status, &body))
    }
}

/// Turns a non-success response into an error, preferring the message of
/// the API's `{"error": {"status", "message"}}` body.
fn upstream_error(status: StatusCode, body: &str) -> CatalogError {
    let message = serde_json::from_str::<ApiErrorResponse>(body)
        .map(|e| e.error.message)
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());

    if status == StatusCode::NOT_FOUND {
        return CatalogError::NotFound(message);
    }

    CatalogError::Upstream {
        status: status.as_u16(),
        message,
    }
}

fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

#[async_trait]
impl CatalogApi for SpotifyCatalog {
    async fn search_artists(&self, query: &SearchQuery) -> Result<Paging<Artist>, CatalogError> {
        let res: SearchArtistsResponse = self
            .get_json(
                "/search",
                &[
                    ("q", query.term.clone()),
                    ("type", "artist".to_string()),
                    ("limit", query.page_size.to_string()),
                    ("offset", query.offset.to_string()),
                ],
            )
            .await?;
        Ok(res.artists)
    }

    async fn get_artist(&self, artist_id: &str) -> Result<Artist, CatalogError> {
        self.get_json(&format!("/artists/{}", segment(artist_id)), &[])
            .await
    }

    async fn get_artist_albums(&self, artist_id: &str) -> Result<Paging<Album>, CatalogError> {
        self.get_json(&format!("/artists/{}/albums", segment(artist_id)), &[])
            .await
    }

    async fn get_album(&self, album_id: &str) -> Result<Album, CatalogError> {
        self.get_json(&format!("/albums/{}", segment(album_id)), &[])
            .await
    }

    async fn get_album_tracks(&self, album_id: &str) -> Result<Paging<Track>, CatalogError> {
        self.get_json(&format!("/albums/{}/tracks", segment(album_id)), &[])
            .await
    }
}
