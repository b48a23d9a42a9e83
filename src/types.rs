use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::error::CatalogError;

#[derive(Clone, Serialize, Deserialize)]
pub struct Credential {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("obtained_at", &self.obtained_at)
            .finish()
    }
}

impl Credential {
    /// Seconds before the nominal expiry at which a token counts as expired.
    pub const EXPIRY_MARGIN_SECS: u64 = 240;

    pub fn is_expired_at(&self, now: u64) -> bool {
        let lifetime = self.expires_in.saturating_sub(Self::EXPIRY_MARGIN_SECS);
        now >= self.obtained_at.saturating_add(lifetime)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(chrono::Utc::now().timestamp() as u64)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

fn default_expires_in() -> u64 {
    3600
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenErrorResponse {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub status: u16,
    #[serde(default)]
    pub message: String,
}

/// A validated artist search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: String,
    pub page_size: u32,
    pub offset: u32,
}

impl SearchQuery {
    pub fn new(term: &str, page_size: u32, offset: u32) -> Result<Self, CatalogError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(CatalogError::InvalidQuery(
                "search term must not be empty".to_string(),
            ));
        }
        if page_size == 0 {
            return Err(CatalogError::InvalidQuery(
                "page size must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            term: term.to_string(),
            page_size,
            offset,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlbumArtist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Album {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub artists: Vec<AlbumArtist>,
    #[serde(default)]
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Track {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub track_number: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paging<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub next: Option<String>,
}

impl<T> Paging<T> {
    pub fn of(items: Vec<T>, total: u32) -> Self {
        let limit = items.len() as u32;
        Self {
            items,
            total,
            limit,
            offset: 0,
            next: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchArtistsResponse {
    pub artists: Paging<Artist>,
}

/// Which detail page a list entry links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Albums,
    Tracks,
}

impl ListKind {
    pub fn link_title(self) -> &'static str {
        match self {
            ListKind::Albums => "Albums",
            ListKind::Tracks => "Tracks",
        }
    }

    pub fn route_path(self, id: &str) -> String {
        match self {
            ListKind::Albums => format!("/albums/{id}"),
            ListKind::Tracks => format!("/tracks/{id}"),
        }
    }
}

/// Flat, template-ready list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModelRecord {
    pub name: String,
    pub id: String,
    pub thumbnail: String,
    pub link_title: String,
    pub route_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    pub name: String,
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistSearchPage {
    pub term: String,
    pub total: u32,
    pub artist_list: Vec<ViewModelRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumsPage {
    pub artist_name: String,
    pub album_list: Vec<ViewModelRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracksPage {
    pub artist_name: String,
    pub album_name: String,
    pub track_list: Vec<TrackRecord>,
}

#[derive(Tabled)]
pub struct RecordTableRow {
    pub name: String,
    pub id: String,
    pub link: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub preview: String,
}
