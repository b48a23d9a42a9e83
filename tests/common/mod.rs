#![allow(dead_code)]

use std::{sync::Mutex, time::Duration};

use artistscope::{
    error::{CatalogError, CredentialError},
    management::TokenSource,
    spotify::CatalogApi,
    types::{Album, AlbumArtist, Artist, Credential, Image, Paging, SearchQuery, Track},
};
use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;

mock! {
    pub Source {}

    #[async_trait]
    impl TokenSource for Source {
        async fn fetch(&self) -> Result<Credential, CredentialError>;
    }
}

pub fn credential(token: &str, obtained_at: u64) -> Credential {
    Credential {
        access_token: token.to_string(),
        token_type: "Bearer".to_string(),
        expires_in: 3600,
        obtained_at,
    }
}

pub fn fresh(token: &str) -> Credential {
    credential(token, Utc::now().timestamp() as u64)
}

/// A source that hands out `token` once.
pub fn single_token(token: &'static str) -> MockSource {
    let mut source = MockSource::new();
    source.expect_fetch().times(1).returning(move || Ok(fresh(token)));
    source
}

pub fn image(url: &str) -> Image {
    Image {
        url: url.to_string(),
        height: None,
        width: None,
    }
}

pub fn artist(id: &str, name: &str, images: &[&str]) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        images: images.iter().map(|u| image(u)).collect(),
        genres: vec![],
    }
}

pub fn album(id: &str, name: &str, artist_name: &str, images: &[&str]) -> Album {
    Album {
        id: id.to_string(),
        name: name.to_string(),
        images: images.iter().map(|u| image(u)).collect(),
        artists: vec![AlbumArtist {
            id: format!("{}_artist", id),
            name: artist_name.to_string(),
        }],
        release_date: None,
    }
}

pub fn track(id: &str, name: &str, preview: Option<&str>) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        preview_url: preview.map(str::to_string),
        track_number: None,
    }
}

/// In-memory catalog. Search pages are slices of `artists`.
#[derive(Default)]
pub struct StubCatalog {
    pub artists: Vec<Artist>,
    /// Reported search total; defaults to `artists.len()`.
    pub search_total: Option<u32>,
    /// Page offset whose request fails with an upstream 500.
    pub fail_offset: Option<u32>,
    /// Make earlier pages answer later than later pages.
    pub stagger: bool,
    pub artist: Option<Artist>,
    pub albums: Vec<Album>,
    pub album: Option<Album>,
    pub tracks: Vec<Track>,
    pub calls: Mutex<Vec<SearchQuery>>,
}

impl StubCatalog {
    pub fn search_calls(&self) -> Vec<SearchQuery> {
        self.calls.lock().unwrap().clone()
    }

    /// Search calls after the probe, in the order they were issued.
    pub fn page_calls(&self) -> Vec<SearchQuery> {
        self.search_calls().into_iter().skip(1).collect()
    }
}

#[async_trait]
impl CatalogApi for StubCatalog {
    async fn search_artists(&self, query: &SearchQuery) -> Result<Paging<Artist>, CatalogError> {
        self.calls.lock().unwrap().push(query.clone());

        if self.stagger && query.page_size > 1 {
            let index = (query.offset / query.page_size) as u64;
            tokio::time::sleep(Duration::from_millis(60u64.saturating_sub(index * 20))).await;
        }

        if query.page_size > 1 && self.fail_offset == Some(query.offset) {
            return Err(CatalogError::Upstream {
                status: 500,
                message: "boom".to_string(),
            });
        }

        let total = self.search_total.unwrap_or(self.artists.len() as u32);
        let start = (query.offset as usize).min(self.artists.len());
        let end = (start + query.page_size as usize).min(self.artists.len());

        Ok(Paging {
            items: self.artists[start..end].to_vec(),
            total,
            limit: query.page_size,
            offset: query.offset,
            next: None,
        })
    }

    async fn get_artist(&self, artist_id: &str) -> Result<Artist, CatalogError> {
        self.artist
            .clone()
            .filter(|a| a.id == artist_id)
            .ok_or_else(|| CatalogError::NotFound(artist_id.to_string()))
    }

    async fn get_artist_albums(&self, artist_id: &str) -> Result<Paging<Album>, CatalogError> {
        match &self.artist {
            Some(a) if a.id == artist_id => {
                Ok(Paging::of(self.albums.clone(), self.albums.len() as u32))
            }
            _ => Err(CatalogError::NotFound(artist_id.to_string())),
        }
    }

    async fn get_album(&self, album_id: &str) -> Result<Album, CatalogError> {
        self.album
            .clone()
            .filter(|a| a.id == album_id)
            .ok_or_else(|| CatalogError::NotFound(album_id.to_string()))
    }

    async fn get_album_tracks(&self, album_id: &str) -> Result<Paging<Track>, CatalogError> {
        match &self.album {
            Some(a) if a.id == album_id => {
                Ok(Paging::of(self.tracks.clone(), self.tracks.len() as u32))
            }
            _ => Err(CatalogError::NotFound(album_id.to_string())),
        }
    }
}

/// `count` artists named `artist-0`, `artist-1`, ...
pub fn numbered_artists(count: usize) -> Vec<Artist> {
    (0..count)
        .map(|i| artist(&format!("id{}", i), &format!("artist-{}", i), &[]))
        .collect()
}
