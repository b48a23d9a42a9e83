use std::sync::Arc;

use crate::{
    config::Settings,
    error::CatalogError,
    mapper,
    spotify::{self, CatalogApi},
    types::{AlbumsPage, ArtistSearchPage, TracksPage},
};

const UNKNOWN_ARTIST: &str = "Unknown artist";

#[derive(Debug, Clone)]
pub struct BrowseOptions {
    pub image_fallback: String,
    pub search_page_size: u32,
    pub search_max_results: u32,
}

impl From<&Settings> for BrowseOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            image_fallback: settings.image_fallback.clone(),
            search_page_size: settings.search_page_size,
            search_max_results: settings.search_max_results,
        }
    }
}

/// Builds the three browse pages from catalog calls.
///
/// Shared by the web routes and the terminal commands. Lookups that belong
/// to the same page run concurrently; the first failure cancels the other.
#[derive(Clone)]
pub struct CatalogBrowser {
    api: Arc<dyn CatalogApi>,
    options: BrowseOptions,
}

impl CatalogBrowser {
    pub fn new(api: Arc<dyn CatalogApi>, options: BrowseOptions) -> Self {
        Self { api, options }
    }

    pub fn options(&self) -> &BrowseOptions {
        &self.options
    }

    /// Every artist matching `term`. No matches is an empty page, not an error.
    pub async fn artist_search(&self, term: &str) -> Result<ArtistSearchPage, CatalogError> {
        let found = spotify::search_all_artists(
            self.api.as_ref(),
            term,
            self.options.search_page_size,
            self.options.search_max_results,
        )
        .await?;

        Ok(ArtistSearchPage {
            term: term.trim().to_string(),
            total: found.total,
            artist_list: mapper::artist_records(&found.items, &self.options.image_fallback),
        })
    }

    pub async fn artist_albums(&self, artist_id: &str) -> Result<AlbumsPage, CatalogError> {
        let (artist, albums) = tokio::try_join!(
            self.api.get_artist(artist_id),
            self.api.get_artist_albums(artist_id)
        )?;

        Ok(AlbumsPage {
            artist_name: artist.name,
            album_list: mapper::album_records(&albums.items, &self.options.image_fallback),
        })
    }

    pub async fn album_tracks(&self, album_id: &str) -> Result<TracksPage, CatalogError> {
        let (album, tracks) = tokio::try_join!(
            self.api.get_album(album_id),
            self.api.get_album_tracks(album_id)
        )?;

        let artist_name = album
            .artists
            .first()
            .map(|a| a.name.clone())
            .unwrap_or_else(|| UNKNOWN_ARTIST.to_string());

        Ok(TracksPage {
            artist_name,
            album_name: album.name,
            track_list: tracks.items.iter().map(mapper::to_track_record).collect(),
        })
    }
}
