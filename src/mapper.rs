//! Reshapes catalog records into flat view-model records.
//!
//! Every function here is pure: the same input always yields the same output.

use crate::types::{Album, Artist, Image, ListKind, Track, TrackRecord, ViewModelRecord};

/// Position of the thumbnail-sized image in the catalog's image list, which
/// is ordered by descending resolution.
pub const THUMBNAIL_INDEX: usize = 2;

/// Anything that can appear as an entry in an artist or album list.
pub trait CatalogItem {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn images(&self) -> &[Image];
}

impl CatalogItem for Artist {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn images(&self) -> &[Image] {
        &self.images
    }
}

impl CatalogItem for Album {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn images(&self) -> &[Image] {
        &self.images
    }
}

/// Url of the thumbnail image, or `fallback` when there are fewer than
/// three images.
pub fn select_thumbnail(images: &[Image], fallback: &str) -> String {
    images
        .get(THUMBNAIL_INDEX)
        .map(|img| img.url.clone())
        .unwrap_or_else(|| fallback.to_string())
}

pub fn to_record<T: CatalogItem>(item: &T, kind: ListKind, fallback: &str) -> ViewModelRecord {
    ViewModelRecord {
        name: item.name().to_string(),
        id: item.id().to_string(),
        thumbnail: select_thumbnail(item.images(), fallback),
        link_title: kind.link_title().to_string(),
        route_path: kind.route_path(item.id()),
    }
}

/// Artists link to their albums.
pub fn artist_records(artists: &[Artist], fallback: &str) -> Vec<ViewModelRecord> {
    artists
        .iter()
        .map(|a| to_record(a, ListKind::Albums, fallback))
        .collect()
}

/// Albums link to their tracks.
pub fn album_records(albums: &[Album], fallback: &str) -> Vec<ViewModelRecord> {
    albums
        .iter()
        .map(|a| to_record(a, ListKind::Tracks, fallback))
        .collect()
}

pub fn to_track_record(track: &Track) -> TrackRecord {
    TrackRecord {
        name: track.name.clone(),
        preview_url: track.preview_url.clone(),
    }
}
