use std::sync::Arc;

use axum::{
    extract::{Path, Query, State, rejection::QueryRejection},
    response::{Html, Redirect},
};
use serde::Deserialize;

use crate::{
    api::{AppError, AppState},
    render,
};

#[derive(Debug, Deserialize)]
pub struct ArtistSearchParams {
    pub artist: Option<String>,
}

pub async fn root() -> Redirect {
    Redirect::permanent("/index")
}

pub async fn index() -> Html<String> {
    Html(render::home())
}

pub async fn artist_search(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ArtistSearchParams>, QueryRejection>,
) -> Result<Html<String>, AppError> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let term = params
        .artist
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::BadRequest("Please enter an artist name.".to_string()))?;

    let page = state.browser.artist_search(term).await?;
    tracing::info!(term, results = page.artist_list.len(), "artist search");
    Ok(Html(render::artist_search(&page)))
}

pub async fn albums(
    State(state): State<Arc<AppState>>,
    Path(artist_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let page = state.browser.artist_albums(&artist_id).await?;
    Ok(Html(render::albums(&page)))
}

pub async fn tracks(
    State(state): State<Arc<AppState>>,
    Path(album_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let page = state.browser.album_tracks(&album_id).await?;
    Ok(Html(render::tracks(&page)))
}
