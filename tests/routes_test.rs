mod common;

use std::{path::Path, sync::Arc};

use artistscope::{
    api::AppState,
    management::{BrowseOptions, CatalogBrowser},
    server,
};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use common::{StubCatalog, album, artist, track};
use tower::ServiceExt;

const FALLBACK: &str = "https://example.com/kitten.png";

fn options() -> BrowseOptions {
    BrowseOptions {
        image_fallback: FALLBACK.to_string(),
        search_page_size: 50,
        search_max_results: 1000,
    }
}

fn browser(stub: StubCatalog) -> CatalogBrowser {
    CatalogBrowser::new(Arc::new(stub), options())
}

fn app(stub: StubCatalog) -> Router {
    let state = Arc::new(AppState {
        browser: browser(stub),
    });
    server::router(state, Path::new("public"))
}

fn daft_punk_catalog() -> StubCatalog {
    StubCatalog {
        artists: vec![artist("abc", "Daft Punk", &["img0", "img1", "img2"])],
        artist: Some(artist("abc", "Daft Punk", &["img0", "img1", "img2"])),
        albums: vec![
            album("al1", "Discovery", "Daft Punk", &["l", "m", "s"]),
            album("al2", "Homework", "Daft Punk", &[]),
        ],
        ..Default::default()
    }
}

fn tracks_catalog() -> StubCatalog {
    StubCatalog {
        album: Some(album("xyz", "Album X", "A", &[])),
        tracks: vec![
            track("t1", "First", Some("https://p.scdn.co/mp3-preview/1")),
            track("t2", "Second", Some("https://p.scdn.co/mp3-preview/2")),
        ],
        ..Default::default()
    }
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn test_search_page_payload() {
    let page = browser(daft_punk_catalog())
        .artist_search("Daft Punk")
        .await
        .unwrap();

    assert_eq!(page.term, "Daft Punk");
    assert_eq!(page.artist_list.len(), 1);
    let record = &page.artist_list[0];
    assert_eq!(record.name, "Daft Punk");
    assert_eq!(record.id, "abc");
    assert_eq!(record.thumbnail, "img2");
    assert_eq!(record.link_title, "Albums");
    assert_eq!(record.route_path, "/albums/abc");
}

#[tokio::test]
async fn test_search_without_matches_is_empty_page() {
    let page = browser(StubCatalog::default())
        .artist_search("zzzz")
        .await
        .unwrap();

    assert_eq!(page.total, 0);
    assert!(page.artist_list.is_empty());
}

#[tokio::test]
async fn test_tracks_page_payload() {
    let page = browser(tracks_catalog()).album_tracks("xyz").await.unwrap();

    assert_eq!(page.artist_name, "A");
    assert_eq!(page.album_name, "Album X");
    assert_eq!(page.track_list.len(), 2);
    assert_eq!(page.track_list[0].name, "First");
    assert_eq!(
        page.track_list[1].preview_url.as_deref(),
        Some("https://p.scdn.co/mp3-preview/2")
    );
}

#[tokio::test]
async fn test_albums_page_payload() {
    let page = browser(daft_punk_catalog())
        .artist_albums("abc")
        .await
        .unwrap();

    assert_eq!(page.artist_name, "Daft Punk");
    assert_eq!(page.album_list.len(), 2);
    assert_eq!(page.album_list[0].route_path, "/tracks/al1");
    assert_eq!(page.album_list[1].thumbnail, FALLBACK);
}

#[tokio::test]
async fn test_artist_search_route_renders_records() {
    let (status, body) = get(app(daft_punk_catalog()), "/artist-search?artist=Daft+Punk").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Daft Punk"));
    assert!(body.contains(r#"src="img2""#));
    assert!(body.contains(r#"href="/albums/abc""#));
    assert!(body.contains(">Albums<"));
}

#[tokio::test]
async fn test_artist_search_route_without_matches() {
    let (status, body) = get(app(StubCatalog::default()), "/artist-search?artist=nobody").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No artists found."));
}

#[tokio::test]
async fn test_artist_search_requires_term() {
    let (status, _) = get(app(StubCatalog::default()), "/artist-search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(app(StubCatalog::default()), "/artist-search?artist=+").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_search_query_renders_error_page() {
    let (status, body) = get(
        app(StubCatalog::default()),
        "/artist-search?artist=a&artist=b",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Something went wrong (400)"));
}

#[tokio::test]
async fn test_albums_route() {
    let (status, body) = get(app(daft_punk_catalog()), "/albums/abc").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Discovery"));
    assert!(body.contains(r#"href="/tracks/al1""#));
    assert!(body.contains(FALLBACK));
}

#[tokio::test]
async fn test_unknown_artist_is_not_found() {
    let (status, body) = get(app(daft_punk_catalog()), "/albums/unknown").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Something went wrong (404)"));
}

#[tokio::test]
async fn test_tracks_route() {
    let (status, body) = get(app(tracks_catalog()), "/tracks/xyz").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h2>A</h2>"));
    assert!(body.contains("First"));
    assert!(body.contains("Second"));
    assert!(body.contains("https://p.scdn.co/mp3-preview/2"));
}

#[tokio::test]
async fn test_index_and_root_redirect() {
    let (status, body) = get(app(StubCatalog::default()), "/index").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"action="/artist-search""#));

    let response = app(StubCatalog::default())
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/index");
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(app(StubCatalog::default()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "artistscope");
    assert_eq!(json["search"]["page_size"], 50);
    assert_eq!(json["search"]["max_results"], 1000);
}

#[tokio::test]
async fn test_static_stylesheet_is_served() {
    let (status, body) = get(app(StubCatalog::default()), "/styles.css").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(".cards"));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let (status, _) = get(app(StubCatalog::default()), "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
