//! HTML rendering of the browse pages.
//!
//! Pages share one layout; list pages use the same card markup for artists
//! and albums. All interpolated text goes through [`escape_html`].

use crate::{
    types::{AlbumsPage, ArtistSearchPage, TrackRecord, TracksPage, ViewModelRecord},
    utils::escape_html,
};

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <link rel="stylesheet" href="/styles.css">
</head>
<body>
  <header><a href="/index">Artistscope</a></header>
  <main>
{body}
  </main>
</body>
</html>
"#,
        title = escape_html(title),
        body = body
    )
}

fn card(record: &ViewModelRecord) -> String {
    format!(
        r#"    <li class="card">
      <img src="{thumbnail}" alt="{name}">
      <h3>{name}</h3>
      <a class="button" href="{route}">{link}</a>
    </li>
"#,
        thumbnail = escape_html(&record.thumbnail),
        name = escape_html(&record.name),
        route = escape_html(&record.route_path),
        link = escape_html(&record.link_title),
    )
}

fn card_list(records: &[ViewModelRecord], empty: &str) -> String {
    if records.is_empty() {
        return format!("    <p class=\"empty\">{}</p>\n", escape_html(empty));
    }
    let cards: String = records.iter().map(card).collect();
    format!("    <ul class=\"cards\">\n{cards}    </ul>\n")
}

fn track_item(track: &TrackRecord) -> String {
    let preview = match &track.preview_url {
        Some(url) => format!(
            "<audio controls src=\"{}\"></audio>",
            escape_html(url)
        ),
        None => "<span class=\"no-preview\">No preview available</span>".to_string(),
    };
    format!(
        "      <li class=\"track\"><span>{name}</span> {preview}</li>\n",
        name = escape_html(&track.name),
        preview = preview
    )
}

pub fn home() -> String {
    layout(
        "Artistscope",
        r#"    <h1>Find an artist</h1>
    <form action="/artist-search" method="get">
      <input type="text" name="artist" placeholder="Artist name" required>
      <button type="submit">Search</button>
    </form>
"#,
    )
}

pub fn artist_search(page: &ArtistSearchPage) -> String {
    let heading = format!(
        "    <h1>Results for &quot;{}&quot;</h1>\n",
        escape_html(&page.term)
    );
    let body = heading + &card_list(&page.artist_list, "No artists found.");
    layout(&format!("{} - Artistscope", page.term), &body)
}

pub fn albums(page: &AlbumsPage) -> String {
    let heading = format!("    <h1>{}</h1>\n", escape_html(&page.artist_name));
    let body = heading + &card_list(&page.album_list, "This artist has no albums.");
    layout(&format!("{} - Albums", page.artist_name), &body)
}

pub fn tracks(page: &TracksPage) -> String {
    let items: String = page.track_list.iter().map(track_item).collect();
    let body = format!(
        "    <h1>{album}</h1>\n    <h2>{artist}</h2>\n    <ol class=\"tracks\">\n{items}    </ol>\n",
        album = escape_html(&page.album_name),
        artist = escape_html(&page.artist_name),
        items = items
    );
    layout(&format!("{} - Tracks", page.album_name), &body)
}

pub fn error_page(status: u16, message: &str) -> String {
    let body = format!(
        "    <h1>Something went wrong ({status})</h1>\n    <p>{message}</p>\n    <a href=\"/index\">Back to search</a>\n",
        status = status,
        message = escape_html(message)
    );
    layout("Error - Artistscope", &body)
}
