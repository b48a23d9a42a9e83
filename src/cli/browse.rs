use tabled::Table;

use crate::{
    cli,
    config::Settings,
    error, success,
    types::{RecordTableRow, TrackTableRow, ViewModelRecord},
    utils, warning,
};

fn record_rows(records: &[ViewModelRecord]) -> Vec<RecordTableRow> {
    records
        .iter()
        .map(|r| RecordTableRow {
            name: utils::truncate(&r.name, 48),
            id: r.id.clone(),
            link: r.route_path.clone(),
        })
        .collect()
}

pub async fn search(settings: Settings, term: String) {
    let browser = cli::connect(&settings).await;

    let pb = cli::spinner("Searching artists...");
    let result = browser.artist_search(&term).await;
    pb.finish_and_clear();

    match result {
        Ok(page) if page.artist_list.is_empty() => {
            warning!("No artists found for \"{}\"", page.term)
        }
        Ok(page) => {
            println!("{}", Table::new(record_rows(&page.artist_list)));
            success!(
                "Found {} artists for \"{}\"",
                page.artist_list.len(),
                page.term
            );
        }
        Err(e) => error!("Artist search failed. Err: {}", e),
    }
}

pub async fn albums(settings: Settings, artist_id: String) {
    let browser = cli::connect(&settings).await;

    let pb = cli::spinner("Fetching albums...");
    let result = browser.artist_albums(&artist_id).await;
    pb.finish_and_clear();

    match result {
        Ok(page) => {
            println!("{}", page.artist_name);
            println!("{}", Table::new(record_rows(&page.album_list)));
        }
        Err(e) => error!("Failed to load albums for {}. Err: {}", artist_id, e),
    }
}

pub async fn tracks(settings: Settings, album_id: String) {
    let browser = cli::connect(&settings).await;

    let pb = cli::spinner("Fetching tracks...");
    let result = browser.album_tracks(&album_id).await;
    pb.finish_and_clear();

    match result {
        Ok(page) => {
            println!("{} - {}", page.artist_name, page.album_name);
            let rows: Vec<TrackTableRow> = page
                .track_list
                .into_iter()
                .map(|t| TrackTableRow {
                    name: utils::truncate(&t.name, 48),
                    preview: t.preview_url.unwrap_or_else(|| "-".to_string()),
                })
                .collect();
            println!("{}", Table::new(rows));
        }
        Err(e) => error!("Failed to load tracks for {}. Err: {}", album_id, e),
    }
}
