use futures::future::try_join_all;

use crate::{
    error::CatalogError,
    spotify::CatalogApi,
    types::{Artist, SearchQuery},
    utils,
};

/// All artists matching a term, gathered by one fan-out pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FanOutResult {
    /// Total reported by the probe, before capping.
    pub total: u32,
    /// Number of page requests issued after the probe.
    pub pages: u32,
    pub items: Vec<Artist>,
}

/// Searches artists and collects every page concurrently.
///
/// A probe request (`limit=1`) learns the total, then `ceil(total /
/// page_size)` page requests run at the same time with offsets
/// `0, page_size, 2 * page_size, ...`. Results are concatenated in page
/// order, not arrival order. The first failing page fails the whole search
/// and drops the requests still in flight.
///
/// `max_results` caps how far the pages reach; the search endpoint refuses
/// offsets past its own window.
pub async fn search_all_artists(
    api: &dyn CatalogApi,
    term: &str,
    page_size: u32,
    max_results: u32,
) -> Result<FanOutResult, CatalogError> {
    let probe = SearchQuery::new(term, 1, 0)?;
    let query = SearchQuery::new(term, page_size, 0)?;

    let total = api.search_artists(&probe).await?.total;
    let offsets = utils::page_offsets(total.min(max_results), page_size);
    tracing::debug!(term = %query.term, total, pages = offsets.len(), "artist search fan-out");

    let requests = offsets.iter().map(|&offset| {
        let page = SearchQuery {
            offset,
            ..query.clone()
        };
        async move { api.search_artists(&page).await }
    });
    let pages = try_join_all(requests).await?;

    Ok(FanOutResult {
        total,
        pages: offsets.len() as u32,
        items: pages.into_iter().flat_map(|p| p.items).collect(),
    })
}
