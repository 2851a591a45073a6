/// Catalog aggregation facade
///
/// The single read path between the view layer and the catalog API. Every
/// operation is infallible by contract: failures are absorbed here and
/// replaced with the built-in seed catalog or an empty result, so callers
/// never branch on errors.
use std::sync::Arc;

use crate::{
    models::{CatalogItem, CategorySet, TrailerKey},
    services::{
        providers::{CatalogProvider, Genre, TrendingWindow},
        seed,
    },
};

/// Seed entries heading the live trending mix
const SEED_TRENDING_TAKE: usize = 5;
/// Keyword search results mixed in behind the seed block
const KEYWORD_RESULTS_TAKE: usize = 3;
/// Live weekly trending entries closing the mix
const WEEKLY_TRENDING_TAKE: usize = 15;

pub struct CatalogAggregator {
    provider: Arc<dyn CatalogProvider>,
    trending_keyword: String,
}

impl CatalogAggregator {
    pub fn new(provider: Arc<dyn CatalogProvider>, trending_keyword: impl Into<String>) -> Self {
        Self {
            provider,
            trending_keyword: trending_keyword.into(),
        }
    }

    /// The hero-slot item: first result of daily trending, or the seed
    /// featured entry when the lookup fails or comes back empty
    pub async fn load_featured(&self) -> CatalogItem {
        match self.provider.trending(TrendingWindow::Day).await {
            Ok(items) => match items.into_iter().next() {
                Some(first) => first,
                None => {
                    tracing::warn!(
                        provider = self.provider.name(),
                        "Daily trending came back empty; serving seed featured item"
                    );
                    seed::seed_featured()
                }
            },
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    provider = self.provider.name(),
                    "Featured lookup failed; serving seed featured item"
                );
                seed::seed_featured()
            }
        }
    }

    /// All six category shelves, fetched jointly
    ///
    /// The seven queries run concurrently; if any one of them fails the
    /// whole set is replaced by the seed catalog. Partial mixes are never
    /// served. A query succeeding with an empty page is a success.
    pub async fn load_categories(&self) -> CategorySet {
        let (weekly, popular, top_rated, action, comedy, horror, keyword) = tokio::join!(
            self.provider.trending(TrendingWindow::Week),
            self.provider.popular(),
            self.provider.top_rated(),
            self.provider.discover(Genre::Action),
            self.provider.discover(Genre::Comedy),
            self.provider.discover(Genre::Horror),
            self.provider.search_titles(&self.trending_keyword),
        );

        match (weekly, popular, top_rated, action, comedy, horror, keyword) {
            (Ok(weekly), Ok(popular), Ok(top_rated), Ok(action), Ok(comedy), Ok(horror), Ok(keyword)) => {
                tracing::info!(
                    trending = weekly.len(),
                    popular = popular.len(),
                    keyword_hits = keyword.len(),
                    "Category shelves loaded"
                );
                CategorySet {
                    trending: mixed_trending(keyword, weekly),
                    popular,
                    top_rated,
                    action,
                    comedy,
                    horror,
                }
            }
            (weekly, popular, top_rated, action, comedy, horror, keyword) => {
                let first_error = [
                    weekly.err(),
                    popular.err(),
                    top_rated.err(),
                    action.err(),
                    comedy.err(),
                    horror.err(),
                    keyword.err(),
                ]
                .into_iter()
                .flatten()
                .next();

                if let Some(e) = first_error {
                    tracing::warn!(
                        error = %e,
                        provider = self.provider.name(),
                        "Category load failed; serving seed catalog"
                    );
                }
                seed::seed_catalog()
            }
        }
    }

    /// Free-text search; blank terms short-circuit without a network call
    /// and failures collapse to an empty result
    pub async fn search(&self, term: &str) -> Vec<CatalogItem> {
        if term.trim().is_empty() {
            return Vec::new();
        }

        match self.provider.search_titles(term).await {
            Ok(results) => results,
            Err(e) => {
                tracing::warn!(
                    query = %term,
                    error = %e,
                    "Search failed; returning no results"
                );
                Vec::new()
            }
        }
    }

    /// First playable trailer for a title, if its video listing has one
    pub async fn fetch_trailer(&self, item_id: u64) -> Option<TrailerKey> {
        match self.provider.videos(item_id).await {
            Ok(videos) => {
                let key = videos
                    .into_iter()
                    .find(|v| v.is_playable_trailer())
                    .map(|v| TrailerKey(v.key));
                if key.is_none() {
                    tracing::debug!(item_id = item_id, "No playable trailer in video listing");
                }
                key
            }
            Err(e) => {
                tracing::warn!(item_id = item_id, error = %e, "Trailer lookup failed");
                None
            }
        }
    }
}

/// Seed block first, then the keyword picks, then the live weekly slice.
/// Duplicates across the three sources are kept as-is.
fn mixed_trending(keyword_results: Vec<CatalogItem>, weekly: Vec<CatalogItem>) -> Vec<CatalogItem> {
    let mut mixed: Vec<CatalogItem> = seed::seed_trending()
        .into_iter()
        .take(SEED_TRENDING_TAKE)
        .collect();
    mixed.extend(keyword_results.into_iter().take(KEYWORD_RESULTS_TAKE));
    mixed.extend(weekly.into_iter().take(WEEKLY_TRENDING_TAKE));
    mixed
}
