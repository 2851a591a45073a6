/// Catalog data provider abstraction
///
/// The browsing core never talks to the network directly; it goes through
/// this trait so the aggregator can be exercised against mocks and the HTTP
/// client can be swapped without touching browsing logic.
use crate::{
    error::AppResult,
    models::{CatalogItem, VideoEntry},
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trending window selector for the trending endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendingWindow {
    Day,
    Week,
}

impl TrendingWindow {
    pub fn path_segment(&self) -> &'static str {
        match self {
            TrendingWindow::Day => "day",
            TrendingWindow::Week => "week",
        }
    }
}

/// Genres the discover rows are built from, carrying the catalog API's
/// fixed numeric ids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Genre {
    Action = 28,
    Comedy = 35,
    Horror = 27,
}

impl Genre {
    pub fn id(&self) -> u32 {
        *self as u32
    }
}

/// Trait for catalog data providers
///
/// One method per consumed endpoint. Every method returns normalized domain
/// types; raw wire shapes never leave the provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Titles trending over the given window
    async fn trending(&self, window: TrendingWindow) -> AppResult<Vec<CatalogItem>>;

    /// Current popular movies
    async fn popular(&self) -> AppResult<Vec<CatalogItem>>;

    /// All-time top rated movies
    async fn top_rated(&self) -> AppResult<Vec<CatalogItem>>;

    /// Movies filtered to a single genre
    async fn discover(&self, genre: Genre) -> AppResult<Vec<CatalogItem>>;

    /// Free-text title search
    async fn search_titles(&self, query: &str) -> AppResult<Vec<CatalogItem>>;

    /// Video listing for one title
    async fn videos(&self, item_id: u64) -> AppResult<Vec<VideoEntry>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_ids_match_catalog_namespace() {
        assert_eq!(Genre::Action.id(), 28);
        assert_eq!(Genre::Comedy.id(), 35);
        assert_eq!(Genre::Horror.id(), 27);
    }

    #[test]
    fn test_trending_window_path_segments() {
        assert_eq!(TrendingWindow::Day.path_segment(), "day");
        assert_eq!(TrendingWindow::Week.path_segment(), "week");
    }
}
