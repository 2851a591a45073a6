/// TMDB catalog provider
///
/// Consumes the v3 movie catalog endpoints with key-in-query authentication.
/// Every response decodes through the raw wire types and is normalized to
/// domain types before it leaves this module.
///
/// Endpoints:
/// - /trending/movie/{day|week}  trending shelves and the featured pick
/// - /movie/popular, /movie/top_rated
/// - /discover/movie?with_genres={id}  genre shelves
/// - /search/movie?query=...  free-text search
/// - /movie/{id}/videos  trailer listing
use crate::{
    config::CatalogConfig,
    error::{AppError, AppResult},
    models::{ApiMovieList, ApiVideoList, CatalogItem, VideoEntry},
    services::providers::{CatalogProvider, Genre, TrendingWindow},
};
use reqwest::Client as HttpClient;

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbProvider {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key: config.api_key,
            api_url: config.base_url,
        }
    }

    /// Fetch a movie-list endpoint and normalize the page of results
    async fn fetch_items(&self, path: &str, extra: &[(&str, &str)]) -> AppResult<Vec<CatalogItem>> {
        let url = format!("{}{}", self.api_url, path);
        let mut query: Vec<(&str, &str)> = vec![("api_key", self.api_key.as_str())];
        query.extend_from_slice(extra);

        let response = self.http_client.get(&url).query(&query).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Catalog API returned status {}: {}",
                status, body
            )));
        }

        let list: ApiMovieList = response.json().await?;
        Ok(list.results.into_iter().map(CatalogItem::from).collect())
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbProvider {
    async fn trending(&self, window: TrendingWindow) -> AppResult<Vec<CatalogItem>> {
        let path = format!("/trending/movie/{}", window.path_segment());
        let items = self.fetch_items(&path, &[]).await?;

        tracing::debug!(
            window = window.path_segment(),
            results = items.len(),
            provider = "tmdb",
            "Trending fetched"
        );

        Ok(items)
    }

    async fn popular(&self) -> AppResult<Vec<CatalogItem>> {
        self.fetch_items("/movie/popular", &[]).await
    }

    async fn top_rated(&self) -> AppResult<Vec<CatalogItem>> {
        self.fetch_items("/movie/top_rated", &[]).await
    }

    async fn discover(&self, genre: Genre) -> AppResult<Vec<CatalogItem>> {
        let genre_id = genre.id().to_string();
        self.fetch_items("/discover/movie", &[("with_genres", genre_id.as_str())])
            .await
    }

    async fn search_titles(&self, query: &str) -> AppResult<Vec<CatalogItem>> {
        let items = self.fetch_items("/search/movie", &[("query", query)]).await?;

        tracing::info!(
            query = %query,
            results = items.len(),
            provider = "tmdb",
            "Title search completed"
        );

        Ok(items)
    }

    async fn videos(&self, item_id: u64) -> AppResult<Vec<VideoEntry>> {
        let url = format!("{}/movie/{}/videos", self.api_url, item_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Catalog API returned status {}: {}",
                status, body
            )));
        }

        let list: ApiVideoList = response.json().await?;
        let videos: Vec<VideoEntry> = list.results.into_iter().map(VideoEntry::from).collect();

        tracing::debug!(
            item_id = item_id,
            videos = videos.len(),
            provider = "tmdb",
            "Video listing fetched"
        );

        Ok(videos)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_provider() -> TmdbProvider {
        TmdbProvider::new(CatalogConfig {
            api_key: "test_key".to_string(),
            base_url: "http://test.local/3".to_string(),
            image_base_url: "http://img.local/w500".to_string(),
            backdrop_base_url: "http://img.local/w1280".to_string(),
        })
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(create_test_provider().name(), "tmdb");
    }

    #[test]
    fn test_movie_page_deserialization() {
        let json = r#"{
            "page": 1,
            "results": [
                {"id": 550, "title": "Fight Club", "vote_average": 8.4, "release_date": "1999-10-15"},
                {"id": 66732, "name": "Stranger Things", "first_air_date": "2016-07-15"}
            ],
            "total_pages": 1
        }"#;

        let list: ApiMovieList = serde_json::from_str(json).unwrap();
        let items: Vec<CatalogItem> = list.results.into_iter().map(CatalogItem::from).collect();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Fight Club");
        assert_eq!(items[1].title, "Stranger Things");
        assert_eq!(items[1].release_year(), Some(2016));
    }

    #[test]
    fn test_video_listing_deserialization() {
        let json = r#"{
            "id": 550,
            "results": [
                {"key": "abc", "site": "YouTube", "type": "Teaser", "name": "Teaser"},
                {"key": "def", "site": "YouTube", "type": "Trailer", "name": "Official Trailer"}
            ]
        }"#;

        let list: ApiVideoList = serde_json::from_str(json).unwrap();
        let videos: Vec<VideoEntry> = list.results.into_iter().map(VideoEntry::from).collect();

        assert_eq!(videos.len(), 2);
        assert!(!videos[0].is_playable_trailer());
        assert!(videos[1].is_playable_trailer());
    }
}
