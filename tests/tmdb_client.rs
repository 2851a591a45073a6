use httpmock::prelude::*;
use serde_json::json;

use quriosity::config::CatalogConfig;
use quriosity::error::AppError;
use quriosity::services::providers::{CatalogProvider, Genre, TmdbProvider, TrendingWindow};

fn provider_for(server: &MockServer) -> TmdbProvider {
    TmdbProvider::new(CatalogConfig {
        api_key: "test_key".to_string(),
        base_url: server.base_url(),
        image_base_url: "https://img.local/w500".to_string(),
        backdrop_base_url: "https://img.local/w1280".to_string(),
    })
}

fn movie_page() -> serde_json::Value {
    json!({
        "page": 1,
        "results": [
            {
                "id": 550,
                "title": "Fight Club",
                "overview": "An insomniac office worker crosses paths with a soap maker.",
                "poster_path": "/fight_club.jpg",
                "vote_average": 8.4,
                "vote_count": 26000,
                "release_date": "1999-10-15"
            },
            {
                "id": 66732,
                "name": "Stranger Things",
                "first_air_date": "2016-07-15"
            }
        ],
        "total_pages": 500
    })
}

#[tokio::test]
async fn test_trending_hits_windowed_path_with_api_key() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/trending/movie/day")
            .query_param("api_key", "test_key");
        then.status(200).json_body(movie_page());
    });

    let items = provider_for(&server)
        .trending(TrendingWindow::Day)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Fight Club");
    // Series-shaped records normalize through the same path
    assert_eq!(items[1].title, "Stranger Things");
    assert_eq!(items[1].release_year(), Some(2016));
}

#[tokio::test]
async fn test_weekly_trending_uses_week_segment() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/trending/movie/week")
            .query_param("api_key", "test_key");
        then.status(200).json_body(json!({"results": []}));
    });

    let items = provider_for(&server)
        .trending(TrendingWindow::Week)
        .await
        .unwrap();

    mock.assert();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_popular_and_top_rated_paths() {
    let server = MockServer::start_async().await;
    let popular = server.mock(|when, then| {
        when.method(GET)
            .path("/movie/popular")
            .query_param("api_key", "test_key");
        then.status(200).json_body(movie_page());
    });
    let top_rated = server.mock(|when, then| {
        when.method(GET)
            .path("/movie/top_rated")
            .query_param("api_key", "test_key");
        then.status(200).json_body(json!({"results": []}));
    });

    let provider = provider_for(&server);
    assert_eq!(provider.popular().await.unwrap().len(), 2);
    assert!(provider.top_rated().await.unwrap().is_empty());

    popular.assert();
    top_rated.assert();
}

#[tokio::test]
async fn test_discover_sends_fixed_genre_id() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/discover/movie")
            .query_param("api_key", "test_key")
            .query_param("with_genres", "27");
        then.status(200).json_body(movie_page());
    });

    let items = provider_for(&server).discover(Genre::Horror).await.unwrap();

    mock.assert();
    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn test_search_url_encodes_the_query() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/search/movie")
            .query_param("api_key", "test_key")
            .query_param("query", "the matrix & friends");
        then.status(200).json_body(movie_page());
    });

    let items = provider_for(&server)
        .search_titles("the matrix & friends")
        .await
        .unwrap();

    mock.assert();
    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn test_videos_path_and_normalization() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/movie/603/videos")
            .query_param("api_key", "test_key");
        then.status(200).json_body(json!({
            "id": 603,
            "results": [
                {"key": "teaser", "site": "YouTube", "type": "Teaser", "name": "Teaser"},
                {"key": "trailer", "site": "YouTube", "type": "Trailer", "name": "Official Trailer"}
            ]
        }));
    });

    let videos = provider_for(&server).videos(603).await.unwrap();

    mock.assert();
    assert_eq!(videos.len(), 2);
    assert!(videos.iter().any(|v| v.is_playable_trailer() && v.key == "trailer"));
}

#[tokio::test]
async fn test_non_success_status_maps_to_external_api_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/movie/popular");
        then.status(500).body("upstream exploded");
    });

    let err = provider_for(&server).popular().await.unwrap_err();
    match err {
        AppError::ExternalApi(msg) => {
            assert!(msg.contains("500"));
            assert!(msg.contains("upstream exploded"));
        }
        other => panic!("expected ExternalApi error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_page_without_results_field_is_an_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/movie/popular");
        then.status(200).json_body(json!({"page": 1, "total_pages": 1}));
    });

    // Malformed success bodies must surface as errors so the aggregator
    // can fall back, never as an empty shelf
    assert!(provider_for(&server).popular().await.is_err());
}
