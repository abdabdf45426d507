//! Contract tests for the HTTP backend client, against a local mock server.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cinemood::models::Platform;
use cinemood::services::providers::{MovieApi, MovieBackend};
use cinemood::AppError;

fn client(server: &MockServer) -> MovieApi {
    MovieApi::new(server.uri(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn recommend_posts_emotion_and_returns_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/recommend"))
        .and(body_json(json!({ "emotion": "had a rough day at work" })))
        .and(header_exists("x-request-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "Detected mood: sadness\n\nTry Paddington 2.",
            "emotion": "sadness",
            "recommendation": "Try Paddington 2.",
            "success": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let recommendation = client(&server)
        .recommend("had a rough day at work")
        .await
        .unwrap();

    assert!(recommendation.result.starts_with("Detected mood: sadness"));
    assert_eq!(recommendation.emotion.as_deref(), Some("sadness"));
    assert_eq!(
        recommendation.recommendation.as_deref(),
        Some("Try Paddington 2.")
    );
}

#[tokio::test]
async fn recommend_surfaces_server_error_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "error": "Could not classify the emotion." })),
        )
        .mount(&server)
        .await;

    let err = client(&server).recommend("???").await.unwrap_err();
    match err {
        AppError::ExternalApi(message) => assert_eq!(message, "Could not classify the emotion."),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn recommend_reports_empty_success_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    let err = client(&server).recommend("fine day").await.unwrap_err();
    assert!(matches!(err, AppError::ExternalApi(_)));
}

#[tokio::test]
async fn recommend_rejects_blank_input_without_a_request() {
    let server = MockServer::start().await;
    // No mocks mounted: any request would fail the test with a 404.

    let err = client(&server).recommend("   ").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn search_sends_query_and_parses_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("query", "inception"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {
                    "title": "Inception",
                    "release_date": "2010-07-15",
                    "rating": 8.4,
                    "overview": "A thief who steals corporate secrets",
                    "poster": "https://image.tmdb.org/t/p/w500/poster.jpg"
                },
                {
                    "title": "Inception: The Cobol Job",
                    "release_date": "",
                    "rating": null,
                    "overview": null,
                    "poster": null
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let movies = client(&server).search("inception").await.unwrap();

    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].title, "Inception");
    assert_eq!(movies[0].release_year(), Some(2010));
    assert_eq!(movies[1].rating, None);
    assert_eq!(movies[1].release_year(), None);
}

#[tokio::test]
async fn search_surfaces_server_error_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "error": "TMDB API call failed." })),
        )
        .mount(&server)
        .await;

    let err = client(&server).search("inception").await.unwrap_err();
    match err {
        AppError::ExternalApi(message) => assert_eq!(message, "TMDB API call failed."),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn search_rejects_blank_query() {
    let server = MockServer::start().await;

    let err = client(&server).search("").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn ranking_hits_the_platform_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rank/kobis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                { "title": "Box Office Hit", "poster": null, "rating": null, "rank": 1 },
                { "title": "Runner Up", "poster": null, "rating": null, "rank": 2 }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let entries = client(&server).ranking(Platform::Kobis).await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].title, "Box Office Hit");
    assert_eq!(entries[0].rank, Some(1));
    assert_eq!(entries[0].rating, None);
}

#[tokio::test]
async fn non_success_status_maps_to_external_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rank/tmdb"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream scrape broke"))
        .mount(&server)
        .await;

    let err = client(&server).ranking(Platform::Tmdb).await.unwrap_err();
    match err {
        AppError::ExternalApi(message) => {
            assert!(message.contains("500"));
            assert!(message.contains("upstream scrape broke"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
