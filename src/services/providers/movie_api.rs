/// HTTP client for the movie backend
///
/// Endpoints:
/// - POST /recommend with {"emotion": <text>} → recommendation envelope
/// - GET  /search?query=<title>              → results envelope
/// - GET  /rank/{platform}                   → results envelope (top 10)
///
/// The backend reports handled failures inside a 200 envelope (`error`
/// field); non-2xx statuses only appear when something upstream of the
/// backend's handlers breaks.
use crate::{
    error::{AppError, AppResult},
    models::{ListEnvelope, Movie, Platform, RankedMovie, RecommendEnvelope, Recommendation},
    services::providers::MovieBackend,
};
use reqwest::Client as HttpClient;
use serde_json::json;
use std::time::Duration;
use uuid::Uuid;

/// Header used to correlate client requests with backend logs
pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
pub struct MovieApi {
    http_client: HttpClient,
    base_url: String,
}

impl MovieApi {
    /// Creates a client for the backend at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait::async_trait]
impl MovieBackend for MovieApi {
    async fn recommend(&self, text: &str) -> AppResult<Recommendation> {
        if text.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Recommendation text cannot be empty".to_string(),
            ));
        }

        let request_id = Uuid::new_v4();
        let url = self.endpoint("recommend");

        let response = self
            .http_client
            .post(&url)
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .json(&json!({ "emotion": text }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Backend returned status {}: {}",
                status, body
            )));
        }

        let envelope: RecommendEnvelope = response.json().await?;
        let recommendation = envelope.into_recommendation()?;

        tracing::info!(
            request_id = %request_id,
            emotion = recommendation.emotion.as_deref().unwrap_or("unknown"),
            chars = recommendation.result.chars().count(),
            "Recommendation received"
        );

        Ok(recommendation)
    }

    async fn search(&self, query: &str) -> AppResult<Vec<Movie>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let request_id = Uuid::new_v4();
        let url = self.endpoint("search");

        let response = self
            .http_client
            .get(&url)
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .query(&[("query", query)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Backend returned status {}: {}",
                status, body
            )));
        }

        let envelope: ListEnvelope<Movie> = response.json().await?;
        let movies = envelope.into_results()?;

        tracing::info!(
            request_id = %request_id,
            query = %query,
            results = movies.len(),
            "Search completed"
        );

        Ok(movies)
    }

    async fn ranking(&self, platform: Platform) -> AppResult<Vec<RankedMovie>> {
        let request_id = Uuid::new_v4();
        let url = self.endpoint(&format!("rank/{}", platform.path_segment()));

        let response = self
            .http_client
            .get(&url)
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Backend returned status {}: {}",
                status, body
            )));
        }

        let envelope: ListEnvelope<RankedMovie> = response.json().await?;
        let entries = envelope.into_results()?;

        tracing::info!(
            request_id = %request_id,
            platform = %platform,
            entries = entries.len(),
            "Ranking fetched"
        );

        Ok(entries)
    }
}
