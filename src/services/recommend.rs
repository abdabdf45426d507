use crate::{error::AppResult, models::Recommendation, services::providers::MovieBackend};
use std::sync::Arc;

/// Service function for emotion-based recommendations
///
/// The backend does all the work (emotion analysis, then the actual
/// recommendation); this just forwards the user's text.
pub async fn fetch_recommendation(
    backend: Arc<dyn MovieBackend>,
    text: &str,
) -> AppResult<Recommendation> {
    backend.recommend(text).await
}
