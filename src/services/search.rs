use crate::{error::AppResult, models::Movie, services::providers::MovieBackend};
use std::sync::Arc;

/// Service function for movie search
///
/// Delegates to the configured MovieBackend, keeping command handling
/// separate from transport concerns.
pub async fn search_movies(backend: Arc<dyn MovieBackend>, query: &str) -> AppResult<Vec<Movie>> {
    backend.search(query).await
}
