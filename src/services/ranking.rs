use crate::{
    error::{AppError, AppResult},
    models::{Platform, RankedMovie},
    services::providers::MovieBackend,
};
use std::sync::Arc;

/// Fetches the ranking for a single platform.
pub async fn fetch_ranking(
    backend: Arc<dyn MovieBackend>,
    platform: Platform,
) -> AppResult<Vec<RankedMovie>> {
    backend.ranking(platform).await
}

/// Fetches every platform's ranking in parallel
///
/// Platforms that fail are logged and skipped; the call only fails when no
/// platform produced data. Results come back in [`Platform::ALL`] order.
pub async fn fetch_all_rankings(
    backend: Arc<dyn MovieBackend>,
) -> AppResult<Vec<(Platform, Vec<RankedMovie>)>> {
    let mut tasks = Vec::new();

    for platform in Platform::ALL {
        let backend = Arc::clone(&backend);
        let task = tokio::spawn(async move { (platform, backend.ranking(platform).await) });
        tasks.push(task);
    }

    let mut results = Vec::new();
    let mut errors = Vec::new();

    for task in tasks {
        match task.await {
            Ok((platform, Ok(entries))) => results.push((platform, entries)),
            Ok((platform, Err(e))) => {
                tracing::error!(platform = %platform, error = %e, "Ranking fetch failed");
                errors.push(e);
            }
            Err(e) => {
                tracing::error!(error = %e, "Task join error");
                errors.push(AppError::Internal(e.to_string()));
            }
        }
    }

    if !errors.is_empty() {
        tracing::warn!(
            success_count = results.len(),
            error_count = errors.len(),
            "Partial ranking fetch failure"
        );
    }

    if results.is_empty() && !errors.is_empty() {
        return Err(AppError::ExternalApi(
            "Failed to fetch any ranking data".to_string(),
        ));
    }

    Ok(results)
}
