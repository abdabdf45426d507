use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    reveal::RevealController,
    services::{providers::MovieBackend, recommend},
};

/// Shown when the backend cannot be reached at all.
const CONNECT_FALLBACK: &str = "Could not reach the recommendation server.";

/// Runs the recommendation flow: submit the text, then reveal the outcome.
///
/// A server-supplied error message is revealed exactly like a successful
/// answer; only transport-level failures fall back to a canned line. The
/// reveal controller is indifferent to which kind of text it gets.
pub async fn run(
    backend: Arc<dyn MovieBackend>,
    controller: &RevealController,
    text: &str,
) -> AppResult<()> {
    // Stop any reveal still going while the request is in flight.
    controller.interrupt().await;

    let message = match recommend::fetch_recommendation(backend, text).await {
        Ok(recommendation) => recommendation.result,
        Err(AppError::InvalidInput(msg)) => return Err(AppError::InvalidInput(msg)),
        Err(AppError::ExternalApi(message)) => message,
        Err(err) => {
            tracing::warn!(error = %err, "Recommendation request failed");
            CONNECT_FALLBACK.to_string()
        }
    };

    let _ = controller.reveal(message).await;
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::DisplaySurface;
    use crate::models::Recommendation;
    use crate::services::providers::MockMovieBackend;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct CollectingSurface {
        rendered: Mutex<Vec<String>>,
    }

    impl CollectingSurface {
        fn last(&self) -> Option<String> {
            self.rendered.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl DisplaySurface for CollectingSurface {
        async fn clear(&self) {}
        async fn render(&self, text: &str) {
            self.rendered.lock().unwrap().push(text.to_string());
        }
    }

    fn setup() -> (Arc<CollectingSurface>, RevealController) {
        let surface = Arc::new(CollectingSurface::default());
        let controller = RevealController::with_delay(
            Arc::clone(&surface) as Arc<dyn DisplaySurface>,
            Duration::from_millis(1),
        );
        (surface, controller)
    }

    #[tokio::test(start_paused = true)]
    async fn test_successful_answer_is_revealed_in_full() {
        let mut backend = MockMovieBackend::new();
        backend.expect_recommend().returning(|_| {
            Ok(Recommendation {
                result: "Watch Up.".to_string(),
                emotion: Some("joy".to_string()),
                recommendation: Some("Watch Up.".to_string()),
            })
        });

        let (surface, controller) = setup();
        run(Arc::new(backend), &controller, "great day").await.unwrap();

        assert_eq!(surface.last().as_deref(), Some("Watch Up."));
        assert_eq!(controller.displayed(), "Watch Up.");
    }

    #[tokio::test(start_paused = true)]
    async fn test_server_error_message_is_revealed_verbatim() {
        let mut backend = MockMovieBackend::new();
        backend.expect_recommend().returning(|_| {
            Err(AppError::ExternalApi(
                "Could not classify the emotion.".to_string(),
            ))
        });

        let (surface, controller) = setup();
        run(Arc::new(backend), &controller, "???").await.unwrap();

        assert_eq!(
            surface.last().as_deref(),
            Some("Could not classify the emotion.")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_transport_failure_reveals_fallback_line() {
        let mut backend = MockMovieBackend::new();
        backend
            .expect_recommend()
            .returning(|_| Err(AppError::Internal("connection refused".to_string())));

        let (surface, controller) = setup();
        run(Arc::new(backend), &controller, "rough day").await.unwrap();

        assert_eq!(surface.last().as_deref(), Some(CONNECT_FALLBACK));
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_input_is_rejected_before_revealing() {
        let mut backend = MockMovieBackend::new();
        backend
            .expect_recommend()
            .returning(|_| Err(AppError::InvalidInput("empty".to_string())));

        let (surface, controller) = setup();
        let err = run(Arc::new(backend), &controller, "   ").await.unwrap_err();

        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(surface.last(), None);
    }
}
