/// Movie backend abstraction
///
/// The application is a thin client: recommendation, search, and ranking are
/// all computed remotely, and this trait is the seam those calls go through.
/// One HTTP implementation exists; tests substitute their own.
use crate::{
    error::AppResult,
    models::{Movie, Platform, RankedMovie, Recommendation},
};

pub mod movie_api;

pub use movie_api::MovieApi;

/// Trait for the remote movie backend
///
/// All three operations are direct request/response exchanges. The client
/// never post-processes the payloads beyond envelope unwrapping, so whatever
/// the backend returns is what gets shown.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieBackend: Send + Sync {
    /// Asks the backend for a movie recommendation based on free-form text
    /// about the user's day or mood.
    async fn recommend(&self, text: &str) -> AppResult<Recommendation>;

    /// Searches movies by title.
    async fn search(&self, query: &str) -> AppResult<Vec<Movie>>;

    /// Fetches the top-10 ranking for one platform.
    async fn ranking(&self, platform: Platform) -> AppResult<Vec<RankedMovie>>;
}
