use std::fmt::Display;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Ranking platform supported by the backend's /rank/{platform} endpoint
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// TMDB top-rated chart
    Tmdb,
    /// KOBIS daily box office
    Kobis,
    /// IMDB top-rated chart
    Imdb,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Tmdb, Platform::Kobis, Platform::Imdb];

    /// Path segment used when building the ranking URL
    pub fn path_segment(&self) -> &'static str {
        match self {
            Platform::Tmdb => "tmdb",
            Platform::Kobis => "kobis",
            Platform::Imdb => "imdb",
        }
    }

    /// Human-facing label
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Tmdb => "TMDB",
            Platform::Kobis => "KOBIS",
            Platform::Imdb => "IMDB",
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A movie returned by the search endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
}

impl Movie {
    /// Release year parsed from the backend's `YYYY-MM-DD` date string.
    ///
    /// The backend passes TMDB dates through verbatim, which includes empty
    /// strings for unreleased titles; those parse to `None`.
    pub fn release_year(&self) -> Option<i32> {
        let date = self.release_date.as_deref()?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .map(|d| d.year())
    }
}

/// One row of a platform ranking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedMovie {
    pub title: String,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub rank: Option<u32>,
}

/// A recommendation produced by the backend from free-form text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    /// Full display text (emotion summary plus the recommendation itself)
    pub result: String,
    /// Emotion the backend extracted from the input
    pub emotion: Option<String>,
    /// The recommendation body without the emotion preamble
    pub recommendation: Option<String>,
}

// ============================================================================
// Backend wire envelopes
// ============================================================================

/// Raw envelope returned by POST /recommend
///
/// The backend reports handled failures as a 200 response with an `error`
/// field instead of a non-2xx status, so every field is optional here and
/// the shape is resolved by [`RecommendEnvelope::into_recommendation`].
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendEnvelope {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub emotion: Option<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Message used when a success envelope carries no usable payload
pub const NO_ANSWER_MESSAGE: &str = "The server returned no usable answer.";

impl RecommendEnvelope {
    /// Collapses the envelope into a recommendation or an error
    ///
    /// A server-supplied `error` message wins over everything else; a missing
    /// or blank `result` on an otherwise successful envelope is reported with
    /// a fixed message.
    pub fn into_recommendation(self) -> AppResult<Recommendation> {
        if let Some(error) = self.error {
            return Err(AppError::ExternalApi(error));
        }

        match self.result {
            Some(result) if !result.trim().is_empty() => Ok(Recommendation {
                result,
                emotion: self.emotion,
                recommendation: self.recommendation,
            }),
            _ => Err(AppError::ExternalApi(NO_ANSWER_MESSAGE.to_string())),
        }
    }
}

/// Raw envelope returned by GET /search and GET /rank/{platform}
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListEnvelope<T> {
    #[serde(default)]
    pub results: Vec<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ListEnvelope<T> {
    /// Returns the result rows, or the server-supplied error if one is set
    pub fn into_results(self) -> AppResult<Vec<T>> {
        match self.error {
            Some(error) => Err(AppError::ExternalApi(error)),
            None => Ok(self.results),
        }
    }
}
