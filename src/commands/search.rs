use std::{sync::Arc, time::Duration};

use crate::{
    display,
    error::AppResult,
    models::Movie,
    services::{providers::MovieBackend, search},
};

const OVERVIEW_PREVIEW_CHARS: usize = 80;

/// Runs the search flow and prints results as a staggered list.
pub async fn run(
    backend: Arc<dyn MovieBackend>,
    query: &str,
    stagger: Duration,
) -> AppResult<()> {
    let movies = search::search_movies(backend, query).await?;

    if movies.is_empty() {
        println!("No results for \"{query}\".");
        return Ok(());
    }

    println!("{} results for \"{query}\":", movies.len());
    let rows: Vec<String> = movies.iter().map(format_row).collect();
    display::print_staggered(&rows, stagger).await;

    Ok(())
}

fn format_row(movie: &Movie) -> String {
    let rating = movie
        .rating
        .map(|r| format!("{r:.1}"))
        .unwrap_or_else(|| "N/A".to_string());

    let mut row = match movie.release_year() {
        Some(year) => format!("  {} ({})  ★ {}", movie.title, year, rating),
        None => format!("  {}  ★ {}", movie.title, rating),
    };

    if let Some(overview) = movie.overview.as_deref() {
        if !overview.is_empty() {
            row.push_str("\n      ");
            row.push_str(&preview(overview));
        }
    }

    row
}

/// First line of the overview, truncated to a screen-friendly length.
fn preview(overview: &str) -> String {
    let first_line = overview.lines().next().unwrap_or_default();
    let mut out: String = first_line.chars().take(OVERVIEW_PREVIEW_CHARS).collect();
    if first_line.chars().count() > OVERVIEW_PREVIEW_CHARS {
        out.push_str("...");
    }
    out
}
