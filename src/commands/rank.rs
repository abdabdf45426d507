use std::{sync::Arc, time::Duration};

use crate::{
    display,
    error::AppResult,
    models::{Platform, RankedMovie},
    services::{providers::MovieBackend, ranking},
};

/// Rows shown per platform, matching what the backend serves.
const TOP_N: usize = 10;

/// Runs the ranking flow for one platform, or all of them in parallel.
pub async fn run(
    backend: Arc<dyn MovieBackend>,
    platform: Option<Platform>,
    all: bool,
    stagger: Duration,
) -> AppResult<()> {
    if all {
        let rankings = ranking::fetch_all_rankings(backend).await?;
        for (index, (platform, entries)) in rankings.iter().enumerate() {
            if index > 0 {
                println!();
            }
            print_platform(*platform, entries, stagger).await;
        }
    } else {
        let platform = platform.unwrap_or(Platform::Tmdb);
        let entries = ranking::fetch_ranking(backend, platform).await?;
        print_platform(platform, &entries, stagger).await;
    }

    Ok(())
}

async fn print_platform(platform: Platform, entries: &[RankedMovie], stagger: Duration) {
    if entries.is_empty() {
        println!("{}: no ranking data.", platform.label());
        return;
    }

    println!("{} top {}:", platform.label(), entries.len().min(TOP_N));
    let rows: Vec<String> = entries
        .iter()
        .take(TOP_N)
        .enumerate()
        .map(|(index, entry)| format_row(index, entry))
        .collect();
    display::print_staggered(&rows, stagger).await;
}

fn format_row(index: usize, entry: &RankedMovie) -> String {
    // Some platforms omit the rank field; fall back to list position.
    let rank = entry.rank.unwrap_or(index as u32 + 1);
    let rating = entry
        .rating
        .map(|r| format!("{r:.1}"))
        .unwrap_or_else(|| "N/A".to_string());

    format!("  {:>2}. {}  ★ {}", rank, entry.title, rating)
}
