use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinemood::{
    commands,
    config::Config,
    display::TerminalSurface,
    models::Platform,
    reveal::RevealController,
    services::providers::{MovieApi, MovieBackend},
};

#[derive(Parser, Debug)]
#[command(name = "cinemood")]
#[command(
    about = "Movie recommendations, search, and platform rankings from your terminal",
    long_about = None
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Describe your day and get a movie recommendation typed back at you
    Recommend {
        /// Free-form text about your day or mood
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Delay between typed characters in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// Search movies by title
    Search {
        /// Title to search for
        query: String,
    },
    /// Show a platform's top-10 movie ranking
    Rank {
        /// Platform to rank (defaults to tmdb)
        #[arg(long, value_enum)]
        platform: Option<Platform>,

        /// Fetch every platform in parallel
        #[arg(long, conflicts_with = "platform")]
        all: bool,
    },
}

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr so stdout stays clean for the typewriter.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinemood=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let backend: Arc<dyn MovieBackend> = Arc::new(MovieApi::new(
        config.backend_url.as_str(),
        config.request_timeout(),
    )?);

    match args.command {
        Command::Recommend { text, delay_ms } => {
            let delay = delay_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.char_delay());
            let surface = Arc::new(TerminalSurface::new());
            let controller = RevealController::with_delay(surface, delay);
            commands::recommend::run(backend, &controller, &text.join(" ")).await?;
        }
        Command::Search { query } => {
            commands::search::run(backend, &query, config.stagger_delay()).await?;
        }
        Command::Rank { platform, all } => {
            commands::rank::run(backend, platform, all, config.stagger_delay()).await?;
        }
    }

    Ok(())
}
