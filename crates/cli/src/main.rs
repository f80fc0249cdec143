use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::Catalog;
use server::{Config, Recommendation, Recommender};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Maximum number of titles printed by `search`
const SEARCH_LIMIT: usize = 20;

/// ReelRecs - Movie Recommendation Engine
#[derive(Parser)]
#[command(name = "reel-recs")]
#[command(about = "Movie recommendations from precomputed similarity scores", long_about = None)]
struct Cli {
    /// Directory holding movie_list.dat and similarity.dat
    #[arg(short, long, env = "MODEL_DIR", default_value = "model")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend five movies similar to a title
    Recommend {
        /// Exact catalog title
        #[arg(long)]
        title: String,

        /// Show the similarity score and TMDB id for each recommendation
        #[arg(long)]
        explain: bool,
    },

    /// Search for movies by title
    Search {
        /// Movie title to search for (case-insensitive substring match)
        #[arg(long)]
        title: String,
    },

    /// List catalog titles in catalog order
    Titles {
        /// Print at most this many titles
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let catalog = Arc::new(load_catalog(&cli.data_dir)?);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend { title, explain } => {
            handle_recommend(catalog, &title, explain).await?
        }
        Commands::Search { title } => handle_search(&catalog, &title),
        Commands::Titles { limit } => handle_titles(&catalog, limit),
    }

    Ok(())
}

fn load_catalog(data_dir: &Path) -> Result<Catalog> {
    println!("Loading catalog from {}...", data_dir.display());
    let start = Instant::now();
    let catalog = Catalog::load_from_dir(data_dir)
        .with_context(|| format!("Failed to load catalog from {}", data_dir.display()))?;
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );
    Ok(catalog)
}

/// Handle the 'recommend' command
async fn handle_recommend(
    catalog: Arc<Catalog>,
    title: &str,
    explain: bool,
) -> Result<()> {
    let config = Config::from_env().context("TMDB_API_KEY must be set to recommend")?;
    debug!("Using TMDB at {}", config.tmdb_api_url);

    let recommender = Recommender::from_config(catalog, &config)?;
    let recommendations = recommender
        .recommend(title)
        .await
        .with_context(|| format!("No recommendations for '{}'", title))?;

    print_recommendations(title, &recommendations, explain);
    Ok(())
}

/// Handle the 'search' command
fn handle_search(catalog: &Catalog, title: &str) {
    let matches = catalog.search(title);

    println!("{}", format!("Search results for '{}':", title).bold().blue());
    if matches.is_empty() {
        println!("  {}", "No matching titles".yellow());
        return;
    }
    for (_, movie) in matches.iter().take(SEARCH_LIMIT) {
        println!("{}: {}", movie.id.to_string().green(), movie.title);
    }
    if matches.len() > SEARCH_LIMIT {
        println!("  ... and {} more", matches.len() - SEARCH_LIMIT);
    }
}

/// Handle the 'titles' command
fn handle_titles(catalog: &Catalog, limit: Option<usize>) {
    let titles = catalog.title_list();
    let shown = limit.unwrap_or(titles.len());

    for (position, title) in titles.iter().take(shown).enumerate() {
        println!("{:>5}. {}", position + 1, title);
    }
}

fn print_recommendations(title: &str, recommendations: &[Recommendation], explain: bool) {
    println!(
        "{}",
        format!("Movies similar to '{}':", title).bold().blue()
    );
    for rec in recommendations {
        println!(
            "{}. {} {} {}",
            rec.rank.to_string().green(),
            rec.title.bold(),
            "⭐".yellow(),
            rec.rating
        );
        println!("   {}", rec.overview);
        if !rec.poster_url.is_empty() {
            println!("   {}", rec.poster_url.dimmed());
        }
        if explain {
            println!(
                "   {} similarity {:.3}, TMDB id {}",
                "→".cyan(),
                rec.score,
                rec.movie_id
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_recommend() {
        let cli = Cli::try_parse_from([
            "reel-recs",
            "--data-dir",
            "/tmp/model",
            "recommend",
            "--title",
            "Spectre",
            "--explain",
        ])
        .unwrap();

        assert_eq!(cli.data_dir, PathBuf::from("/tmp/model"));
        match cli.command {
            Commands::Recommend { title, explain } => {
                assert_eq!(title, "Spectre");
                assert!(explain);
            }
            _ => panic!("expected recommend"),
        }
    }

    #[test]
    fn test_catalog_loads_from_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("movie_list.dat"), "19995::Avatar\n206647::Spectre\n").unwrap();
        std::fs::write(dir.path().join("similarity.dat"), "1.0 0.1\n0.1 1.0\n").unwrap();
        let data_dir = dir.path().to_str().unwrap();

        let cli = Cli::try_parse_from(["reel-recs", "--data-dir", data_dir, "titles"]).unwrap();
        let catalog = load_catalog(&cli.data_dir).unwrap();

        assert_eq!(catalog.title_list(), vec!["Avatar", "Spectre"]);
    }

    #[test]
    fn test_parse_titles_limit() {
        let cli = Cli::try_parse_from(["reel-recs", "titles", "--limit", "10"]).unwrap();
        assert!(matches!(cli.command, Commands::Titles { limit: Some(10) }));
    }
}
