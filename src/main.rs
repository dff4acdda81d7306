use clap::Parser;
use marquee::{report, run_lookup, ProgressEvent, TmdbClient};
use std::env;
use std::process;

/// Look up a movie or TV series and print a metadata report.
#[derive(Debug, Parser)]
#[command(name = "marquee", version, about)]
struct Cli {
    /// Title to search for
    #[arg(default_value = "Breaking Bad")]
    title: String,

    /// Maximum number of search results to process
    #[arg(short, long, default_value_t = 1)]
    limit: usize,

    /// TMDB API key (falls back to the TMDB_API_KEY environment variable)
    #[arg(long)]
    api_key: Option<String>,
}

/// Handles progress events and prints formatted output to stdout
fn handle_progress_event(event: ProgressEvent) {
    match event {
        ProgressEvent::Started { search_term, limit } => {
            println!("Searching for '{}' (limit {})...", search_term, limit);
        }
        ProgressEvent::SearchFailed { reason } => {
            println!("An error occurred during search: {}", reason);
        }
        ProgressEvent::NoResults { search_term } => {
            println!(
                "No results found for '{}' or there was an error during the search.",
                search_term
            );
        }
        ProgressEvent::ResultsFound { count } => {
            println!("\nFound {} result(s). Fetching details...\n", count);
        }
        ProgressEvent::ProcessingResult { index, total: _, id } => {
            println!("--- Processing Result {} (ID: {}) ---", index + 1, id);
        }
        ProgressEvent::ReportReady { record } => {
            println!("\n{}", report::format_title_report(&record));
        }
        ProgressEvent::DetailFetchFailed { id, title, reason } => {
            println!("An error occurred fetching details for ID {}: {}", id, reason);
            println!("Could not fetch details for '{}' (ID: {}).\n", title, id);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Resolve the API key from the flag or the environment
    let api_key = match cli.api_key.or_else(|| env::var("TMDB_API_KEY").ok()) {
        Some(key) => key,
        None => {
            eprintln!("Error: No TMDB API key given.");
            eprintln!("Pass --api-key or set the TMDB_API_KEY environment variable.");
            process::exit(1);
        }
    };

    if cli.limit == 0 {
        eprintln!("Error: Limit must be at least 1.");
        process::exit(1);
    }

    let database = match TmdbClient::new(api_key) {
        Ok(database) => database,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    run_lookup(&database, &cli.title, cli.limit, handle_progress_event);
}
