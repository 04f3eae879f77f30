//! Line-driven live search against a running ServiceSpot API.
//!
//! Each line typed replaces the search term. `:category <name>` changes the
//! category filter (`:category` alone clears it), `:quit` exits.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use search_client::{
    HttpServicesApi, RequestId, SearchSession, SearchState, CATEGORY_OPTIONS, DEFAULT_API_URL,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "servicespot-search")]
#[command(about = "Live search over the ServiceSpot directory")]
struct Cli {
    /// Base URL of the directory API
    #[arg(long, env = "SERVICESPOT_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Quiet period after typing before a search is sent
    #[arg(long, default_value_t = 300)]
    debounce_ms: u64,
}

enum Input {
    Search(String),
    Category(String),
    Quit,
}

fn parse_input(line: &str) -> Input {
    let line = line.trim_end_matches(['\r', '\n']);
    if line == ":quit" {
        Input::Quit
    } else if let Some(rest) = line.strip_prefix(":category") {
        Input::Category(rest.trim().to_lowercase())
    } else {
        Input::Search(line.to_string())
    }
}

fn print_results(state: &SearchState) {
    if let Some(error) = &state.last_error {
        println!("(last search failed: {})", error);
    }

    let count = state.services.len();
    println!("{} service{} found", count, if count == 1 { "" } else { "s" });
    for service in &state.services {
        println!("  {} [{}]", service.business_name, service.category);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,search_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let api = HttpServicesApi::new(cli.api_url);

    match api.test_connection().await {
        Ok(message) => tracing::info!(url = %api.base_url(), "{}", message),
        Err(e) => tracing::warn!(url = %api.base_url(), error = %e, "Backend not reachable"),
    }

    let categories: Vec<&str> = CATEGORY_OPTIONS
        .iter()
        .filter(|c| !c.value.is_empty())
        .map(|c| c.value)
        .collect();
    println!("Type to search. Categories: {}", categories.join(", "));

    let session =
        SearchSession::with_debounce(Arc::new(api), Duration::from_millis(cli.debounce_ms));
    let mut snapshots = session.subscribe();

    tokio::spawn(async move {
        let mut announced: RequestId = 0;
        let mut printed: RequestId = 0;
        while snapshots.changed().await.is_ok() {
            let state = snapshots.borrow_and_update().clone();
            let request = state.latest_request();
            if state.loading && announced != request {
                println!("Searching...");
                announced = request;
            } else if !state.loading && printed != request {
                print_results(&state);
                printed = request;
            }
        }
    });

    session.start();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_input(&line) {
            Input::Quit => break,
            Input::Category(category) => session.set_category(category),
            Input::Search(term) => session.set_search_term(term),
        }
    }

    Ok(())
}
