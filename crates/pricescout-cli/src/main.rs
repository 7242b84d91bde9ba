use clap::{Parser, Subcommand};

use pricescout_search::SearchService;

#[derive(Debug, Parser)]
#[command(name = "pricescout-cli")]
#[command(about = "Search product offers from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one aggregated offer search and print the results.
    Search {
        /// Product name to search for.
        query: String,
        /// Print the raw JSON response instead of a table.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search { query, json } => run_search(&query, json).await,
    }
}

async fn run_search(query: &str, json: bool) -> anyhow::Result<()> {
    let config = pricescout_core::load_app_config()?;
    if config.shopping_api_key.is_none() {
        tracing::warn!("no shopping credential configured; serving catalog results only");
    }

    let service = SearchService::from_config(&config)?;
    let outcome = service.search(query).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("source: {} ({} offers)", outcome.source, outcome.results.len());
    for offer in &outcome.results {
        let price = offer
            .price
            .map_or_else(|| "-".to_string(), |p| format!("{p:.2}"));
        let currency = offer.currency.as_deref().unwrap_or("");
        let link = offer.link.as_deref().unwrap_or("-");
        println!("{price:>10} {currency:<4} {:<50} {link}", offer.title);
    }

    Ok(())
}
