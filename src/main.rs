mod fetch;
mod models;
mod output;
mod parser;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use reqwest::Client;

use models::{BuffetDoc, KantinDoc};

#[derive(Parser)]
#[command(
    name = "manas_scraper",
    about = "Manas University canteen & buffet menu scraper"
)]
struct Cli {
    /// Output directory for the JSON documents
    #[arg(long, global = true, default_value = "public")]
    out: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape the canteen menu page and write manas_kantin.json
    Kantin,
    /// Scrape the buffet price list and write buffet_1.json
    Buffet,
    /// Scrape both pages, fetched concurrently
    Run,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let client = fetch::client()?;

    match cli.command {
        Commands::Kantin => scrape_kantin(&client, &cli.out).await?,
        Commands::Buffet => scrape_buffet(&client, &cli.out).await?,
        Commands::Run => {
            // The two reconstructions are independent; only the fetches overlap.
            tokio::try_join!(
                scrape_kantin(&client, &cli.out),
                scrape_buffet(&client, &cli.out)
            )?;
        }
    }

    Ok(())
}

async fn scrape_kantin(client: &Client, out_dir: &Path) -> Result<()> {
    let html = fetch::fetch_html(client, fetch::KANTIN_URL).await?;
    let (foods, menus) = parser::process_kantin(&html);
    let doc = KantinDoc {
        foods,
        menus,
        meta: output::kantin_meta(),
    };

    let path = out_dir.join("manas_kantin.json");
    output::write_json(&path, &doc)?;
    println!(
        "Wrote {} ({} foods, {} menu days)",
        path.display(),
        doc.foods.len(),
        doc.menus.len()
    );
    Ok(())
}

async fn scrape_buffet(client: &Client, out_dir: &Path) -> Result<()> {
    let html = fetch::fetch_html(client, fetch::BUFFET_URL).await?;
    let categories = parser::process_buffet(&html);
    let doc = BuffetDoc {
        categories,
        meta: output::buffet_meta(),
    };

    let path = out_dir.join("buffet_1.json");
    output::write_json(&path, &doc)?;
    let item_count: usize = doc.categories.iter().map(|c| c.items.len()).sum();
    println!(
        "Wrote {} ({} categories, {} items)",
        path.display(),
        doc.categories.len(),
        item_count
    );
    Ok(())
}
