//! ebay-finder - search eBay listings and sold items from the command line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use ebay_finder::commands::{SearchCommand, SearchKind};
use ebay_finder::config::{Config, OutputFormat};
use ebay_finder::ebay::Marketplace;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ebay-finder",
    version,
    about = "Search eBay listings and sold items via the Finding service"
)]
struct Cli {
    /// Marketplace global id (EBAY-US, EBAY-FR, EBAY-DE, EBAY-IT, EBAY-ES)
    #[arg(short, long, global = true)]
    marketplace: Option<Marketplace>,

    /// eBay application id (overrides EBAY_APP_ID)
    #[arg(long, global = true)]
    app_id: Option<String>,

    /// Proxy URL, e.g. socks5://host:port (overrides EBAY_PROXY)
    #[arg(long, global = true)]
    proxy: Option<String>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search active listings by keywords
    #[command(alias = "s")]
    Search {
        /// Search keywords
        keywords: String,

        /// Entries per page
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Search completed listings that sold
    Sold {
        /// Search keywords
        keywords: String,

        /// Entries per page
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// List supported marketplaces
    Marketplaces,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(marketplace) = cli.marketplace {
        config.marketplace = marketplace;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(app_id) = cli.app_id {
        config.app_id = Some(app_id);
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }

    match cli.command {
        Commands::Search { keywords, limit } => {
            if let Some(limit) = limit {
                config.page_size = limit;
            }
            let output = SearchCommand::new(config).execute(SearchKind::Active, &keywords).await?;
            println!("{}", output);
        }

        Commands::Sold { keywords, limit } => {
            if let Some(limit) = limit {
                config.page_size = limit;
            }
            let output = SearchCommand::new(config).execute(SearchKind::Sold, &keywords).await?;
            println!("{}", output);
        }

        Commands::Marketplaces => {
            println!("Supported eBay marketplaces:\n");
            println!("{:<10} {:<12}", "Global ID", "Domain");
            println!("{:-<10} {:-<12}", "", "");

            for marketplace in Marketplace::all() {
                println!("{:<10} {:<12}", marketplace.global_id(), marketplace.domain());
            }
        }
    }

    Ok(())
}
